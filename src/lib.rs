// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Maximum flows and minimum cuts in capacitated directed networks.
//!
//! A [`FlowNetwork`] is built once from edge insertions and is read-only
//! afterwards. Each flow computation creates its own residual network, so a
//! network can be reused for different terminals or shared between threads.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! let g = FlowNetwork::from_edges(vec![
//!     ('s', '1', 16), ('s', '2', 13),
//!     ('1', '2', 10), ('1', '3', 12),
//!     ('2', '1', 4), ('2', '4', 14),
//!     ('3', '2', 9), ('3', 't', 20),
//!     ('4', '3', 7), ('4', 't', 4),
//! ]).unwrap();
//!
//! let (value, _) = g.max_flow(&'s', &'t').unwrap();
//! let cut = g.min_cut(&'s', &'t').unwrap();
//! assert_eq!(value, 23);
//! assert_eq!(cut.value, 23);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod traits;
pub use self::traits::{Capacity, Indexable};

pub mod builder;
pub use self::builder::NetworkBuilder;

pub mod network;
pub use self::network::{Edge, FlowNetwork, Node};

// # Algorithms

pub mod maxflow;
pub use self::maxflow::{max_flow, min_cut, EdmondsKarp, FlowAssignment, MinCut};
