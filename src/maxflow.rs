/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Maximum flows and minimum cuts.
//!
//! The computation is split into the following parts:
//!
//! - [`residual`]: the residual network derived from a [`FlowNetwork`],
//! - [`bfs`]: the breadth-first search for shortest augmenting paths,
//! - [`edmondskarp`]: the augmentation loop,
//! - [`flow`]: the realized flow on the original edges,
//! - [`mincut`]: the minimum cut of a converged residual network.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! let g = FlowNetwork::from_edges(vec![
//!     ("s", "A", 10),
//!     ("s", "B", 5),
//!     ("A", "B", 15),
//!     ("A", "t", 10),
//!     ("B", "t", 10),
//! ]).unwrap();
//!
//! let (value, flow) = g.max_flow(&"s", &"t").unwrap();
//! assert_eq!(value, 15);
//!
//! let cut = g.min_cut(&"s", &"t").unwrap();
//! assert_eq!(cut.value, value);
//! assert_eq!(cut.source_side, vec!["s"]);
//! assert!(cut.edges.iter().all(|&e| flow.get(e) == g.upper(e)));
//! ```

pub mod bfs;
pub mod edmondskarp;
pub mod flow;
pub mod mincut;
pub mod residual;

pub use self::bfs::{find_path, AugmentingPath, PathFinder};
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};
pub use self::flow::{extract_flow, FlowAssignment};
pub use self::mincut::{extract_mincut, MinCut};
pub use self::residual::ResidualNetwork;

use crate::error::Result;
use crate::network::FlowNetwork;
use crate::traits::Capacity;

use std::fmt::Debug;
use std::hash::Hash;

/// Compute a maximum flow from `src` to `snk`.
///
/// Returns the flow value and the flow on each edge.
pub fn max_flow<V, F>(g: &FlowNetwork<V, F>, src: &V, snk: &V) -> Result<(F, FlowAssignment<F>)>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    let mut ek = EdmondsKarp::new(g);
    let value = ek.solve(src, snk)?;
    Ok((value, ek.flow_assignment()?))
}

/// Compute a minimum cut separating `src` from `snk`.
///
/// This runs a maximum flow computation first, by the max-flow min-cut
/// theorem the value of the returned cut equals the maximum flow value.
pub fn min_cut<V, F>(g: &FlowNetwork<V, F>, src: &V, snk: &V) -> Result<MinCut<V, F>>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    let mut ek = EdmondsKarp::new(g);
    ek.solve(src, snk)?;
    ek.mincut()
}

impl<V, F> FlowNetwork<V, F>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// See [`max_flow`].
    pub fn max_flow(&self, src: &V, snk: &V) -> Result<(F, FlowAssignment<F>)> {
        max_flow(self, src, snk)
    }

    /// Compute a minimum cut separating `src` from `snk`.
    ///
    /// See [`min_cut`].
    pub fn min_cut(&self, src: &V, snk: &V) -> Result<MinCut<V, F>> {
        min_cut(self, src, snk)
    }
}
