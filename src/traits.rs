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

//! Basic traits shared by the network and the algorithms.

use crate::num::traits::NumAssign;

use std::fmt::Debug;

/// An item (node or edge) that has a dense index.
pub trait Indexable {
    /// Return the index of this item.
    fn index(&self) -> usize;
}

/// Numeric type usable as edge capacity and flow value.
///
/// Every integer type qualifies, as does any exact number type with a total
/// order (e.g. `num_rational::Ratio<i64>`). Floating point types do not,
/// the algorithms rely on exact comparisons with zero.
pub trait Capacity: NumAssign + Ord + Copy + Debug {}

impl<F> Capacity for F where F: NumAssign + Ord + Copy + Debug {}
