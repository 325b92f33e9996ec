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

//! The residual network of a flow computation.
//!
//! Each edge `e = (u,v)` of the [`FlowNetwork`] owns a pair of residual
//! arcs: the forward arc `2e` from `u` to `v` and the backward arc `2e+1`
//! from `v` to `u`, so that `a ^ 1` is the partner of arc `a`. Initially the
//! forward arc carries the full capacity and the backward arc nothing, and
//! the sum of both stays equal to the capacity of `e` all the time.

use crate::error::{Error, Result};
use crate::network::{Edge, FlowNetwork};
use crate::traits::{Capacity, Indexable};

use std::fmt::Debug;
use std::hash::Hash;

/// Residual capacities of a flow network.
///
/// The residual network is created from a network by [`ResidualNetwork::new`]
/// and exclusively owned by one flow computation.
#[derive(Clone, Debug)]
pub struct ResidualNetwork<F> {
    // For each node the residual arcs leaving it as `(arc, head)`, in the
    // order in which the original edges were inserted. Loops are omitted.
    neighs: Vec<Vec<(usize, usize)>>,
    residual: Vec<F>,
}

impl<F> ResidualNetwork<F>
where
    F: Capacity,
{
    /// Build the residual network of `g` with zero flow.
    pub fn new<V>(g: &FlowNetwork<V, F>) -> Self
    where
        V: Eq + Hash + Clone + Debug,
    {
        let mut neighs = vec![vec![]; g.num_nodes()];
        let mut residual = Vec::with_capacity(g.num_edges() * 2);
        for e in g.edges() {
            let (u, v) = g.enodes(e);
            let a = e.index() << 1;
            residual.push(g.upper(e));
            residual.push(F::zero());
            if u != v {
                neighs[u.index()].push((a, v.index()));
                neighs[v.index()].push((a | 1, u.index()));
            }
        }
        ResidualNetwork { neighs, residual }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.neighs.len()
    }

    /// Return the residual arcs leaving node `u` as `(arc, head)` pairs.
    pub fn neighs(&self, u: usize) -> &[(usize, usize)] {
        &self.neighs[u]
    }

    /// Return the residual capacity of an arc.
    pub fn residual(&self, arc: usize) -> F {
        self.residual[arc]
    }

    /// Return the residual capacity of the forward arc of `e`.
    pub fn forward(&self, e: Edge) -> F {
        self.residual[e.index() << 1]
    }

    /// Return the residual capacity of the backward arc of `e`.
    ///
    /// This equals the flow currently sent along `e`.
    pub fn backward(&self, e: Edge) -> F {
        self.residual[(e.index() << 1) | 1]
    }

    /// Push `df` units of flow along a residual arc.
    ///
    /// The residual capacity of `arc` decreases by `df` and the one of its
    /// partner increases by the same amount.
    pub fn push(&mut self, arc: usize, df: F) {
        debug_assert!(df <= self.residual[arc], "Push exceeds residual capacity");
        self.residual[arc] -= df;
        self.residual[arc ^ 1] += df;
    }

    /// Check that both arcs of every edge are non-negative and add up to
    /// the edge's capacity.
    pub fn check_pairs<V>(&self, g: &FlowNetwork<V, F>) -> Result<()>
    where
        V: Eq + Hash + Clone + Debug,
    {
        for e in g.edges() {
            let (fwd, bwd) = (self.forward(e), self.backward(e));
            if fwd < F::zero() || bwd < F::zero() || fwd + bwd != g.upper(e) {
                let (u, v) = g.endpoints(e);
                return Err(Error::InternalInvariantViolation(format!(
                    "residual pair of edge {} ({:?} -> {:?}) is ({:?}, {:?}) but capacity is {:?}",
                    e,
                    u,
                    v,
                    fwd,
                    bwd,
                    g.upper(e)
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ResidualNetwork;
    use crate::network::FlowNetwork;
    use crate::traits::Indexable;

    #[test]
    fn test_initial_pairs() {
        let g = FlowNetwork::from_edges(vec![('a', 'b', 4), ('a', 'b', 6), ('b', 'c', 1)]).unwrap();
        let res = ResidualNetwork::new(&g);
        assert_eq!(res.num_nodes(), 3);
        for e in g.edges() {
            assert_eq!(res.forward(e), g.upper(e));
            assert_eq!(res.backward(e), 0);
        }
        assert!(res.check_pairs(&g).is_ok());

        // parallel edges get their own pairs, the head sees backward arcs
        assert_eq!(res.neighs(0), &[(0, 1), (2, 1)]);
        assert_eq!(res.neighs(1), &[(1, 0), (3, 0), (4, 2)]);
        assert_eq!(res.neighs(2), &[(5, 1)]);
    }

    #[test]
    fn test_push() {
        let g = FlowNetwork::from_edges(vec![(1, 2, 5u32)]).unwrap();
        let mut res = ResidualNetwork::new(&g);
        let e = g.edges().next().unwrap();
        res.push(e.index() << 1, 3);
        assert_eq!((res.forward(e), res.backward(e)), (2, 3));
        res.push((e.index() << 1) | 1, 1);
        assert_eq!((res.forward(e), res.backward(e)), (3, 2));
        assert!(res.check_pairs(&g).is_ok());
    }

    #[test]
    fn test_loops_not_traversable() {
        let g = FlowNetwork::from_edges(vec![('x', 'x', 9), ('x', 'y', 1)]).unwrap();
        let res = ResidualNetwork::new(&g);
        assert_eq!(res.neighs(0), &[(2, 1)]);
        assert_eq!(res.forward(g.edges().next().unwrap()), 9);
    }

    #[test]
    fn test_broken_pair() {
        let g = FlowNetwork::from_edges(vec![(1, 2, 5)]).unwrap();
        let mut res = ResidualNetwork::new(&g);
        res.residual[0] = 4;
        assert!(res.check_pairs(&g).is_err());
    }
}
