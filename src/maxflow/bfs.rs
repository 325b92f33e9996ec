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

//! Breadth-first search in the residual network.
//!
//! The search only follows arcs with strictly positive residual capacity and
//! scans the arcs of each node in the order in which they appear in the
//! [`ResidualNetwork`], which is the insertion order of the original edges.
//! Hence the returned augmenting path is a shortest one (by number of arcs)
//! and ties are always broken the same way.

use super::residual::ResidualNetwork;
use crate::traits::Capacity;

use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

/// An augmenting path in a residual network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath {
    // residual arcs from the source to the sink
    arcs: Vec<usize>,
}

impl AugmentingPath {
    /// Return the residual arcs of the path from source to sink.
    pub fn arcs(&self) -> &[usize] {
        &self.arcs
    }

    /// Return the number of arcs on the path.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Return `true` if the path has no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Return the minimal residual capacity along the path.
    pub fn bottleneck<F: Capacity>(&self, res: &ResidualNetwork<F>) -> F {
        let mut arcs = self.arcs.iter();
        let first = arcs.next().map(|&a| res.residual(a)).unwrap_or_else(F::zero);
        arcs.fold(first, |df, &a| df.min(res.residual(a)))
    }

    /// Push `df` units of flow along the whole path.
    pub fn augment<F: Capacity>(&self, res: &mut ResidualNetwork<F>, df: F) {
        for &a in &self.arcs {
            res.push(a, df);
        }
    }
}

/// Data structures of the breadth-first search.
///
/// The data structures can be reused for multiple searches on residual
/// networks of the same size.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    // incoming arc and predecessor of each reached node
    pred: Vec<(usize, usize)>,
    queue: VecDeque<usize>,
}

impl PathFinder {
    /// Create search data for a residual network with `n` nodes.
    pub fn new(n: usize) -> Self {
        PathFinder {
            pred: vec![(UNREACHED, UNREACHED); n],
            queue: VecDeque::with_capacity(n),
        }
    }

    fn run<F: Capacity>(&mut self, res: &ResidualNetwork<F>, src: usize, snk: Option<usize>) {
        self.pred.clear();
        self.pred.resize(res.num_nodes(), (UNREACHED, UNREACHED));
        self.queue.clear();

        // just some dummy arc
        self.pred[src] = (src, src);
        if snk == Some(src) {
            return;
        }
        self.queue.push_back(src);
        'bfs: while let Some(u) = self.queue.pop_front() {
            for &(a, v) in res.neighs(u) {
                if self.pred[v].0 == UNREACHED && !res.residual(a).is_zero() {
                    self.pred[v] = (a, u);
                    if Some(v) == snk {
                        break 'bfs;
                    }
                    self.queue.push_back(v);
                }
            }
        }
    }

    /// Return `true` if node `u` has been reached by the last search.
    pub fn is_reached(&self, u: usize) -> bool {
        self.pred.get(u).map_or(false, |p| p.0 != UNREACHED)
    }

    /// Search a shortest augmenting path from `src` to `snk`.
    ///
    /// Returns `None` if the sink cannot be reached, this is the regular
    /// termination condition of the augmenting path method.
    pub fn find_path<F: Capacity>(&mut self, res: &ResidualNetwork<F>, src: usize, snk: usize) -> Option<AugmentingPath> {
        self.run(res, src, Some(snk));
        if !self.is_reached(snk) {
            return None;
        }

        let mut arcs = vec![];
        let mut v = snk;
        while v != src {
            let (a, u) = self.pred[v];
            arcs.push(a);
            v = u;
        }
        arcs.reverse();
        Some(AugmentingPath { arcs })
    }

    /// Mark all nodes reachable from `src` via residual arcs.
    ///
    /// Afterwards [`PathFinder::is_reached`] tells whether a node belongs to
    /// the reachable set.
    pub fn reach<F: Capacity>(&mut self, res: &ResidualNetwork<F>, src: usize) {
        self.run(res, src, None)
    }
}

/// Search a shortest augmenting path from `src` to `snk`.
///
/// This is a convenience wrapper around [`PathFinder::find_path`] with
/// freshly allocated search data.
pub fn find_path<F: Capacity>(res: &ResidualNetwork<F>, src: usize, snk: usize) -> Option<AugmentingPath> {
    PathFinder::new(res.num_nodes()).find_path(res, src, snk)
}

#[cfg(test)]
mod tests {
    use super::{find_path, PathFinder};
    use crate::maxflow::residual::ResidualNetwork;
    use crate::network::FlowNetwork;

    #[test]
    fn test_shortest_path() {
        // a long path inserted first and a short one inserted last
        let g = FlowNetwork::from_edges(vec![
            ('s', 'a', 1),
            ('a', 'b', 1),
            ('b', 't', 1),
            ('s', 't', 1),
        ])
        .unwrap();
        let res = ResidualNetwork::new(&g);
        let path = find_path(&res, 0, 3).unwrap();
        assert_eq!(path.arcs(), &[6]);
        assert_eq!(path.bottleneck(&res), 1);
    }

    #[test]
    fn test_insertion_order_ties() {
        let g = FlowNetwork::from_edges(vec![
            ('s', 'b', 2),
            ('s', 'a', 5),
            ('a', 't', 5),
            ('b', 't', 2),
        ])
        .unwrap();
        let res = ResidualNetwork::new(&g);
        let path = find_path(&res, 0, 3).unwrap();
        // both paths have two arcs, the one through `b` is found first
        assert_eq!(path.arcs(), &[0, 6]);
        assert_eq!(path.bottleneck(&res), 2);
    }

    #[test]
    fn test_saturated_and_backward() {
        let g = FlowNetwork::from_edges(vec![('s', 'a', 3), ('a', 't', 3), ('t', 's', 0)]).unwrap();
        let mut res = ResidualNetwork::new(&g);
        let mut finder = PathFinder::new(res.num_nodes());

        let path = finder.find_path(&res, 0, 2).unwrap();
        let df = path.bottleneck(&res);
        path.augment(&mut res, df);
        assert!(finder.find_path(&res, 0, 2).is_none());

        // the sink reaches the source only via the backward arcs
        let back = finder.find_path(&res, 2, 0).unwrap();
        assert_eq!(back.arcs(), &[3, 1]);

        finder.reach(&res, 0);
        assert!(finder.is_reached(0));
        assert!(!finder.is_reached(1));
        assert!(!finder.is_reached(2));
    }

    #[test]
    fn test_zero_capacity() {
        let g = FlowNetwork::from_edges(vec![(0, 1, 0u64)]).unwrap();
        let res = ResidualNetwork::new(&g);
        assert_eq!(find_path(&res, 0, 1), None);
    }
}
