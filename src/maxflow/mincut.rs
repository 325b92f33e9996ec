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

//! Minimum cuts from converged residual networks.

use super::bfs::PathFinder;
use super::residual::ResidualNetwork;
use crate::network::{Edge, FlowNetwork, Node};
use crate::traits::{Capacity, Indexable};

use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A minimum `s`-`t`-cut.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MinCut<V, F> {
    /// The total capacity of the cut edges.
    pub value: F,
    /// The vertices on the source side, in insertion order.
    pub source_side: Vec<V>,
    /// The edges from the source side to the sink side, in insertion order.
    pub edges: Vec<Edge>,
}

impl<V, F> MinCut<V, F>
where
    V: PartialEq,
{
    /// Return `true` if `u` is on the source side of the cut.
    pub fn contains(&self, u: &V) -> bool {
        self.source_side.iter().any(|v| v == u)
    }
}

/// Extract the minimum cut from a converged residual network.
///
/// The source side consists of all nodes reachable from `src` via arcs with
/// positive residual capacity. If `res` is not the residual network of a
/// maximum flow the result is a cut, but in general not a minimal one.
pub fn extract_mincut<V, F>(
    g: &FlowNetwork<V, F>,
    res: &ResidualNetwork<F>,
    finder: &mut PathFinder,
    src: Node,
) -> MinCut<V, F>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    finder.reach(res, src.index());

    let source_side = g
        .nodes()
        .filter(|u| finder.is_reached(u.index()))
        .map(|u| g.key(u).clone())
        .collect();
    let edges: Vec<_> = g
        .edges()
        .filter(|&e| finder.is_reached(g.src(e).index()) && !finder.is_reached(g.snk(e).index()))
        .collect();
    let value = edges.iter().fold(F::zero(), |acc, &e| acc + g.upper(e));

    MinCut {
        value,
        source_side,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::extract_mincut;
    use crate::maxflow::bfs::PathFinder;
    use crate::maxflow::residual::ResidualNetwork;
    use crate::network::FlowNetwork;
    use crate::traits::Indexable;

    #[test]
    fn test_cut_of_zero_flow() {
        let g = FlowNetwork::from_edges(vec![('s', 'a', 2), ('a', 't', 0), ('s', 's', 4)]).unwrap();
        let res = ResidualNetwork::new(&g);
        let mut finder = PathFinder::new(g.num_nodes());
        let cut = extract_mincut(&g, &res, &mut finder, g.node(&'s').unwrap());
        assert_eq!(cut.source_side, vec!['s', 'a']);
        assert_eq!(cut.edges.iter().map(|e| e.index()).collect::<Vec<_>>(), vec![1]);
        assert_eq!(cut.value, 0);
        assert!(cut.contains(&'a'));
        assert!(!cut.contains(&'t'));
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use crate::maxflow::{FlowAssignment, MinCut};
        use crate::network::FlowNetwork;

        #[test]
        fn test_serde() {
            let g = FlowNetwork::from_edges(vec![("s", "a", 2), ("a", "t", 1)]).unwrap();
            let (_, flow) = g.max_flow(&"s", &"t").unwrap();
            let cut = g.min_cut(&"s", &"t").unwrap();

            let serialized = serde_json::to_string(&flow).unwrap();
            let flow2: FlowAssignment<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(flow, flow2);

            let serialized = serde_json::to_string(&cut).unwrap();
            let cut2: MinCut<String, i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(cut2.value, 1);
            assert_eq!(cut2.source_side, vec!["s".to_string(), "a".to_string()]);
            assert_eq!(cut2.edges, cut.edges);
        }
    }
}
