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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The algorithm repeatedly searches a shortest augmenting path in the
//! residual network by breadth-first search and pushes the path's bottleneck
//! capacity along it. Choosing shortest paths bounds the number of
//! augmentations by `O(nm)`.
//!
//! # Example
//!
//! ```
//! use rs_flownet::maxflow::EdmondsKarp;
//! use rs_flownet::FlowNetwork;
//!
//! let g = FlowNetwork::from_edges(vec![
//!     ('s', 'a', 5), ('s', 'c', 5),
//!     ('a', 'b', 2), ('a', 'c', 1), ('a', 'd', 1),
//!     ('c', 'd', 2), ('d', 'b', 2),
//!     ('b', 't', 4), ('d', 't', 5),
//! ]).unwrap();
//!
//! let mut ek = EdmondsKarp::new(&g);
//! assert_eq!(ek.solve(&'s', &'t').unwrap(), 5);
//!
//! let flow = ek.flow_assignment().unwrap();
//! assert!(flow.iter().all(|(e, f)| f >= 0 && f <= g.upper(e)));
//! assert!(g.nodes().filter(|&u| *g.key(u) != 's' && *g.key(u) != 't').all(|u| {
//!     flow.inflow(&g, u) == flow.outflow(&g, u)
//! }));
//!
//! let cut = ek.mincut().unwrap();
//! assert_eq!(cut.value, 5);
//! assert_eq!(cut.source_side, vec!['s', 'a', 'c']);
//! ```

use super::bfs::{AugmentingPath, PathFinder};
use super::flow::{extract_flow, FlowAssignment};
use super::mincut::{extract_mincut, MinCut};
use super::residual::ResidualNetwork;
use crate::error::{Error, Result};
use crate::network::{Edge, FlowNetwork, Node};
use crate::traits::{Capacity, Indexable};

use log::{debug, error, trace, warn};

use std::fmt::Debug;
use std::hash::Hash;

/// States of the augmenting path loop.
enum State {
    Searching,
    Augmenting(AugmentingPath),
    Converged,
}

/// Max-flow algorithm of Edmonds and Karp.
///
/// Each computation builds its own residual network and the instance keeps
/// it after convergence. The network itself is only borrowed and never
/// modified, so several instances may work on the same network concurrently.
pub struct EdmondsKarp<'a, V, F> {
    g: &'a FlowNetwork<V, F>,
    // residual network of the latest converged computation
    residual: Option<ResidualNetwork<F>>,
    finder: PathFinder,
    // the terminals of the latest converged computation
    terminals: Option<(Node, Node)>,
    value: F,
    naugment: usize,

    /// Maximal number of augmentations of a single computation.
    ///
    /// If more augmentations would be necessary the computation fails with
    /// [`Error::AugmentationLimit`]. The default is `None` (no limit).
    pub max_augmentations: Option<usize>,

    /// Whether the flow is verified after convergence.
    ///
    /// The verification checks the capacity bounds and flow conservation
    /// of the computed flow and costs `O(n + m)`. The default is `true`.
    pub check_invariants: bool,
}

impl<'a, V, F> EdmondsKarp<'a, V, F>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(g: &'a FlowNetwork<V, F>) -> Self {
        EdmondsKarp {
            g,
            residual: None,
            finder: PathFinder::new(g.num_nodes()),
            terminals: None,
            value: F::zero(),
            naugment: 0,
            max_augmentations: None,
            check_invariants: true,
        }
    }

    /// Return the underlying network.
    pub fn as_network(&self) -> &'a FlowNetwork<V, F> {
        self.g
    }

    /// Return the residual network of the latest converged computation.
    pub fn residual(&self) -> Option<&ResidualNetwork<F>> {
        self.residual.as_ref()
    }

    /// Return `true` if the latest computation has converged.
    pub fn is_converged(&self) -> bool {
        self.terminals.is_some()
    }

    /// Return the number of augmentations of the latest computation.
    pub fn num_augmentations(&self) -> usize {
        self.naugment
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> Result<F> {
        self.converged().map(|_| self.value)
    }

    /// Return the flow value on edge `e`.
    pub fn flow(&self, e: Edge) -> Result<F> {
        let (_, _, residual) = self.converged()?;
        Ok(self.g.upper(e) - residual.forward(e))
    }

    /// Return the flow on all edges of the latest computed maximum flow.
    pub fn flow_assignment(&self) -> Result<FlowAssignment<F>> {
        let (_, _, residual) = self.converged()?;
        extract_flow(self.g, residual)
    }

    /// Return the minimal cut associated with the latest maximum flow.
    pub fn mincut(&mut self) -> Result<MinCut<V, F>> {
        let (src, snk) = self.terminals.ok_or(Error::NotConverged)?;
        let residual = self.residual.as_ref().ok_or(Error::NotConverged)?;
        if src == snk {
            return Ok(MinCut {
                value: F::zero(),
                source_side: vec![self.g.key(src).clone()],
                edges: vec![],
            });
        }
        Ok(extract_mincut(self.g, residual, &mut self.finder, src))
    }

    fn converged(&self) -> Result<(Node, Node, &ResidualNetwork<F>)> {
        match (self.terminals, self.residual.as_ref()) {
            (Some((s, t)), Some(residual)) => Ok((s, t, residual)),
            _ => Err(Error::NotConverged),
        }
    }

    fn reset(&mut self) {
        self.residual = None;
        self.terminals = None;
        self.value = F::zero();
        self.naugment = 0;
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// Returns the value of the flow. Fails with [`Error::UnknownVertex`] if
    /// one of the terminals is not in the network. If `src == snk` the flow
    /// value is zero by convention.
    ///
    /// The results of a previous computation are dropped in any case, also
    /// if this computation fails.
    pub fn solve(&mut self, src: &V, snk: &V) -> Result<F> {
        self.solve_until(src, snk, || false)
    }

    /// Compute a maximum flow from `src` to `snk` unless aborted.
    ///
    /// The callback `abort` is called before each search for an augmenting
    /// path. If it returns `true` the computation stops with
    /// [`Error::Aborted`] and all intermediate results are dropped.
    pub fn solve_until<A>(&mut self, src: &V, snk: &V, mut abort: A) -> Result<F>
    where
        A: FnMut() -> bool,
    {
        self.reset();
        let s = self.g.try_node(src)?;
        let t = self.g.try_node(snk)?;
        let mut residual = ResidualNetwork::new(self.g);

        if s == t {
            debug!("source and sink {:?} coincide, flow value is zero", src);
            self.residual = Some(residual);
            self.terminals = Some((s, t));
            return Ok(self.value);
        }

        debug!(
            "max flow from {:?} to {:?} ({} nodes, {} edges)",
            src,
            snk,
            self.g.num_nodes(),
            self.g.num_edges()
        );

        let mut state = State::Searching;
        loop {
            state = match state {
                State::Searching => {
                    if abort() {
                        let augmentations = self.naugment;
                        warn!("max flow aborted after {} augmentations", augmentations);
                        self.reset();
                        return Err(Error::Aborted { augmentations });
                    }
                    match self.finder.find_path(&residual, s.index(), t.index()) {
                        Some(path) => State::Augmenting(path),
                        None => State::Converged,
                    }
                }
                State::Augmenting(path) => {
                    if let Some(limit) = self.max_augmentations {
                        if self.naugment >= limit {
                            warn!("max flow stopped at augmentation limit {}", limit);
                            self.reset();
                            return Err(Error::AugmentationLimit(limit));
                        }
                    }

                    let df = path.bottleneck(&residual);
                    debug_assert!(!df.is_zero());
                    path.augment(&mut residual, df);
                    self.value += df;
                    self.naugment += 1;
                    trace!(
                        "augmentation {}: {} arcs, bottleneck {:?}, value {:?}",
                        self.naugment,
                        path.len(),
                        df,
                        self.value
                    );
                    State::Searching
                }
                State::Converged => break,
            }
        }

        if self.check_invariants {
            if let Err(err) = self.verify(&residual, s, t) {
                self.reset();
                return Err(err);
            }
        }

        debug!(
            "max flow converged with value {:?} after {} augmentations",
            self.value, self.naugment
        );
        self.residual = Some(residual);
        self.terminals = Some((s, t));
        Ok(self.value)
    }

    fn verify(&self, residual: &ResidualNetwork<F>, s: Node, t: Node) -> Result<()> {
        residual.check_pairs(self.g)?;
        let flow = extract_flow(self.g, residual)?;
        flow.validate(self.g, s, t)?;
        let excess = flow.outflow(self.g, s) - flow.inflow(self.g, s);
        if excess != self.value {
            let msg = format!(
                "net outflow {:?} of the source differs from flow value {:?}",
                excess, self.value
            );
            error!("{}", msg);
            return Err(Error::InternalInvariantViolation(msg));
        }
        Ok(())
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source vertex `src`
/// to the sink vertex `snk` with the capacities stored in `g`.
///
/// The function returns the flow value, the flow on each edge and a minimal
/// cut.
pub fn edmondskarp<V, F>(g: &FlowNetwork<V, F>, src: &V, snk: &V) -> Result<(F, FlowAssignment<F>, MinCut<V, F>)>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    let mut maxflow = EdmondsKarp::new(g);
    let value = maxflow.solve(src, snk)?;
    Ok((value, maxflow.flow_assignment()?, maxflow.mincut()?))
}
