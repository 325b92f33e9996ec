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

//! Realized flow on the edges of a network.

use super::residual::ResidualNetwork;
use crate::error::{Error, Result};
use crate::network::{Edge, FlowNetwork, Node};
use crate::traits::{Capacity, Indexable};

use log::error;

use std::fmt::Debug;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The flow on each edge of a network.
///
/// The assignment is derived from a converged residual network and never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FlowAssignment<F> {
    flows: Vec<F>,
}

impl<F> FlowAssignment<F>
where
    F: Capacity,
{
    /// Return the assignment with zero flow on each of `m` edges.
    pub fn zero(m: usize) -> Self {
        FlowAssignment {
            flows: vec![F::zero(); m],
        }
    }

    /// Return the number of edges.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Return `true` if the assignment covers no edge.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Return the flow on edge `e`.
    pub fn get(&self, e: Edge) -> F {
        self.flows[e.index()]
    }

    /// Return the flow values indexed by edge number.
    pub fn as_slice(&self) -> &[F] {
        &self.flows
    }

    /// Return an iterator over all edges and their flow in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, F)> + '_ {
        self.flows.iter().enumerate().map(|(i, &f)| (Edge(i), f))
    }

    /// Return an iterator over the edges carrying a positive flow.
    pub fn positive(&self) -> impl Iterator<Item = (Edge, F)> + '_ {
        self.iter().filter(|&(_, f)| f > F::zero())
    }

    /// Return the total flow entering node `u`.
    pub fn inflow<V>(&self, g: &FlowNetwork<V, F>, u: Node) -> F
    where
        V: Eq + Hash + Clone + Debug,
    {
        g.inedges(u).fold(F::zero(), |acc, (e, _)| acc + self.get(e))
    }

    /// Return the total flow leaving node `u`.
    pub fn outflow<V>(&self, g: &FlowNetwork<V, F>, u: Node) -> F
    where
        V: Eq + Hash + Clone + Debug,
    {
        g.outedges(u).fold(F::zero(), |acc, (e, _)| acc + self.get(e))
    }

    /// Check capacity bounds on every edge and flow conservation at every
    /// node except `src` and `snk`.
    pub fn validate<V>(&self, g: &FlowNetwork<V, F>, src: Node, snk: Node) -> Result<()>
    where
        V: Eq + Hash + Clone + Debug,
    {
        if self.flows.len() != g.num_edges() {
            return Err(violation(format!(
                "flow covers {} edges but the network has {}",
                self.flows.len(),
                g.num_edges()
            )));
        }
        for (e, f) in self.iter() {
            check_bounds(g, e, f)?;
        }
        for u in g.nodes().filter(|&u| u != src && u != snk) {
            let (fin, fout) = (self.inflow(g, u), self.outflow(g, u));
            if fin != fout {
                return Err(violation(format!(
                    "flow not conserved at {:?}: inflow {:?}, outflow {:?}",
                    g.key(u),
                    fin,
                    fout
                )));
            }
        }
        Ok(())
    }
}

fn violation(msg: String) -> Error {
    error!("{}", msg);
    Error::InternalInvariantViolation(msg)
}

fn check_bounds<V, F>(g: &FlowNetwork<V, F>, e: Edge, f: F) -> Result<()>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    if f < F::zero() || f > g.upper(e) {
        let (u, v) = g.endpoints(e);
        return Err(violation(format!(
            "flow {:?} on edge {} ({:?} -> {:?}) outside of [0, {:?}]",
            f,
            e,
            u,
            v,
            g.upper(e)
        )));
    }
    Ok(())
}

/// Derive the flow on each edge from a residual network.
///
/// The flow on `e` is its capacity minus the residual capacity of its
/// forward arc. A value outside of `[0, capacity]` can only be caused by a
/// bug and is reported as [`Error::InternalInvariantViolation`].
pub fn extract_flow<V, F>(g: &FlowNetwork<V, F>, res: &ResidualNetwork<F>) -> Result<FlowAssignment<F>>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    let mut flows = Vec::with_capacity(g.num_edges());
    for e in g.edges() {
        let f = g.upper(e) - res.forward(e);
        check_bounds(g, e, f)?;
        flows.push(f);
    }
    Ok(FlowAssignment { flows })
}
