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

//! Construction of flow networks.
//!
//! In general networks are static objects. In order to build a network one
//! uses a [`NetworkBuilder`] and, once the construction is complete, converts
//! it into a [`FlowNetwork`]. This 2-level approach keeps the node and edge
//! numbering of a network stable for its whole lifetime.

use crate::error::{Error, Result};
use crate::network::{Edge, EdgeData, FlowNetwork, Node, NodeData};
use crate::traits::Capacity;

use log::trace;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A builder for a [`FlowNetwork`].
///
/// The basic task is to map vertex keys to dense node numbers and to
/// arrange the final outgoing and incoming edges of each node in successive
/// positions.
#[derive(Clone, Debug)]
pub struct NetworkBuilder<V, F> {
    keys: Vec<V>,
    ids: HashMap<V, usize>,

    /// The outgoing and incoming edges of each node.
    nodes: Vec<[Vec<usize>; 2]>,

    /// The end nodes and capacities of each edge.
    edges: Vec<EdgeData<F>>,
}

impl<V, F> Default for NetworkBuilder<V, F>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    fn default() -> Self {
        NetworkBuilder::new()
    }
}

impl<V, F> NetworkBuilder<V, F>
where
    V: Eq + Hash + Clone + Debug,
    F: Capacity,
{
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacities(0, 0)
    }

    /// Create a new, empty builder.
    ///
    /// The builder might be passed a guess of the number of nodes and
    /// edges. This is used to reserve the appropriate internal memory, but
    /// is no strict requirement for the number of nodes and edges to be
    /// added to the network.
    pub fn with_capacities(nnodes: usize, nedges: usize) -> Self {
        NetworkBuilder {
            keys: Vec::with_capacity(nnodes),
            ids: HashMap::with_capacity(nnodes),
            nodes: Vec::with_capacity(nnodes),
            edges: Vec::with_capacity(nedges),
        }
    }

    /// Reserve memory for a certain number of nodes and edges.
    pub fn reserve(&mut self, nnodes: usize, nedges: usize) {
        self.keys.reserve(nnodes);
        self.ids.reserve(nnodes);
        self.nodes.reserve(nnodes);
        self.edges.reserve(nedges);
    }

    /// Return the current number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the current number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the node of an already registered vertex key.
    pub fn node(&self, key: &V) -> Option<Node> {
        self.ids.get(key).map(|&id| Node(id))
    }

    /// Register a vertex.
    ///
    /// Adding the same key twice is a no-op, the existing node is returned.
    pub fn add_vertex(&mut self, key: V) -> Node {
        if let Some(&id) = self.ids.get(&key) {
            return Node(id);
        }
        let id = self.nodes.len();
        self.keys.push(key.clone());
        self.ids.insert(key, id);
        self.nodes.push([vec![], vec![]]);
        Node(id)
    }

    /// Add a new edge from `u` to `v` with the given capacity.
    ///
    /// Vertices that have not been registered before are added
    /// automatically. Parallel edges are never merged, each call creates a
    /// new edge. Fails with [`Error::InvalidCapacity`] if `capacity` is
    /// negative, in which case the builder is left unchanged.
    pub fn add_edge(&mut self, u: V, v: V, capacity: F) -> Result<Edge> {
        if capacity < F::zero() {
            return Err(Error::invalid_capacity(&u, &v, capacity));
        }
        trace!("add edge {:?} -> {:?} with capacity {:?}", u, v, capacity);

        let u = self.add_vertex(u);
        let v = self.add_vertex(v);
        let eid = self.edges.len();
        self.edges.push(EdgeData {
            nodes: [u.0, v.0],
            upper: capacity,
        });
        self.nodes[u.0][0].push(eid);
        self.nodes[v.0][1].push(eid);
        Ok(Edge(eid))
    }

    /// Turn the builder into a network.
    pub fn into_network(self) -> FlowNetwork<V, F> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut adj = Vec::with_capacity(self.edges.len() * 2);

        for [outs, ins] in self.nodes.into_iter() {
            nodes.push(NodeData {
                firstout: adj.len(),
                firstin: adj.len() + outs.len(),
            });
            adj.extend(outs);
            adj.extend(ins);
        }

        FlowNetwork::from_parts(self.keys, self.ids, nodes, self.edges, adj)
    }
}
