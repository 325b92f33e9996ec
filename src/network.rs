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

//! The capacitated flow network.
//!
//! A [`FlowNetwork`] is a directed multigraph whose vertices are identified
//! by arbitrary caller supplied keys and whose edges carry a non-negative
//! capacity. Internally each key is mapped to a dense node index at
//! insertion time, so the algorithms never hash while traversing.
//!
//! Networks are built with a [`NetworkBuilder`] and are immutable
//! afterwards, hence a network can be shared by several independent flow
//! computations.
//!
//! # Example
//!
//! ```
//! use rs_flownet::FlowNetwork;
//!
//! let net = FlowNetwork::new_with(|b| {
//!     b.add_edge("s", "a", 3)?;
//!     b.add_edge("a", "t", 2)?;
//!     b.add_edge("a", "t", 4)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(net.num_nodes(), 3);
//! assert_eq!(net.num_edges(), 3);
//!
//! // parallel edges are kept apart
//! let a = net.node(&"a").unwrap();
//! let caps: Vec<_> = net.outedges(a).map(|(e, _)| net.upper(e)).collect();
//! assert_eq!(caps, vec![2, 4]);
//! ```

use crate::builder::NetworkBuilder;
use crate::error::{Error, Result};
use crate::traits::{Capacity, Indexable};

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Node of a flow network.
///
/// This is basically a newtype of the node index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Node(pub(crate) usize);

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Indexable for Node {
    fn index(&self) -> usize {
        self.0
    }
}

/// Edge of a flow network.
///
/// Edges are numbered consecutively in insertion order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge(pub(crate) usize);

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Indexable for Edge {
    fn index(&self) -> usize {
        self.0
    }
}

/// Data for a node in a flow network.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) firstout: usize,
    pub(crate) firstin: usize,
}

/// Data for an edge in a flow network.
#[derive(Clone, Debug)]
pub(crate) struct EdgeData<F> {
    pub(crate) nodes: [usize; 2],
    pub(crate) upper: F,
}

/// A capacitated directed multigraph.
#[derive(Clone, Debug)]
pub struct FlowNetwork<V, F> {
    keys: Vec<V>,
    ids: HashMap<V, usize>,
    nodes: Vec<NodeData>,
    edges: Vec<EdgeData<F>>,
    // The list of adjacencies. This list contains the edge numbers in
    // a specific order, so that for each node the outgoing and incoming
    // edges are in successive positions, each group in insertion order.
    adj: Vec<usize>,
}

impl<V, F> FlowNetwork<V, F>
where
    V: Eq + Hash + Clone + fmt::Debug,
    F: Capacity,
{
    /// Create a new builder for a flow network.
    pub fn builder() -> NetworkBuilder<V, F> {
        NetworkBuilder::new()
    }

    /// Create a new network by passing the builder to the callback `f`.
    ///
    /// The first error returned by the callback is passed through.
    pub fn new_with<B>(f: B) -> Result<Self>
    where
        B: FnOnce(&mut NetworkBuilder<V, F>) -> Result<()>,
    {
        let mut b = NetworkBuilder::new();
        f(&mut b)?;
        Ok(b.into_network())
    }

    /// Create a network from a list of edges `(u, v, capacity)`.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, F)>,
    {
        FlowNetwork::new_with(|b| {
            for (u, v, c) in edges {
                b.add_edge(u, v, c)?;
            }
            Ok(())
        })
    }

    pub(crate) fn from_parts(
        keys: Vec<V>,
        ids: HashMap<V, usize>,
        nodes: Vec<NodeData>,
        edges: Vec<EdgeData<F>>,
        adj: Vec<usize>,
    ) -> Self {
        FlowNetwork {
            keys,
            ids,
            nodes,
            edges,
            adj,
        }
    }

    /// Return the number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.nodes.len()).map(Node)
    }

    /// Return an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.edges.len()).map(Edge)
    }

    /// Return the node associated with a vertex key.
    pub fn node(&self, key: &V) -> Option<Node> {
        self.ids.get(key).map(|&id| Node(id))
    }

    /// Return the node associated with a vertex key or fail with
    /// [`Error::UnknownVertex`].
    pub fn try_node(&self, key: &V) -> Result<Node> {
        self.node(key).ok_or_else(|| Error::unknown_vertex(key))
    }

    /// Return `true` if the vertex key has been registered.
    pub fn contains(&self, key: &V) -> bool {
        self.ids.contains_key(key)
    }

    /// Return the vertex key of a node.
    pub fn key(&self, u: Node) -> &V {
        &self.keys[u.0]
    }

    /// Return the vertex keys in insertion order.
    pub fn keys(&self) -> &[V] {
        &self.keys
    }

    /// Return the source node of an edge.
    pub fn src(&self, e: Edge) -> Node {
        Node(self.edges[e.0].nodes[0])
    }

    /// Return the sink node of an edge.
    pub fn snk(&self, e: Edge) -> Node {
        Node(self.edges[e.0].nodes[1])
    }

    /// Return the end nodes of an edge.
    pub fn enodes(&self, e: Edge) -> (Node, Node) {
        (self.src(e), self.snk(e))
    }

    /// Return the vertex keys of the end nodes of an edge.
    pub fn endpoints(&self, e: Edge) -> (&V, &V) {
        let [u, v] = self.edges[e.0].nodes;
        (&self.keys[u], &self.keys[v])
    }

    /// Return the capacity of an edge.
    pub fn upper(&self, e: Edge) -> F {
        self.edges[e.0].upper
    }

    /// Return `true` if the edge is a loop.
    pub fn is_loop(&self, e: Edge) -> bool {
        let [u, v] = self.edges[e.0].nodes;
        u == v
    }

    /// Return the outgoing edges of `u` together with their sink nodes.
    ///
    /// The edges are returned in insertion order.
    pub fn outedges(&self, u: Node) -> impl Iterator<Item = (Edge, Node)> + '_ {
        let beg = self.nodes[u.0].firstout;
        let end = self.nodes[u.0].firstin;
        self.adj[beg..end]
            .iter()
            .map(move |&eid| (Edge(eid), Node(self.edges[eid].nodes[1])))
    }

    /// Return the incoming edges of `u` together with their source nodes.
    ///
    /// The edges are returned in insertion order.
    pub fn inedges(&self, u: Node) -> impl Iterator<Item = (Edge, Node)> + '_ {
        let beg = self.nodes[u.0].firstin;
        let end = self
            .nodes
            .get(u.0 + 1)
            .map(|n| n.firstout)
            .unwrap_or_else(|| self.adj.len());
        self.adj[beg..end]
            .iter()
            .map(move |&eid| (Edge(eid), Node(self.edges[eid].nodes[0])))
    }

    /// Return the outgoing edges of the vertex with key `u`.
    ///
    /// Fails with [`Error::UnknownVertex`] if `u` is not in the network.
    pub fn neighbors(&self, u: &V) -> Result<Vec<Edge>> {
        let u = self.try_node(u)?;
        Ok(self.outedges(u).map(|(e, _)| e).collect())
    }

    /// Return the total capacity of the edges leaving `u` (loops excluded).
    pub fn out_capacity(&self, u: Node) -> F {
        self.outedges(u)
            .filter(|&(_, v)| v != u)
            .fold(F::zero(), |acc, (e, _)| acc + self.upper(e))
    }

    /// Return the total capacity of the edges entering `u` (loops excluded).
    pub fn in_capacity(&self, u: Node) -> F {
        self.inedges(u)
            .filter(|&(_, v)| v != u)
            .fold(F::zero(), |acc, (e, _)| acc + self.upper(e))
    }
}
