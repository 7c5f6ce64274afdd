//! Route-network construction from a parsed manifest.
//!
//! # Parallel edges
//!
//! Unlike most dependency graphs, the route network must **not** deduplicate
//! edges: two parallel legs `A → B` are two distinct one-leg routes, and
//! every route count downstream multiplies accordingly. `petgraph`'s
//! `DiGraph` keeps parallel edges by default, which is exactly what we need.
//!
//! # Node ids
//!
//! Public node ids are 1-based (`1..=N`). Nodes are inserted in ascending id
//! order, so id `i` always occupies `NodeIndex(i - 1)`; the conversion in
//! both directions is arithmetic, no lookup table required.

#![allow(clippy::cast_possible_truncation)]

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::instrument;

use crate::manifest::Manifest;

/// Public 1-based node identifier.
pub type NodeId = u32;

/// A directed route network.
///
/// Nodes are ids `1..=N`; an edge `A → B` is a drivable leg from A to B.
/// Parallel edges are preserved.
#[derive(Debug, Clone)]
pub struct RouteNetwork {
    graph: DiGraph<NodeId, ()>,
}

impl RouteNetwork {
    /// Build the network for a parsed manifest.
    #[must_use]
    #[instrument(skip(manifest), fields(nodes = manifest.nodes, edges = manifest.edges.len()))]
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::with_edges(manifest.nodes, &manifest.edges)
    }

    /// Build a network with `nodes` nodes (ids `1..=nodes`) and the given
    /// edge list, in order, duplicates kept.
    ///
    /// Endpoints must be in `1..=nodes`; the manifest parser guarantees
    /// this for parsed input.
    #[must_use]
    pub fn with_edges(nodes: NodeId, edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes as usize, edges.len());
        for id in 1..=nodes {
            graph.add_node(id);
        }
        for &(from, to) in edges {
            graph.add_edge(index_of(from), index_of(to), ());
        }
        Self { graph }
    }

    /// Number of nodes in the network.
    #[must_use]
    pub fn node_count(&self) -> NodeId {
        self.graph.node_count() as NodeId
    }

    /// Number of edges (legs), counting parallel edges individually.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Successors of `id`, one entry per outgoing edge.
    ///
    /// Parallel edges yield the same successor multiple times. Iteration
    /// order is an implementation detail of `petgraph`; nothing downstream
    /// depends on it (the final per-truck sort normalizes output order).
    pub fn successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.neighbors(index_of(id)).map(id_of)
    }

    /// Per-node incoming-edge counts, 1-indexed (slot 0 unused).
    ///
    /// Parallel edges each count once, matching the per-edge decrements of
    /// Kahn's algorithm.
    #[must_use]
    pub fn indegrees(&self) -> Vec<usize> {
        let mut indeg = vec![0usize; self.graph.node_count() + 1];
        for edge in self.graph.edge_references() {
            indeg[edge.target().index() + 1] += 1;
        }
        indeg
    }
}

fn index_of(id: NodeId) -> NodeIndex {
    NodeIndex::new(id as usize - 1)
}

fn id_of(idx: NodeIndex) -> NodeId {
    idx.index() as NodeId + 1
}
