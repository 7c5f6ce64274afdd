//! Topological ordering and cycle detection (Kahn's algorithm).
//!
//! # Why Kahn and not `petgraph::algo::toposort`
//!
//! The output contract fixes the tie-breaking among simultaneously free
//! nodes: the initial zero-indegree scan runs in ascending node-id order and
//! the working queue is FIFO, so ties among initially free nodes resolve by
//! ascending id. `petgraph`'s `toposort` makes no such guarantee, so we run
//! Kahn's algorithm ourselves on top of [`RouteNetwork::indegrees`].
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue with every zero-indegree node, ascending by id.
//! 2. Repeatedly dequeue a node, append it to the order, and decrement each
//!    successor's indegree (once per edge, so parallel edges decrement
//!    twice); enqueue successors that reach zero.
//! 3. If the order covers fewer than N nodes, the graph has a cycle.
//!
//! A cyclic graph is the single fatal condition of the whole pipeline:
//! without a topological order the path-count sweep has no correct
//! processing order.

use std::collections::VecDeque;

use tracing::{debug, instrument};

use super::build::{NodeId, RouteNetwork};

/// Errors from topological ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopoError {
    /// The network contains a directed cycle; no topological order exists.
    #[error("route network contains a cycle; no topological order exists")]
    Cyclic,
}

/// A topological order of a [`RouteNetwork`].
///
/// Contains every node exactly once; for every edge `u → v`, `u` appears
/// before `v`. This is what makes the single-pass path-count sweep correct:
/// by the time a node propagates its counts, every contribution into it has
/// already been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder(Vec<NodeId>);

impl TopoOrder {
    /// Compute a topological order of `net`.
    ///
    /// # Errors
    ///
    /// Returns [`TopoError::Cyclic`] when the network is not a DAG.
    #[instrument(skip(net), fields(nodes = net.node_count()))]
    pub fn compute(net: &RouteNetwork) -> Result<Self, TopoError> {
        let n = net.node_count();
        let mut indeg = net.indegrees();

        // Ascending-id seeding fixes the tie-break among initially free nodes.
        let mut queue: VecDeque<NodeId> =
            (1..=n).filter(|&id| indeg[id as usize] == 0).collect();

        let mut order: Vec<NodeId> = Vec::with_capacity(n as usize);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in net.successors(u) {
                indeg[v as usize] -= 1;
                if indeg[v as usize] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() < n as usize {
            debug!(
                ordered = order.len(),
                nodes = n,
                "cycle detected: topological order is incomplete"
            );
            return Err(TopoError::Cyclic);
        }

        Ok(Self(order))
    }

    /// The order as a slice of node ids.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of ordered nodes (equals the network's node count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the network had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
