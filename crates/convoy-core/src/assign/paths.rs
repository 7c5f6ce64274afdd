//! Per-source route counting via one forward sweep of the topological order.
//!
//! # Algorithm
//!
//! Dynamic programming over the DAG: with `count[source] = 1`, visiting
//! nodes in topological order and pushing each reachable node's count along
//! its outgoing edges yields, at every node `d`, the number of distinct
//! directed walks `source → d`. Topological order guarantees every
//! contribution into a node lands before that node propagates, so a single
//! pass suffices; parallel edges contribute once per edge and so multiply
//! counts.
//!
//! # Two counters
//!
//! The sweep maintains two counters per node:
//!
//! - `total` — a wrapping `u64`. Route counts grow exponentially with graph
//!   depth, and wrap-around is **intended** behavior: this counter is a
//!   diagnostic artifact only and nothing load-bearing reads it.
//! - `modular` — reduced modulo the truck count at every addition. This is
//!   the value truck assignment is computed from, and it is exact for any
//!   graph size.
//!
//! # Buffer reuse
//!
//! [`SweepBuffers`] is caller-owned working state, reset in place at the
//! start of every sweep so the N-source outer loop allocates once.

use fixedbitset::FixedBitSet;

use crate::graph::{NodeId, RouteNetwork, TopoOrder};

/// Reusable per-source working buffers, sized `N + 1` (slot 0 unused).
#[derive(Debug, Clone)]
pub struct SweepBuffers {
    /// Wrapping route-count accumulator. Overflow wraps silently by design.
    total: Vec<u64>,
    /// Route count reduced modulo the truck count at every addition.
    modular: Vec<u64>,
    /// Set once any route from the current source reaches the node.
    reachable: FixedBitSet,
}

impl SweepBuffers {
    /// Allocate buffers for a network of `nodes` nodes.
    #[must_use]
    pub fn new(nodes: NodeId) -> Self {
        let len = nodes as usize + 1;
        Self {
            total: vec![0; len],
            modular: vec![0; len],
            reachable: FixedBitSet::with_capacity(len),
        }
    }

    /// Zero everything, then mark `source` with count 1 in both
    /// representations and reachable from itself.
    fn reset(&mut self, source: NodeId) {
        self.total.fill(0);
        self.modular.fill(0);
        self.reachable.clear();
        self.total[source as usize] = 1;
        self.modular[source as usize] = 1;
        self.reachable.insert(source as usize);
    }

    /// Wrapping total route count from the last sweep's source to `id`.
    #[must_use]
    pub fn total(&self, id: NodeId) -> u64 {
        self.total[id as usize]
    }

    /// Route count modulo the truck count from the last sweep's source.
    #[must_use]
    pub fn modular(&self, id: NodeId) -> u64 {
        self.modular[id as usize]
    }

    /// Whether `id` is reachable from the last sweep's source.
    #[must_use]
    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.reachable.contains(id as usize)
    }
}

/// Run one source's route-count sweep.
///
/// `order` must be a topological order of `net`, and `trucks` must be at
/// least 1 (the caller validates; [`crate::assign::TruckPlan::build`] does).
/// On return, `buf` holds total / modular counts and reachability for every
/// node, relative to `source`.
pub fn sweep_from(
    source: NodeId,
    net: &RouteNetwork,
    order: &TopoOrder,
    trucks: u64,
    buf: &mut SweepBuffers,
) {
    debug_assert!(trucks >= 1, "truck count validated by the caller");
    buf.reset(source);

    for &u in order.as_slice() {
        if !buf.reachable.contains(u as usize) {
            continue;
        }
        // u's own counts are final here: any later contribution into u
        // would require a cycle back to it.
        let total_u = buf.total[u as usize];
        let modular_u = buf.modular[u as usize];
        for v in net.successors(u) {
            let vi = v as usize;
            buf.total[vi] = buf.total[vi].wrapping_add(total_u);
            buf.modular[vi] = (buf.modular[vi] + modular_u) % trucks;
            buf.reachable.insert(vi);
        }
    }
}
