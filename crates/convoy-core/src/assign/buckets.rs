//! The truck plan: every reachable pair bucketed, sorted, and queryable.
//!
//! # Invariant
//!
//! For a fixed acyclic network and truck count, the plan is a deterministic
//! total partition: every `(source, destination)` pair with
//! `source ≠ destination` and destination reachable from source appears in
//! exactly one truck's list, and each list is strictly ascending by
//! `(source, destination)`.
//!
//! # Bucket ids
//!
//! Truck ids are 1-based: `truck = 1 + count mod B`, ids `1..=B`. There is
//! no truck 0. The trailing `mod B` is a safety normalization — the modular
//! counter is already kept in `[0, B-1]` during the sweep — but it stays,
//! so the mapping is correct however the counter was maintained.

use tracing::{instrument, trace};

use super::paths::{SweepBuffers, sweep_from};
use crate::graph::{NodeId, RouteNetwork, TopoOrder};

/// Errors from plan construction and range selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// Truck count must be at least 1 for the modulo mapping to exist.
    #[error("truck count must be at least 1, got {got}")]
    InvalidTruckCount { got: i64 },

    /// Requested output range falls outside `1..=trucks` or is inverted.
    #[error("truck range {lo}..={hi} is not within 1..={trucks}")]
    InvalidRange { lo: i64, hi: i64, trucks: u64 },
}

/// An immutable assignment of node pairs to trucks.
///
/// Built once over all sources, then sorted; query with [`Self::pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruckPlan {
    trucks: u64,
    /// Indexed by truck id; slot 0 is unused.
    buckets: Vec<Vec<(NodeId, NodeId)>>,
}

impl TruckPlan {
    /// Assign every reachable `(source, destination)` pair of `net` to a
    /// truck.
    ///
    /// `order` must be a topological order of `net`. Runs N per-source
    /// sweeps, O(N·(N+E)) overall; the working buffers are allocated once
    /// and reused across sources.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::InvalidTruckCount`] when `trucks < 1`.
    #[instrument(skip(net, order), fields(nodes = net.node_count(), trucks))]
    pub fn build(
        net: &RouteNetwork,
        order: &TopoOrder,
        trucks: i64,
    ) -> Result<Self, AssignError> {
        let Ok(trucks @ 1..) = u64::try_from(trucks) else {
            return Err(AssignError::InvalidTruckCount { got: trucks });
        };

        let n = net.node_count();
        let mut buckets: Vec<Vec<(NodeId, NodeId)>> = vec![Vec::new(); trucks as usize + 1];
        let mut buf = SweepBuffers::new(n);

        for source in 1..=n {
            sweep_from(source, net, order, trucks, &mut buf);
            for dest in 1..=n {
                if dest == source || !buf.is_reachable(dest) {
                    continue;
                }
                let truck = 1 + buf.modular(dest) % trucks;
                buckets[truck as usize].push((source, dest));
            }
            trace!(source, "source swept");
        }

        // One sort per truck after the full double loop; pairs arrive
        // grouped by source already, but the contract is a strict
        // (source, destination) order regardless of sweep order.
        for bucket in &mut buckets {
            bucket.sort_unstable();
        }

        Ok(Self { trucks, buckets })
    }

    /// The truck count `B` this plan was built for.
    #[must_use]
    pub fn truck_count(&self) -> u64 {
        self.trucks
    }

    /// The sorted pairs assigned to `truck`.
    ///
    /// Ids outside `1..=B` (including 0) have no pairs and yield an empty
    /// slice.
    #[must_use]
    pub fn pairs(&self, truck: u64) -> &[(NodeId, NodeId)] {
        usize::try_from(truck)
            .ok()
            .and_then(|t| self.buckets.get(t))
            .map_or(&[], Vec::as_slice)
    }

    /// Validate a requested inclusive output range against this plan.
    ///
    /// Returns the range as unsigned bounds ready to iterate.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::InvalidRange`] unless `1 ≤ lo ≤ hi ≤ B`.
    pub fn check_range(&self, lo: i64, hi: i64) -> Result<(u64, u64), AssignError> {
        if lo >= 1 && lo <= hi {
            if let (Ok(lo), Ok(hi)) = (u64::try_from(lo), u64::try_from(hi)) {
                if hi <= self.trucks {
                    return Ok((lo, hi));
                }
            }
        }
        Err(AssignError::InvalidRange {
            lo,
            hi,
            trucks: self.trucks,
        })
    }
}
