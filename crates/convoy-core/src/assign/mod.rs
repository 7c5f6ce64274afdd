//! Truck assignment: per-source route counting and bucketing.
//!
//! For each source node, one forward sweep over the topological order
//! accumulates the number of distinct routes to every reachable node
//! ([`paths`]). Each reachable `(source, destination)` pair is then mapped
//! to truck `1 + count mod B` and collected into an immutable, per-truck
//! sorted plan ([`buckets`]).

pub mod buckets;
pub mod paths;

// Re-export primary types at module level for convenience.
pub use buckets::{AssignError, TruckPlan};
pub use paths::{SweepBuffers, sweep_from};
