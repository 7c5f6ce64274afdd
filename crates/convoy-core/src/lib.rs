#![forbid(unsafe_code)]
//! convoy-core: truck assignment over delivery-route DAGs.
//!
//! Given a directed acyclic route network, every ordered pair of nodes
//! `(source, destination)` with at least one route between them is assigned
//! to one of `B` trucks. The truck is chosen by the number of distinct
//! directed routes from source to destination, taken modulo `B`.
//!
//! # Pipeline
//!
//! ```text
//! token stream
//!        ↓  manifest::Manifest::parse()
//! Manifest (counts + edge list)
//!        ↓  graph::RouteNetwork::from_manifest()
//! RouteNetwork (petgraph DiGraph, parallel edges kept)
//!        ↓  graph::TopoOrder::compute()         — Err(Cyclic) halts everything
//! TopoOrder
//!        ↓  assign::TruckPlan::build()          — N per-source sweeps
//! TruckPlan (sorted pairs per truck, 1..=B)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: per-module `thiserror` enums; callers decide what is fatal.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod assign;
pub mod graph;
pub mod manifest;

pub use assign::{AssignError, SweepBuffers, TruckPlan, sweep_from};
pub use graph::{NodeId, RouteNetwork, TopoError, TopoOrder};
pub use manifest::{Manifest, ManifestError};
