//! Route-network graph layer.
//!
//! # Overview
//!
//! This module builds a petgraph-based directed graph from a parsed manifest
//! and computes the topological order the assignment sweep depends on.
//!
//! ## Pipeline
//!
//! ```text
//! Manifest (counts + edge list)
//!        ↓  build::RouteNetwork::from_manifest()
//! RouteNetwork (DiGraph, parallel edges kept, 1-based node ids)
//!        ↓  topo::TopoOrder::compute()
//! TopoOrder — or TopoError::Cyclic, which halts the whole pipeline
//! ```
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "a truck can drive a leg from A to B". Routes are
//! walks along edge direction; a route from `s` to `d` exists iff `d` is
//! reachable from `s`.

pub mod build;
pub mod topo;

// Re-export primary types at module level for convenience.
pub use build::{NodeId, RouteNetwork};
pub use topo::{TopoError, TopoOrder};
