//! # Depsort
//!
//! Dependency ordering as a web service: clients submit a list of directed
//! "from must precede to" pairs and receive either a total order consistent
//! with every constraint, or, when the pairs contain a cycle, a diagnostic
//! naming plausible cycle-breaking candidates.
//!
//! ## Architecture
//!
//! Each request runs a short synchronous pipeline on its handler task:
//!
//! 1. [`graph::DependencyGraph::from_pairs`] turns the pair list into an
//!    adjacency table plus an in-degree table (both insertion-ordered).
//! 2. [`graph::resolve_order`] runs Kahn's algorithm over the graph.
//! 3. On cycle detection, [`graph::CycleDiagnostics::analyze`] scans the
//!    untouched original graph for the highest-out-degree and
//!    lowest-in-degree nodes.
//!
//! All state is request-scoped; the process holds nothing between requests
//! beyond its immutable configuration.
//!
//! ## Module Organization
//!
//! - [`graph`] - Graph construction, ordering, and cycle diagnostics
//! - [`web`] - Axum routes, handlers, and middleware
//! - [`validation`] - Request body validation limits and checks
//! - [`config`] - Service configuration
//! - [`logging`] - Structured logging initialization

pub mod config;
pub mod graph;
pub mod logging;
pub mod validation;
pub mod web;

pub use config::ServiceConfig;
pub use graph::{CycleDetected, CycleDiagnostics, DependencyGraph, PrecedencePair};
