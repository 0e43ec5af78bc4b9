//! Catalog filtering: the filter specification and the query engine.
//!
//! This layer is pure: no I/O, no latency, no state. The async fetch
//! coordinator reruns [`query`] over the full catalog on every request, and
//! the browse controller owns the [`FilterSpec`] the shopper is editing.
//!
//! # Modules
//!
//! - [`filter`]: the [`FilterSpec`] constraint set
//! - [`engine`]: the [`query`] function applying a spec to an item sequence

pub mod engine;
pub mod filter;

pub use engine::query;
pub use filter::FilterSpec;
