//! Asynchronous fetch layer simulating a remote marketplace API.
//!
//! Page controllers never touch the catalog directly; everything goes through
//! the [`FetchCoordinator`], which models the request/response boundary a real
//! HTTP client would sit behind: calls are async, take simulated round-trip
//! time, and can fail without taking the page down.
//!
//! # Modules
//!
//! - [`coordinator`]: the [`FetchCoordinator`] endpoints
//! - [`latency`]: per-endpoint [`Latency`] configuration

pub mod coordinator;
pub mod latency;

pub use coordinator::FetchCoordinator;
pub use latency::Latency;

/// Monotonically increasing tag for in-flight product fetches.
///
/// The browse controller issues one per fetch and discards any completion
/// whose tag is no longer the latest, which is what keeps a slow, superseded
/// request from overwriting newer results.
pub type RequestSeq = u64;
