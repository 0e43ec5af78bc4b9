//! Tracing-based observability.
//!
//! The crate is instrumented with `tracing` spans and events throughout the
//! query, fetch, and reducer layers. This module wires those to a subscriber:
//! an `EnvFilter` plus an fmt layer on stderr, so structured logs coexist
//! with the stdout page renderer.
//!
//! Trace level is controlled via `RUST_LOG` (highest priority), the
//! `trace_level` config option, or the `"info"` default.

mod init;

pub use init::init_tracing;
