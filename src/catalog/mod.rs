//! Catalog layer: the data sources the fetch coordinator reads from.
//!
//! The catalog is static for the lifetime of one session; no create, update,
//! or delete operations exist anywhere in the crate. Both bundled backends
//! hold everything in memory; the trait boundary is what would let a real
//! network client take their place.
//!
//! # Modules
//!
//! - [`source`]: the [`MarketSource`] backend trait
//! - [`memory`]: compiled-in seed catalog
//! - [`json`]: read-only catalog loaded from a JSON file

pub mod json;
pub mod memory;
pub mod source;

pub use json::JsonCatalog;
pub use memory::InMemoryCatalog;
pub use source::MarketSource;
