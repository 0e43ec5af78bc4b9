//! Data-source abstraction.
//!
//! This module defines the [`MarketSource`] trait that abstracts over catalog
//! backends. The bundled implementations are in-memory mocks with fixed data;
//! a real HTTP/JSON client could implement the same trait and be substituted
//! without changing the query engine or either page controller.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the pages that consume it, not a generic
//! repository API. Each method maps directly to one endpoint the fetch
//! coordinator exposes.

use crate::domain::error::Result;
use crate::domain::{ItemRecord, MarketStats, Testimonial};

/// Abstraction over marketplace data backends.
///
/// Implementations must be shareable across concurrently in-flight fetches
/// (`Send + Sync`); all methods are reads and the backing data is static for
/// the process lifetime.
///
/// # Implementations
///
/// - [`InMemoryCatalog`](crate::catalog::InMemoryCatalog): compiled-in seed data (default)
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): read-only catalog loaded from a JSON file
///
/// # Examples
///
/// ```
/// use dripcity::catalog::{InMemoryCatalog, MarketSource};
///
/// let source = InMemoryCatalog::seeded();
/// let categories = source.list_categories().unwrap();
/// assert!(categories.contains(&"Fabric".to_string()));
/// ```
pub trait MarketSource: Send + Sync {
    /// Returns the category enumeration, order-preserving and duplicate-free.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails. The bundled in-memory
    /// sources always succeed.
    fn list_categories(&self) -> Result<Vec<String>>;

    /// Returns every catalog item in original insertion order.
    ///
    /// Callers apply filtering themselves via
    /// [`query`](crate::query::query); the source never pre-filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn all_items(&self) -> Result<Vec<ItemRecord>>;

    /// Returns the aggregate marketplace counters for the landing page.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn stats(&self) -> Result<MarketStats>;

    /// Returns the testimonials rotated through the landing page carousel.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn testimonials(&self) -> Result<Vec<Testimonial>>;
}
