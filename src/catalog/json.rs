//! JSON file-backed catalog.
//!
//! Loads a catalog from a human-editable JSON file once at startup and serves
//! it read-only from memory afterwards. There is no write path: the catalog
//! is static for the process lifetime, so the file is never touched again
//! after the initial parse.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "categories": ["Fabric", "Accessories"],
//!   "items": [
//!     {
//!       "id": 1,
//!       "name": "Premium African Wax Print",
//!       "category": "Fabric",
//!       "price": 4500,
//!       "rating": 4.8,
//!       "vendor": "FabricsNG",
//!       "verified": true,
//!       "image": "https://...",
//!       "description": "High-quality wax print fabric."
//!     }
//!   ],
//!   "stats": { "vendors": 128, "products": 5237, "users": 15892, "satisfaction": 98 },
//!   "testimonials": []
//! }
//! ```
//!
//! `stats` and `testimonials` are optional; a catalog file that only lists
//! products still drives the browse page.

use crate::catalog::source::MarketSource;
use crate::domain::error::{MarketError, Result};
use crate::domain::{ItemRecord, MarketStats, Testimonial};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk catalog container format.
///
/// Wraps the item list together with the category enumeration and optional
/// landing content in a single versioned object.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    /// Version of the catalog format for future migrations.
    version: u32,

    /// The category enumeration offered to the filter chips.
    #[serde(default)]
    categories: Vec<String>,

    /// All catalog items in insertion order.
    #[serde(default)]
    items: Vec<ItemRecord>,

    /// Landing-page counters; zeroed when absent.
    #[serde(default)]
    stats: MarketStats,

    /// Landing-page testimonials; empty when absent.
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

/// Read-only catalog backend loaded from a JSON file.
///
/// The entire dataset is parsed into memory on [`open`](Self::open) and reads
/// serve clones, exactly like the in-memory catalog.
#[derive(Debug)]
pub struct JsonCatalog {
    /// Path the catalog was loaded from, kept for log context.
    file_path: PathBuf,

    /// Parsed data, immutable after load.
    data: CatalogData,
}

impl JsonCatalog {
    /// Opens and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (missing, permission denied)
    /// - The contents are not valid JSON for the catalog format
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dripcity::catalog::JsonCatalog;
    ///
    /// let catalog = JsonCatalog::open("catalog.json")?;
    /// # Ok::<(), dripcity::domain::MarketError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        tracing::debug!(path = ?file_path, "loading JSON catalog");

        let contents = std::fs::read_to_string(&file_path)?;
        let data: CatalogData = serde_json::from_str(&contents)
            .map_err(|e| MarketError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            item_count = data.items.len(),
            category_count = data.categories.len(),
            "catalog loaded"
        );

        Ok(Self { file_path, data })
    }

    /// Returns the path the catalog was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl MarketSource for JsonCatalog {
    fn list_categories(&self) -> Result<Vec<String>> {
        Ok(self.data.categories.clone())
    }

    fn all_items(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.data.items.clone())
    }

    fn stats(&self) -> Result<MarketStats> {
        Ok(self.data.stats)
    }

    fn testimonials(&self) -> Result<Vec<Testimonial>> {
        Ok(self.data.testimonials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_CATALOG: &str = r#"{
        "version": 1,
        "categories": ["Fabric"],
        "items": [{
            "id": 1,
            "name": "Suede Fabric Roll",
            "category": "Fabric",
            "price": 6500,
            "rating": 4.6,
            "vendor": "LuxuryFabrics",
            "verified": true,
            "image": "",
            "description": "Premium suede fabric."
        }]
    }"#;

    #[test]
    fn opens_minimal_catalog_and_defaults_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_CATALOG.as_bytes()).unwrap();

        let catalog = JsonCatalog::open(file.path()).unwrap();
        assert_eq!(catalog.list_categories().unwrap(), vec!["Fabric"]);
        assert_eq!(catalog.all_items().unwrap().len(), 1);
        assert_eq!(catalog.stats().unwrap(), MarketStats::default());
        assert!(catalog.testimonials().unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        match JsonCatalog::open(file.path()) {
            Err(MarketError::Catalog(msg)) => assert!(msg.contains("parse")),
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            JsonCatalog::open(&missing),
            Err(MarketError::Io(_))
        ));
    }
}
