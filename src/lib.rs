//! Drip City: the browse engine behind a fashion-materials marketplace.
//!
//! This crate implements the interactive core of the Drip City marketplace
//! pages: a static in-memory product catalog, a pure filtering/search query
//! engine, an asynchronous fetch layer that simulates a remote API, and
//! reducer-style state controllers for the product-browsing page and the
//! marketing landing page. A thin terminal front (`main.rs`) drives the
//! browse controller end to end.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Front (main.rs)                           │  ← Event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/, landing/)                 │  ← Reducers
//! │  - Event handling and state transitions             │
//! │  - Request sequencing / stale-response discarding   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Fetch Layer   │
//! │ (ui/)         │   │ (query/)      │   │ (fetch/)      │
//! │ - Rendering   │   │ - FilterSpec  │   │ - Async calls │
//! │ - Theming     │   │ - query()     │   │ - Latency sim │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog & Domain Layers                            │
//! │  - MarketSource trait (catalog/)                    │
//! │  - In-memory and JSON-file backends                 │
//! │  - Item/content models, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: browse-page reducer, state, and actions
//! - [`landing`]: landing-page reducer and form state machines
//! - [`query`]: filter specification and the pure query engine
//! - [`fetch`]: async fetch coordinator with simulated latency
//! - [`catalog`]: data-source trait and the bundled backends
//! - [`domain`]: core types and the crate error
//! - [`ui`]: view models, themes, and ANSI component rendering
//! - [`infrastructure`]: path utilities
//! - [`observability`]: tracing subscriber setup
//!
//! # The ordering guarantee
//!
//! Every filter change issues a new product fetch while older ones may still
//! be in flight. Fetches are tagged with a monotonically increasing sequence
//! number owned by the browse reducer; a completion whose tag is no longer
//! the latest issued is discarded. Whatever order the futures resolve in, the
//! results on screen always belong to the last filter submitted.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use dripcity::app::{handle_event, Action, BrowseState, Event};
//! use dripcity::catalog::InMemoryCatalog;
//! use dripcity::fetch::{FetchCoordinator, Latency};
//! use dripcity::ui::Theme;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> dripcity::domain::Result<()> {
//! let api = FetchCoordinator::with_latency(
//!     Arc::new(InMemoryCatalog::seeded()),
//!     Latency::zero(),
//! );
//! let mut state = BrowseState::new(Theme::default());
//!
//! // A filter change issues a tagged fetch...
//! let (_, actions) = handle_event(&mut state, &Event::ToggleVerified)?;
//! let Action::FetchItems { seq, filter } = &actions[0] else { unreachable!() };
//!
//! // ...the runtime executes it and feeds the completion back in.
//! let result = api.fetch_items(filter).await.map_err(|e| e.to_string());
//! handle_event(&mut state, &Event::ItemsFetched { seq: *seq, result })?;
//! assert!(state.items.iter().all(|i| i.verified));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod landing;
pub mod observability;
pub mod query;
pub mod ui;

pub use app::{handle_event, Action, BrowseState, Event, InputMode, LoadPhase, SearchFocus};
pub use domain::{ItemRecord, MarketError, Result};
pub use query::FilterSpec;
pub use ui::Theme;

use crate::catalog::{InMemoryCatalog, JsonCatalog, MarketSource};
use crate::fetch::Latency;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Front-end configuration.
///
/// Values come from the process environment (see [`Config::from_env`]).
/// Missing or malformed entries fall back to defaults rather than stopping
/// the page from coming up.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional path to a JSON catalog file. When unset, the compiled-in
    /// seed catalog is used. Tilde paths are expanded.
    pub catalog_file: Option<String>,

    /// Built-in theme name: `dripcity-dark` or `dripcity-light`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`.
    /// Default: `"info"`. `RUST_LOG` overrides this.
    pub trace_level: Option<String>,

    /// Uniform simulated latency in milliseconds for every endpoint. When
    /// unset, the per-endpoint defaults apply (products 800 ms, categories
    /// 300 ms, and so on).
    pub latency_ms: Option<u64>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_file`, `theme`, `theme_file`, `trace_level`: taken verbatim
    /// - `latency_ms`: parsed as `u64`, ignored on parse error
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dripcity::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dripcity-light".to_string());
    /// map.insert("latency_ms".to_string(), "0".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dripcity-light"));
    /// assert_eq!(config.latency_ms, Some(0));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            catalog_file: map.get("catalog_file").cloned(),
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
            latency_ms: map.get("latency_ms").and_then(|s| s.parse::<u64>().ok()),
        }
    }

    /// Reads configuration from `DRIPCITY_*` environment variables.
    ///
    /// Recognized variables: `DRIPCITY_CATALOG_FILE`, `DRIPCITY_THEME`,
    /// `DRIPCITY_THEME_FILE`, `DRIPCITY_TRACE_LEVEL`, `DRIPCITY_LATENCY_MS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in std::env::vars() {
            if let Some(stripped) = key.strip_prefix("DRIPCITY_") {
                map.insert(stripped.to_lowercase(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Returns the latency table this configuration selects.
    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency_ms.map_or_else(Latency::default, Latency::uniform_ms)
    }
}

/// Builds the data source this configuration selects.
///
/// A configured catalog file is loaded eagerly so a broken file fails fast at
/// startup instead of on the first fetch; without one, the compiled-in seed
/// catalog serves.
///
/// # Errors
///
/// Returns an error if the configured catalog file cannot be read or parsed.
pub fn build_source(config: &Config) -> Result<Arc<dyn MarketSource>> {
    match &config.catalog_file {
        Some(path) => {
            let expanded = infrastructure::expand_tilde(path);
            tracing::debug!(path = %expanded, "loading catalog file");
            Ok(Arc::new(JsonCatalog::open(expanded)?))
        }
        None => Ok(Arc::new(InMemoryCatalog::seeded())),
    }
}

/// Initializes the browse-page state with the configured theme.
///
/// Theme resolution: `theme_file` first, then `theme_name`, then the default
/// gold-on-black palette. A theme that fails to load logs and falls back
/// rather than failing the page.
///
/// # Example
///
/// ```
/// use dripcity::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.items.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> BrowseState {
    tracing::debug!("initializing browse page");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    BrowseState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_ignores_malformed_latency() {
        let mut map = BTreeMap::new();
        map.insert("latency_ms".to_string(), "soon".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.latency_ms, None);
        assert_eq!(config.latency(), Latency::default());
    }

    #[test]
    fn build_source_defaults_to_seed_catalog() {
        let source = build_source(&Config::default()).unwrap();
        assert_eq!(source.all_items().unwrap().len(), 6);
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "dripcity-dark");
    }
}
