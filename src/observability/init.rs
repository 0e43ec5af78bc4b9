//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber pipeline: an `EnvFilter` for level
//! control and a compact fmt layer writing to stderr, keeping stdout free for
//! the ANSI page renderer.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber; later calls (tests,
/// repeated initialization) are silently ignored.
///
/// # Example
///
/// ```
/// use dripcity::{observability, Config};
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// observability::init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
