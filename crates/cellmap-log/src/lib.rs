//! Structured logging for cellmap.
//!
//! Installs a `tracing` subscriber that writes human-readable events to
//! stderr, keeping stdout free for the rendered map. The level comes from
//! `RUST_LOG` when set, otherwise from the configured log level.

use cellmap_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor a config level is available.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Examples
///
/// ```no_run
/// use cellmap_config::Config;
/// use cellmap_log::init_logging;
///
/// init_logging(Some(&Config::default()));
/// ```
pub fn init_logging(config: Option<&Config>) {
    let env_filter = EnvFilter::new(filter_directive(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        config,
    ));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Pick the filter directive string.
///
/// A non-empty `RUST_LOG` value wins, then a non-empty configured log level,
/// then [`DEFAULT_FILTER`].
pub fn filter_directive<'a>(rust_log: Option<&'a str>, config: Option<&'a Config>) -> &'a str {
    if let Some(env) = rust_log.filter(|s| !s.trim().is_empty()) {
        return env;
    }
    match config {
        Some(config) if !config.debug.log_level.is_empty() => &config.debug.log_level,
        _ => DEFAULT_FILTER,
    }
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
