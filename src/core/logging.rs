//! Logging initialization and utilities

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
/// Calls after the first one are ignored.
///
/// # Example
/// ```
/// labelbrush::core::logging::init();
/// log::info!("Brush engine ready");
/// ```
pub fn init() {
    INIT.call_once(|| {
        // try_init: a host application may already own the global logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info")
        ).try_init();
    });
}

/// Initialize logging with an explicit filter (env_logger syntax, e.g.
/// `"labelbrush=debug"`), ignoring RUST_LOG.
pub fn init_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .parse_filters(filter)
            .try_init();
        log::debug!("logging initialized with filter {filter}");
    });
}
