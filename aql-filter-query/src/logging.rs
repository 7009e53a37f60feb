//! Logging bootstrap, controlled by environment variables.
//!
//! # Environment Variables
//!
//! - `AQLF_DEBUG=true|1|yes` - Enable debug logging
//! - `AQLF_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `AQLF_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! Nothing is installed unless one of the first two is set. The subscriber
//! itself needs the `tracing-subscriber` feature; without it, events go to
//! whatever subscriber the application installs.
//!
//! ```rust,no_run
//! use aql_filter_query::logging;
//!
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `AQLF_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("AQLF_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `AQLF_LOG_LEVEL`.
///
/// Defaults to "debug" if `AQLF_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };

    match env::var("AQLF_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback,
        },
        Err(_) => fallback,
    }
}

/// Get the configured log format from `AQLF_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("AQLF_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Install the global subscriber. Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("AQLF_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "aql_filter={},aql_filter_query={},aql_filter_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            // Logs go to stderr so stdout stays clean for fragments.
            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json().with_writer(std::io::stderr))
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact().with_writer(std::io::stderr))
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty().with_writer(std::io::stderr))
                        .init();
                }
            }

            tracing::info!(
                level = level,
                format = get_log_format(),
                "aqlf logging initialized"
            );
        }
    });
}

/// Initialize logging with a specific level.
///
/// # Safety
///
/// This function modifies environment variables, which is unsafe in
/// multi-threaded programs. Call it before spawning threads.
pub fn init_with_level(level: &str) {
    // SAFETY: only called at program startup before threads are spawned.
    unsafe {
        env::set_var("AQLF_LOG_LEVEL", level);
    }
    init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_disabled_by_default() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::remove_var("AQLF_DEBUG");
        }
        assert!(!is_debug_enabled());
    }

    #[test]
    fn test_log_level_default() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::remove_var("AQLF_DEBUG");
            env::remove_var("AQLF_LOG_LEVEL");
        }
        assert_eq!(get_log_level(), "warn");
    }

    #[test]
    fn test_log_format_default() {
        // SAFETY: Test runs in isolation
        unsafe {
            env::remove_var("AQLF_LOG_FORMAT");
        }
        assert_eq!(get_log_format(), "json");
    }
}
