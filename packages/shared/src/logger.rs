//! Logging setup for the Roomcast binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Logging is enabled for the Roomcast library crates and for the binary itself.
/// The filter can be overridden with the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "roomcast_server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use roomcast_shared::logger::setup_logger;
///
/// setup_logger("roomcast_server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the default `EnvFilter` directive string.
///
/// Binary names use dashes while tracing targets use underscores, so both are normalized.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut directives: Vec<String> = ["roomcast_shared", "roomcast_server", "roomcast_client"]
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect();
    if !directives
        .iter()
        .any(|d| d.starts_with(&format!("{}=", binary_target)))
    {
        directives.push(format!("{}={}", binary_target, default_log_level));
    }
    directives.push(format!("tower_http={}", default_log_level));
    directives.join(",")
}
