//! Tracing subscriber setup

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use userdir_core::config::LoggingConfig;

/// Default filter when neither settings nor flags give one
const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber; events always go to stderr so stdout
/// stays clean for reports and JSON
pub fn init_tracing(config: &LoggingConfig) {
    let level = config.level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    match config.format.as_deref().unwrap_or("pretty") {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}
