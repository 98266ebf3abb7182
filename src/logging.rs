//! Tracing subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `ConverterSettings::log_level`, then
//! `info`. JSON lines are enabled by `log_json` in settings or by
//! `MEASUREMENT_CONVERTER_LOG_JSON=1`.

use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::shared::settings::ConverterSettings;

pub const LOG_JSON_ENV: &str = "MEASUREMENT_CONVERTER_LOG_JSON";

const FALLBACK_LEVEL: &str = "info";

/// Resolve the log filter for `settings_level`
pub fn build_filter(settings_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

fn json_requested(settings: &ConverterSettings) -> bool {
    settings.log_json
        || std::env::var(LOG_JSON_ENV)
            .map(|value| value == "1")
            .unwrap_or(false)
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing
/// one is left alone.
pub fn init_logging(settings: &ConverterSettings) -> bool {
    let env_filter = build_filter(&settings.log_level);
    let json = json_requested(settings);

    let result = if json {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    match result {
        Ok(()) => {
            debug!(level = %settings.log_level, json, "logging initialised");
            true
        }
        Err(e) => {
            warn!("logging already initialised: {}", e);
            false
        }
    }
}
