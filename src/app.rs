//! Application startup

use tracing::warn;

use crate::api::commands::converter::ConverterState;
use crate::logging;
use crate::shared::settings::ConverterSettings;

/// Load settings, install logging and open a converter session.
///
/// Unreadable settings fall back to defaults; the error is logged once the
/// subscriber is up.
pub fn start() -> ConverterState {
    match ConverterSettings::load() {
        Ok(settings) => start_with(&settings),
        Err(e) => {
            let state = start_with(&ConverterSettings::default());
            warn!("Failed to load settings, using defaults: {}", e);
            state
        }
    }
}

/// Install logging from `settings` and open a session in its default category
pub fn start_with(settings: &ConverterSettings) -> ConverterState {
    logging::init_logging(settings);
    ConverterState::from_settings(settings)
}
