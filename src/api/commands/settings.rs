//! Settings command module
//!
//! Handles converter settings persistence.

use crate::api::error::CommandResult;
use crate::shared::settings::ConverterSettings;

/// Get current converter settings
pub fn get_settings() -> CommandResult<ConverterSettings> {
    ConverterSettings::load()
}

/// Save converter settings
pub fn save_settings(settings: ConverterSettings) -> CommandResult<()> {
    settings.save()
}
