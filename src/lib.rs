//! Measurement Converter
//!
//! Backend of a two-field unit converter widget: pick a category
//! (Temperature, Length, Weight), type into either field and the other one
//! follows.
//!
//! - `core`: conversion table, input parsing and the session controller
//! - `api`: commands the presentation layer calls
//! - `shared`: DTOs, errors and settings
//! - `app`: startup (settings, logging, first session)
//! - `logging`: tracing subscriber setup

pub mod api;
pub mod app;
pub mod core;
pub mod logging;
pub mod shared;

pub use crate::api::commands::converter::ConverterState;
pub use crate::app::{start, start_with};
pub use crate::core::features::measurement_converter::{Category, ConversionSession, Direction};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::settings::ConverterSettings;
pub use crate::shared::types::SessionSnapshot;
