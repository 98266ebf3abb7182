//! Measurement converter widget
//!
//! Converts a value between the two units of a category (Temperature,
//! Length, Weight) with live updates in both directions.
//!
//! - `category`: the fixed conversion table
//! - `parsing`: field text parsing and two-decimal formatting
//! - `session`: the two-field sync controller

pub mod category;
pub mod parsing;
pub mod session;

pub use category::{Category, Direction, LinearFormula, ParseCategoryError};
pub use parsing::{format_fixed, parse_input, ParsedInput};
pub use session::ConversionSession;
