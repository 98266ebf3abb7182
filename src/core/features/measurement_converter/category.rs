//! Conversion table
//!
//! Every category pairs two units through one linear formula:
//! `second = first * numerator / denominator + offset`. Both conversion
//! directions are derived from it, so they stay inverses of each other
//! up to display rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use ts_rs::TS;

use super::parsing::{format_fixed, parse_input, ParsedInput};

/// Measurement categories offered by the converter, in display order
///
/// Deserializes through [`FromStr`], so names are matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub enum Category {
    /// Celsius / Fahrenheit
    #[default]
    Temperature,
    /// Meters / Feet
    Length,
    /// Kilograms / Pounds
    Weight,
}

/// Which field a conversion writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "converter.ts")]
pub enum Direction {
    /// Second-unit value into the first unit
    ToFirst,
    /// First-unit value into the second unit
    ToSecond,
}

/// Linear map from a category's first unit to its second unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFormula {
    pub numerator: f64,
    pub denominator: f64,
    pub offset: f64,
}

impl LinearFormula {
    pub const fn new(numerator: f64, denominator: f64, offset: f64) -> Self {
        Self { numerator, denominator, offset }
    }

    /// First unit -> second unit
    pub fn forward(&self, value: f64) -> f64 {
        value * self.numerator / self.denominator + self.offset
    }

    /// Second unit -> first unit
    pub fn inverse(&self, value: f64) -> f64 {
        (value - self.offset) * self.denominator / self.numerator
    }
}

const FEET_PER_METER: f64 = 3.28084;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 3] = [Category::Temperature, Category::Length, Category::Weight];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Weight => "Weight",
        }
    }

    /// Ordered `(first, second)` unit labels
    pub const fn units(self) -> (&'static str, &'static str) {
        match self {
            Category::Temperature => ("Celsius", "Fahrenheit"),
            Category::Length => ("Meters", "Feet"),
            Category::Weight => ("Kilograms", "Pounds"),
        }
    }

    pub const fn first_unit(self) -> &'static str {
        self.units().0
    }

    pub const fn second_unit(self) -> &'static str {
        self.units().1
    }

    pub const fn formula(self) -> LinearFormula {
        match self {
            // F = C * 9 / 5 + 32
            Category::Temperature => LinearFormula::new(9.0, 5.0, 32.0),
            Category::Length => LinearFormula::new(FEET_PER_METER, 1.0, 0.0),
            Category::Weight => LinearFormula::new(POUNDS_PER_KILOGRAM, 1.0, 0.0),
        }
    }

    /// Convert first-unit text into second-unit display text.
    ///
    /// Empty input stays empty; anything unparsable comes out as `NaN`.
    pub fn to_second(self, input: &str) -> String {
        let formula = self.formula();
        convert_text(input, |value| formula.forward(value))
    }

    /// Convert second-unit text into first-unit display text.
    pub fn to_first(self, input: &str) -> String {
        let formula = self.formula();
        convert_text(input, |value| formula.inverse(value))
    }

    pub fn convert(self, direction: Direction, input: &str) -> String {
        match direction {
            Direction::ToFirst => self.to_first(input),
            Direction::ToSecond => self.to_second(input),
        }
    }

    /// Label of the unit a conversion in `direction` produces
    pub const fn target_unit(self, direction: Direction) -> &'static str {
        match direction {
            Direction::ToFirst => self.first_unit(),
            Direction::ToSecond => self.second_unit(),
        }
    }
}

fn convert_text(input: &str, apply: impl Fn(f64) -> f64) -> String {
    match parse_input(input) {
        ParsedInput::Empty => String::new(),
        parsed => format_fixed(parsed.value().map_or(f64::NAN, apply)),
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
