use tracing::debug;

use super::category::Category;
use super::parsing::parse_input;
use crate::shared::types::SessionSnapshot;

/// Two-way sync controller for one converter session.
///
/// Owns the selected category and both field texts. Editing one field
/// rewrites the other; switching category clears both so values are never
/// shown against the wrong units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSession {
    category: Category,
    first: String,
    second: String,
}

impl ConversionSession {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            first: String::new(),
            second: String::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn units(&self) -> (&'static str, &'static str) {
        self.category.units()
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Set the first field verbatim and recompute the second from it
    pub fn edit_first(&mut self, value: impl Into<String>) {
        let value = value.into();
        let converted = self.category.to_second(&value);
        debug!(category = %self.category, first = %value, second = %converted, "first field edited");
        self.first = value;
        self.second = converted;
    }

    /// Set the second field verbatim and recompute the first from it
    pub fn edit_second(&mut self, value: impl Into<String>) {
        let value = value.into();
        let converted = self.category.to_first(&value);
        debug!(category = %self.category, first = %converted, second = %value, "second field edited");
        self.first = converted;
        self.second = value;
    }

    /// Switch category. Always clears both fields, even when re-selecting.
    pub fn select_category(&mut self, category: Category) {
        debug!(from = %self.category, to = %category, "category selected");
        self.category = category;
        self.clear_fields();
    }

    /// Clear both fields, keeping the category
    pub fn reset(&mut self) {
        debug!(category = %self.category, "fields reset");
        self.clear_fields();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let (first_unit, second_unit) = self.units();
        SessionSnapshot {
            category: self.category,
            first_unit: first_unit.to_string(),
            second_unit: second_unit.to_string(),
            first_value: self.first.clone(),
            second_value: self.second.clone(),
            first_valid: parse_input(&self.first).is_valid(),
            second_valid: parse_input(&self.second).is_valid(),
        }
    }

    fn clear_fields(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}
