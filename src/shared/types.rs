use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::core::features::measurement_converter::{Category, Direction};

/// Read-only view of a converter session handed to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct SessionSnapshot {
    pub category: Category,
    pub first_unit: String,
    pub second_unit: String,
    pub first_value: String,
    pub second_value: String,
    pub first_valid: bool,
    pub second_valid: bool,
}

// Category entry for the selector buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct CategoryDTO {
    pub id: Category,
    pub label: String,       // Display name (e.g., "Temperature")
    pub first_unit: String,  // e.g., "Celsius"
    pub second_unit: String, // e.g., "Fahrenheit"
}

impl From<Category> for CategoryDTO {
    fn from(category: Category) -> Self {
        Self {
            id: category,
            label: category.name().to_string(),
            first_unit: category.first_unit().to_string(),
            second_unit: category.second_unit().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct GetCategoriesResponse {
    pub categories: Vec<CategoryDTO>,
}

/// Raw field input.
///
/// Accepts a JSON string or number; numbers are turned into text so the
/// session always stores exactly what a text field would hold.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct EditFieldRequest {
    #[serde(deserialize_with = "deserialize_field_text")]
    #[ts(type = "string | number")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct SelectCategoryRequest {
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct ConvertValueRequest {
    pub category: String,
    pub direction: Direction,
    #[serde(deserialize_with = "deserialize_field_text")]
    #[ts(type = "string | number")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "converter.ts")]
pub struct ConvertValueResponse {
    pub result: String,
    pub unit: String,
    pub valid: bool,
}

// ---- Serde helpers ----

fn deserialize_field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    Ok(match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => n.to_string(),
        NumOrString::Str(s) => s,
    })
}
