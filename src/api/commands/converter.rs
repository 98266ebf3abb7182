//! Measurement converter command module
//!
//! Wraps a [`ConversionSession`] for the presentation layer. The host keeps
//! one [`ConverterState`] per open widget and forwards field edits, category
//! buttons and the reset button here; every command answers with a fresh
//! [`SessionSnapshot`] to render.

use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::api::error::CommandResult;
use crate::core::features::measurement_converter::{parse_input, Category, ConversionSession};
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{
    CategoryDTO, ConvertValueRequest, ConvertValueResponse, EditFieldRequest,
    GetCategoriesResponse, SelectCategoryRequest, SessionSnapshot,
};

/// Shared session state handed to every session command
#[derive(Debug, Default)]
pub struct ConverterState {
    session: Mutex<ConversionSession>,
}

impl ConverterState {
    pub fn new(category: Category) -> Self {
        Self {
            session: Mutex::new(ConversionSession::new(category)),
        }
    }

    /// Start a session in the configured default category
    pub fn from_settings(settings: &ConverterSettings) -> Self {
        info!(category = %settings.default_category, "converter session started");
        Self::new(settings.default_category)
    }

    /// Run `f` with the session locked; the field pair is never seen half-updated.
    fn with_session<T>(&self, f: impl FnOnce(&mut ConversionSession) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    fn lock(&self) -> MutexGuard<'_, ConversionSession> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // Fields are only assigned after conversion, so the pair is consistent
                warn!("converter session mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

/// List the categories in selector order
pub fn get_categories() -> CommandResult<GetCategoriesResponse> {
    Ok(GetCategoriesResponse {
        categories: Category::ALL.into_iter().map(CategoryDTO::from).collect(),
    })
}

pub fn get_session(state: &ConverterState) -> CommandResult<SessionSnapshot> {
    Ok(state.with_session(|session| session.snapshot()))
}

/// First field changed: store it and recompute the second
pub fn edit_first_field(
    state: &ConverterState,
    request: EditFieldRequest,
) -> CommandResult<SessionSnapshot> {
    Ok(state.with_session(|session| {
        session.edit_first(request.value);
        session.snapshot()
    }))
}

/// Second field changed: store it and recompute the first
pub fn edit_second_field(
    state: &ConverterState,
    request: EditFieldRequest,
) -> CommandResult<SessionSnapshot> {
    Ok(state.with_session(|session| {
        session.edit_second(request.value);
        session.snapshot()
    }))
}

/// Switch category and clear both fields
pub fn select_category(
    state: &ConverterState,
    request: SelectCategoryRequest,
) -> CommandResult<SessionSnapshot> {
    let category: Category = request.category.parse()?;
    Ok(state.with_session(|session| {
        session.select_category(category);
        session.snapshot()
    }))
}

/// Clear both fields, keeping the category
pub fn reset_fields(state: &ConverterState) -> CommandResult<SessionSnapshot> {
    Ok(state.with_session(|session| {
        session.reset();
        session.snapshot()
    }))
}

/// One-shot conversion that does not touch any session
pub fn convert_value(request: ConvertValueRequest) -> CommandResult<ConvertValueResponse> {
    let category: Category = request.category.parse()?;
    let result = category.convert(request.direction, &request.value);

    Ok(ConvertValueResponse {
        valid: parse_input(&request.value).is_valid(),
        unit: category.target_unit(request.direction).to_string(),
        result,
    })
}
