//! Error handling shared by command modules

use crate::shared::error::AppError;

/// Result type alias for frontend-facing commands
pub type CommandResult<T> = Result<T, AppError>;
