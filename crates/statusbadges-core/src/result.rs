//! Convenience result type alias for StatusBadges.

use crate::error::AppError;

/// A specialized `Result` type for StatusBadges operations.
pub type AppResult<T> = Result<T, AppError>;
