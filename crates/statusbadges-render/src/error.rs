//! Errors raised while post-processing rendered badges.

use statusbadges_core::error::AppError;
use thiserror::Error;

/// The rendered markup lacked a structure the logo injector depends on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    /// No `<text` element to insert the logo before.
    #[error("rendered badge has no <text> element")]
    MissingTextElement,

    /// No `width="N"` attribute to take the total width from.
    #[error("rendered badge has no width attribute")]
    MissingWidth,

    /// Neither label-rectangle pattern matched.
    #[error("rendered badge has no label background rectangle")]
    MissingLabelRect,
}

impl From<InjectError> for AppError {
    fn from(err: InjectError) -> Self {
        AppError::render(err.to_string())
    }
}
