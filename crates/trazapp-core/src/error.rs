use thiserror::Error;

use crate::registration::Field;

/// Errors surfaced by the platform-free site logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("required field `{}` is empty", .0.id())]
    MissingField(Field),
    #[error("unknown plan `{0}`")]
    UnknownPlan(String),
    #[error("email relay is not configured (missing {0})")]
    RelayNotConfigured(&'static str),
    #[error("a submission is already in progress")]
    SubmissionInProgress,
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;
