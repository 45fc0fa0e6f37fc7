use mealbook_core::error::CoreError;
use mealbook_core::RequestKind;

/// Errors raised by the submission guard.
///
/// A policy denial surfaces as [`GuardError::Core`] wrapping
/// [`CoreError::PolicyDenied`]; every other variant means the payload or the
/// environment was unusable and no verdict was reached.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// A domain-level error from `mealbook_core`, including policy denials.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body was not valid JSON or did not match the payload shape.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Cross-field checks on the payload failed.
    #[error("Invalid payload: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A field the request kind cannot do without was absent.
    #[error("Missing field '{field}' for {kind} request")]
    MissingField {
        kind: RequestKind,
        field: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GuardError {
    /// Denial code when this error is a policy denial.
    pub fn denial_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(CoreError::PolicyDenied { code, .. }) => Some(*code),
            _ => None,
        }
    }
}

/// Convenience alias for guard return values.
pub type GuardResult<T> = Result<T, GuardError>;
