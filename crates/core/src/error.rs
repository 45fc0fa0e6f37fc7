#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Booking denied ({code}): {message}")]
    PolicyDenied { code: &'static str, message: String },
}
