/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Failed to encode frame as JSON: {0}")]
    FrameEncoding(#[from] serde_json::Error),
    #[error("Failed to initialize logging: {0}")]
    LoggingInitialization(String),
}

pub type ClockResult<T> = Result<T, ClockError>;
