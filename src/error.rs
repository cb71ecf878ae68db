//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Log file appender could not be created
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    /// Native window failed to start
    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a GUI error with message
    pub fn gui(msg: impl Into<String>) -> Self {
        Self::Gui(msg.into())
    }
}

/// A rejected form submission.
///
/// Carries the fixed title/description pair shown in the error toast.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{title}: {description}")]
pub struct ValidationError {
    pub title: &'static str,
    pub description: &'static str,
}

impl ValidationError {
    /// Required-field failure with the standard "Error" title.
    pub const fn required(description: &'static str) -> Self {
        Self {
            title: "Error",
            description,
        }
    }
}
