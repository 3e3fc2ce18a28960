//! Error types for the CLI application.
//!
//! `CliError` covers everything a command handler can fail with and maps to
//! exit code `2` in [`crate::run`]. Audit-style commands that check many
//! games at once collect per-game problems as [`BatchValidationError`].

use gavel_engine::errors::GameError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine rejected an operation
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

// io_utils reports failures as plain strings
impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::InvalidInput(error)
    }
}

/// One failed item in a batch check, with the item it refers to.
///
/// # Examples
///
/// ```rust
/// use gavel_cli::BatchValidationError;
///
/// let error = BatchValidationError {
///     item_context: 3,
///     message: "prize total is 90, expected 104".to_string(),
/// };
/// assert_eq!(error.to_string(), "3: prize total is 90, expected 104");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchValidationError<T> {
    /// Identifies the item that failed validation
    pub item_context: T,
    /// Descriptive error message
    pub message: String,
}

impl<T: std::fmt::Display> std::fmt::Display for BatchValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.item_context, self.message)
    }
}
