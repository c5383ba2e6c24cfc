pub mod client;
pub mod prompt;
pub mod schema;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub use client::{GeminiBackend, GenerationBackend, Humanizer, MockBackend};
pub use prompt::build_prompt;

/// Convenient alias for results returned by the generation client.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Broad cause of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Blank input text; no request was sent.
    InvalidInput,
    /// No API credential in the environment.
    MissingCredential,
    /// Network failure or unreadable body.
    Transport,
    /// Non-2xx status from the API.
    Status,
    /// Body did not match the expected schema.
    MalformedResponse,
}

/// Single failure signal surfaced by the generation client.
#[derive(Debug, Clone)]
pub struct GenerationError {
    kind: ErrorKind,
    message: Arc<str>,
}

impl GenerationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Arc::from(message.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Status, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for GenerationError {}
