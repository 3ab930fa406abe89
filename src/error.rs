//! Utilities for error handling of the smoke test harness.

use std::error::Error as StdError;
use std::fmt;

/// Error reported by a video driver operation.
///
/// Carries a human-readable message and the underlying failure, if any.
/// The message is what the subsystem records as its last error string.
///
#[derive(Debug)]
pub struct DriverError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl DriverError {
    /// Creates new driver error with specified message and source of failure.
    pub fn new<M, S>(message: M, source: S) -> Self
    where
        M: ToString,
        S: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => write!(f, "{}", self.message),
        }
    }
}

impl StdError for DriverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|source| source.as_ref() as _)
    }
}

impl From<&str> for DriverError {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

impl From<String> for DriverError {
    fn from(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }
}
