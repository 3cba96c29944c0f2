//! Error types for ledger operations.
//!
//! Every failure the record repository can produce is expressed as a
//! [`LedgerError`]. None of them are fatal: callers turn them into a toast or
//! a message popup and keep the previous state on screen.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors produced while talking to the remote ledger service.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("Service returned HTTP {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The (possibly truncated) response body.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid configuration or user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    ///
    /// Bodies longer than 120 characters are cut so popups stay readable.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        let body: String = body.into();
        let body = if body.chars().count() > 120 {
            let mut cut: String = body.chars().take(120).collect();
            cut.push_str("...");
            cut
        } else {
            body
        };
        Self::Http { status, body }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
