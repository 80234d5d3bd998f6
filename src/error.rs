//! Error types for Playpen.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Playpen operations.
#[derive(Error, Debug)]
pub enum PlaypenError {
    /// Malformed input (empty title, wrong value type, etc.)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced playground does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The safety gate denied the statement before execution.
    #[error("Query rejected: {0}")]
    RejectedQuery(String),

    /// The store failed to execute a permitted statement
    /// (syntax error, constraint violation, type mismatch, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Schema or connection-level storage failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlaypenError {
    /// Creates a validation error with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a not-found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Creates a rejected-query error with the given message.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::RejectedQuery(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a storage error with the given message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Validation Error",
            Self::NotFound(_) => "Not Found",
            Self::RejectedQuery(_) => "Rejected Query",
            Self::Query(_) => "Query Error",
            Self::Storage(_) => "Storage Error",
        }
    }
}

/// Result type alias using PlaypenError.
pub type Result<T> = std::result::Result<T, PlaypenError>;
