//! Typed error handling for order processing
//!
//! Every failure of the order pipeline ends up as an [`OrderError`], which
//! knows its HTTP status and how to render itself as a response body.
//!
//! # Error Categories
//!
//! - [`ValidationErrors`]: the request body does not match the order schema (400)
//! - [`OrderError::CardNotFound`]: no account matches the submitted card (404)
//! - [`StoreError`]: the account store failed (500, detail surfaced as-is)
//! - [`ConfigError`]: bootstrap and configuration failures
//!
//! # Example
//!
//! ```rust,ignore
//! match processor.process(&order).await {
//!     Ok(outcome) => println!("{}", outcome.message()),
//!     Err(OrderError::CardNotFound) => println!("unknown card"),
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// Message returned when no stored account matches the submitted card
pub const CARD_NOT_FOUND_MESSAGE: &str = "No matching card";

/// The main error type of the order pipeline
#[derive(Debug)]
pub enum OrderError {
    /// The payload failed schema validation
    Validation(ValidationErrors),

    /// No account matches the card of the order
    CardNotFound,

    /// The account store failed during lookup or debit
    Store(StoreError),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Validation(e) => write!(f, "{}", e),
            OrderError::CardNotFound => write!(f, "{}", CARD_NOT_FOUND_MESSAGE),
            OrderError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderError::Validation(e) => Some(e),
            OrderError::CardNotFound => None,
            OrderError::Store(e) => Some(e),
        }
    }
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::CardNotFound => StatusCode::NOT_FOUND,
            OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::CardNotFound => "CARD_NOT_FOUND",
            OrderError::Store(_) => "STORE_ERROR",
        }
    }
}

/// Validation failures render as a JSON array of messages, the other
/// errors as their plain message.
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            OrderError::Validation(errors) => (status, Json(errors.into_messages())).into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

impl From<ValidationErrors> for OrderError {
    fn from(err: ValidationErrors) -> Self {
        OrderError::Validation(err)
    }
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        OrderError::Store(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Ordered list of schema violations, one message per violated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation errors: {}", self.messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by account store backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver or connectivity failure, carrying the backend's own message
    #[error("{0}")]
    Backend(String),

    /// A lock guarding the in-memory store was poisoned
    #[error("Failed to acquire {0} lock on the account store")]
    Poisoned(&'static str),

    /// A stored account could not be interpreted
    #[error("Invalid account document: {0}")]
    InvalidDocument(String),

    /// The accounts seed file could not be loaded
    #[error("Failed to load seed file '{path}': {message}")]
    Seed { path: String, message: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to configuration loading and server assembly
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An environment override holds an unusable value
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    /// A component required to build the server was not provided
    #[error("{0} is required")]
    MissingComponent(&'static str),
}

/// A specialized Result type for order processing
pub type OrderResult<T> = Result<T, OrderError>;
