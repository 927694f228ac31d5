//! Unified client error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error for all Delivery client operations.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Invalid `DeliveryOptions`. Raised at construction time, never during
    /// a request. Fatal to client creation; fix the options and reconstruct.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The Delivery API rejected the request (4xx) and returned an error
    /// payload. Caller-correctable: bad codename, malformed parameters,
    /// missing auth.
    #[error("Delivery API error {status}: {}", .error.message)]
    Api { status: u16, error: KenticoError },

    /// The Delivery API returned 5xx. The body is not parsed; Kentico is
    /// likely suffering site issues. Safe to retry with backoff, though the
    /// client never retries on its own.
    #[error("Delivery API server error {status}")]
    Server { status: u16 },

    /// A success-status response body did not match the expected shape.
    /// Indicates an API/client contract mismatch.
    #[error("Failed to deserialize response body: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Transport-level failure (connect, DNS, timeout) from the HTTP stack.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error payload shape returned by the Delivery API on 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KenticoError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_code: Option<i64>,
}

impl KenticoError {
    /// Fallback payload for 4xx bodies that do not parse as the error shape;
    /// the raw body text becomes the message.
    pub(crate) fn from_raw_body(body: String) -> Self {
        Self {
            message: body,
            request_id: None,
            error_code: None,
            specific_code: None,
        }
    }
}
