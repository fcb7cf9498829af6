//! Error types for requests against the Shippinglabel API.
//!
//! Every call returns exactly one of the variants of [`Error`]:
//!
//! - [`Error::Config`]: the client or context was misconfigured
//! - [`Error::Transport`]: DNS, connect, TLS or I/O failure inside `reqwest`
//! - [`Error::Api`]: the API answered with a status code >= 400
//! - [`Error::Decode`]: a response body (success or error) was not valid JSON
//! - [`Error::Body`]: the request body could not be produced
//! - [`Error::Validation`]: the arguments were rejected before sending
//!
//! # Example
//!
//! ```rust,ignore
//! use shippinglabel::Error;
//!
//! match api.get_parcel(0).await {
//!     Ok(parcel) => println!("{parcel:?}"),
//!     Err(Error::Api(e)) => println!("API error {:?}: {}", e.code, e),
//!     Err(other) => println!("request failed: {other}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;

/// Error body returned by the API for every status code >= 400.
///
/// ```rust
/// use shippinglabel::ApiError;
///
/// let error: ApiError =
///     serde_json::from_str(r#"{"message":"not found","code":"NOT_FOUND"}"#).unwrap();
/// assert_eq!(error.to_string(), "not found");
/// assert_eq!(error.code.as_deref(), Some("NOT_FOUND"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", .message.as_deref().unwrap_or("unknown API error"))]
pub struct ApiError {
    /// Human readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine readable error code, e.g. `NOT_FOUND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Individual messages, typically one per rejected field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    /// Additional detail about the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Arguments rejected before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An operation that needs at least one id got none.
    #[error("id is required")]
    EmptyIdList,

    /// The id list was neither a list of strings nor a list of integers.
    #[error("wrong type: expected a list of string or integer ids, found {found}")]
    UnsupportedIdList {
        /// Short description of what was supplied.
        found: String,
    },
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The client or context was misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API returned a status code >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request body could not be produced.
    #[error("Failed to produce request body: {0}")]
    Body(#[from] std::io::Error),

    /// The arguments were rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns the API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_deserializes_full_body() {
        let body = r#"{
            "message": "validation failed",
            "code": "INVALID",
            "messages": ["city is required", "zip is required"],
            "detail": "address"
        }"#;
        let error: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(error.message.as_deref(), Some("validation failed"));
        assert_eq!(error.code.as_deref(), Some("INVALID"));
        assert_eq!(error.messages, vec!["city is required", "zip is required"]);
        assert_eq!(error.detail.as_deref(), Some("address"));
    }

    #[test]
    fn test_api_error_display_without_message() {
        let error = ApiError::default();
        assert_eq!(error.to_string(), "unknown API error");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyIdList.to_string(), "id is required");
        let error = ValidationError::UnsupportedIdList {
            found: "object".to_string(),
        };
        assert!(error.to_string().contains("object"));
    }

    #[test]
    fn test_error_from_conversions() {
        let error: Error = ConfigError::MissingToken.into();
        assert!(matches!(error, Error::Config(ConfigError::MissingToken)));

        let error: Error = ApiError::default().into();
        assert!(error.as_api_error().is_some());

        let error: Error = ValidationError::EmptyIdList.into();
        assert!(error.as_api_error().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &ApiError::default();
        let _: &dyn std::error::Error = &ValidationError::EmptyIdList;
        let _: &dyn std::error::Error = &Error::Validation(ValidationError::EmptyIdList);
    }
}
