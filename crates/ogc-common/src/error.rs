//! Error types for the OGC client crates.
//!
//! Every error is `Clone` and serde-serializable: a failure raised inside the
//! worker context travels back to the caller inside a dispatch envelope and
//! must arrive with its details intact.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::xml::XmlDocument;

/// Result type alias using OgcError.
pub type OgcResult<T> = Result<T, OgcError>;

/// Primary error type for OGC client operations.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OgcError {
    // === Document Errors ===
    #[error("XML parse error: {message}")]
    XmlParse { message: String },

    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("Unsupported {protocol} version: {version}")]
    UnsupportedVersion { protocol: String, version: String },

    #[error("Invalid GeoJSON: {message}")]
    InvalidGeoJson { message: String },

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    // === Remote Errors ===
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error(transparent)]
    ServiceException(#[from] ServiceExceptionError),

    // === Dispatch Errors ===
    #[error("Unknown task: {task_name}")]
    UnknownTask { task_name: String },

    #[error("Invalid task parameters: {message}")]
    InvalidTaskParams { message: String },

    #[error("Worker unavailable: {message}")]
    WorkerUnavailable { message: String },
}

impl OgcError {
    pub fn xml_parse(message: impl Into<String>) -> Self {
        OgcError::XmlParse {
            message: message.into(),
        }
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        OgcError::InvalidDocument {
            message: message.into(),
        }
    }

    /// True when the remote endpoint is reachable but blocked the request.
    pub fn is_cors_error(&self) -> bool {
        matches!(self, OgcError::Endpoint(e) if e.is_cors_error)
    }

    /// HTTP status reported by the endpoint, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            OgcError::Endpoint(e) => e.http_status,
            _ => None,
        }
    }

    /// OGC exception code reported by the service, if any.
    pub fn exception_code(&self) -> Option<&str> {
        match self {
            OgcError::ServiceException(e) => Some(e.code.as_str()),
            _ => None,
        }
    }
}

/// Transport-level failure: unreachable host, blocked request or HTTP error status.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Endpoint error: {message}")]
pub struct EndpointError {
    pub message: String,
    pub http_status: Option<u16>,
    pub is_cors_error: bool,
}

impl EndpointError {
    /// The host could not be reached at all.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: None,
            is_cors_error: false,
        }
    }

    /// The host answered a probe but the actual request was refused.
    pub fn blocked(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: None,
            is_cors_error: true,
        }
    }

    /// The host answered with an HTTP error status.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            http_status: Some(status),
            is_cors_error: false,
        }
    }
}

/// Application-level failure reported by the service inside a valid XML document.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Service exception [{code}] at '{locator}' for {request_url}: {message}")]
pub struct ServiceExceptionError {
    pub code: String,
    pub locator: String,
    pub message: String,
    pub request_url: String,
    pub response: XmlDocument,
}

impl From<serde_json::Error> for OgcError {
    fn from(err: serde_json::Error) -> Self {
        OgcError::InvalidTaskParams {
            message: err.to_string(),
        }
    }
}
