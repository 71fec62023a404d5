//! Error types for the upload widget.
//!
//! - [`ValidationError`] - client-side checks, raised before any request
//! - [`UploadError`] - outcome of a submitted upload that did not succeed
//! - [`TransportError`] - browser binding failures (folded into `UploadError::Network`)
//! - [`AppError`] - API status probe errors
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Reasons a file selection is rejected before upload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing selected.
    #[error("Please select a file first.")]
    NoFiles,

    /// File name does not end in `.pdf`.
    #[error("File '{name}' is not a PDF.")]
    NotPdf { name: String },

    /// File exceeds the per-file size limit.
    #[error("File '{name}' is too large (max {} MB).", .limit / (1024 * 1024))]
    TooLarge { name: String, limit: u64 },
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Failure outcomes of a single upload attempt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// Server answered outside 2xx with an error payload.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// Body was not JSON, or not the expected shape.
    #[error("Failed to parse the server response.")]
    MalformedResponse,

    /// Connection refused, DNS failure, abort or transport timeout.
    #[error("A network error occurred while uploading.")]
    Network,
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        log::error!("Upload transport failed: {}", err);
        UploadError::Network
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Errors raised while driving the browser request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Building the request (FormData, XHR object) failed.
    #[error("Failed to build request: {0}")]
    Setup(String),

    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Failed(String),

    /// The completion channel was dropped before the request finished.
    #[error("Request was dropped before completion")]
    Dropped,
}

// =============================================================================
// Application Errors
// =============================================================================

/// Errors from auxiliary API calls (status probe).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// HTTP request could not be sent.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("Server returned status {0}")]
    Status(u16),

    /// Response body had an unexpected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for status probe operations.
pub type AppResult<T> = Result<T, AppError>;
