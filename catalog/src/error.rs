//! Error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Remote and storage failures are logged and the
//! caller keeps its prior state; validation failures are shown in the form
//! before any remote call is attempted.

use thiserror::Error;

/// Failure talking to a remote collaborator (catalog API or asset storage).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status code.
    #[error("service responded with status {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The collaborator only exists in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Failure reading or writing durable client storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable (SSR, private mode, disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota, security error).
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// A form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name is required.")]
    MissingName,
    #[error("Category is required.")]
    MissingCategory,
    #[error("Price is required.")]
    MissingPrice,
    #[error("Price must be a non-negative number.")]
    InvalidPrice,
    #[error("Live link must be an http(s) URL.")]
    InvalidLiveLink,
}

/// Why a form submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Wait for {0} image upload(s) to finish.")]
    UploadsPending(usize),
    #[error("A submission is already in progress.")]
    AlreadySubmitting,
    #[error("The form is not open.")]
    Closed,
    #[error("Save failed: {0}")]
    Remote(#[from] ServiceError),
}
