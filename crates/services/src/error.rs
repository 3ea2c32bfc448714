//! Shared error types for the services crate.

use thiserror::Error;

/// Errors surfaced by the API gateway.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with an error status and a JSON payload.
    #[error("backend rejected the request with status {status}")]
    Backend {
        status: reqwest::StatusCode,
        payload: serde_json::Value,
    },

    /// The backend answered with an error status but the payload was not
    /// decodable as JSON text.
    #[error("backend error payload is not valid JSON (status {status})")]
    MalformedErrorBody { status: reqwest::StatusCode },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `LoginService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error("login response body could not be parsed")]
    MalformedResponse(#[source] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `FormService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ResultService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResultError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Render(#[from] chart::RenderError),
}
