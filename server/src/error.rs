//! Error types and the uniform JSON body for unhandled failures.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::config::SettingsError;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

// =============================================================================
// STARTUP
// =============================================================================

/// Failures that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("logging init failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("bind {addr} failed: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

// =============================================================================
// INTERNAL ERROR BODY
// =============================================================================

/// `500` response body. The detail is only exposed in debug mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternalError {
    pub error: &'static str,
    pub message: String,
}

impl InternalError {
    pub fn new(detail: impl Into<String>, expose_detail: bool) -> Self {
        let message = if expose_detail { detail.into() } else { GENERIC_ERROR_MESSAGE.to_owned() };
        Self { error: "Internal server error", message }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

// =============================================================================
// API ERROR
// =============================================================================

/// Failures a request can end in. Every variant answers with the
/// [`InternalError`] body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unexpected failure. `detail` reaches the client only when
    /// `expose_detail` is set (debug mode).
    #[error("internal error: {detail}")]
    Internal { detail: String, expose_detail: bool },
}

impl ApiError {
    pub fn internal(detail: impl Into<String>, expose_detail: bool) -> Self {
        Self::Internal { detail: detail.into(), expose_detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Internal { detail, expose_detail } => {
                tracing::error!(error = %detail, "unhandled exception");
                InternalError::new(detail, expose_detail).into_response()
            }
        }
    }
}

/// Map a caught handler panic to the JSON error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    ApiError::internal(panic_message(panic.as_ref()), debug).into_response()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
