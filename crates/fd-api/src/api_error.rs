//! # ApiError
//!
//! Translates an [`AppError`] into the client-facing error payload.
//! This is the only place that assigns HTTP status codes and messages to
//! error codes.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use fd_core::{AppError, ErrorCode};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error.";

/// Error body returned to HTTP clients.
///
/// Only built from an [`AppError`] via [`ApiError::translate`].
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{status}: {user_message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(serialize_with = "serialize_status")]
    status: StatusCode,
    code: String,
    user_message: String,
    developer_message: String,
    more_info: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    caused_by: Vec<AppError>,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl ApiError {
    /// Builds the payload for `code` with its status and messages filled in.
    fn for_code(code: ErrorCode) -> Self {
        // Placeholders; every arm below overwrites them.
        let mut api_error = Self {
            status: StatusCode::OK,
            code: code.to_string(),
            user_message: String::new(),
            developer_message: String::new(),
            more_info: String::new(),
            caused_by: Vec::new(),
        };

        match code {
            ErrorCode::Error => {
                api_error.status = StatusCode::INTERNAL_SERVER_ERROR;
                api_error.user_message = INTERNAL_SERVER_ERROR.to_owned();
                api_error.developer_message = INTERNAL_SERVER_ERROR.to_owned();
            }
        }

        api_error
    }

    /// Renders `error` for clients. The causal chain is copied as-is; the
    /// error's own message is not exposed.
    pub fn translate(error: &AppError) -> Self {
        let mut api_error = Self::for_code(error.code());
        api_error.caused_by = error.caused_by().to_vec();
        api_error
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn developer_message(&self) -> &str {
        &self.developer_message
    }

    /// Reserved; always empty.
    pub fn more_info(&self) -> &str {
        &self.more_info
    }

    pub fn caused_by(&self) -> &[AppError] {
        &self.caused_by
    }
}

impl From<&AppError> for ApiError {
    fn from(error: &AppError) -> Self {
        Self::translate(error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

/// Renders an optional service error.
///
/// `None` means "no error" and yields `204 No Content`.
pub fn error_response(error: Option<&AppError>) -> HttpResponse {
    match error {
        None => HttpResponse::NoContent().finish(),
        Some(error) => {
            let api_error = ApiError::translate(error);
            warn!(
                code = %error.code(),
                message = error.message(),
                status = api_error.status().as_u16(),
                "request failed"
            );
            api_error.error_response()
        }
    }
}
