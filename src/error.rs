// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP error type and the uniform error envelope.
//!
//! Every failed request is answered with the same JSON shape:
//!
//! ```json
//! {
//!   "developerMessage": [{ "field": "nip", "message": "Nip must consist of exactly ten digits." }],
//!   "userMessage":      [{ "field": "nip", "message": "Nip must consist of exactly ten digits." }],
//!   "errorCode": 400,
//!   "moreInfo": "Please look into api/doc for more information."
//! }
//! ```
//!
//! | Status | Message form |
//! |--------|--------------|
//! | `400 Bad Request` | ordered list of `{field?, message}` |
//! | `404 Not Found` | plain string |
//! | `500 Internal Server Error` | plain string |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response}
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::validation;

/// Static pointer to the API documentation carried by every envelope.
pub const MORE_INFO: &str = "Please look into api/doc for more information.";

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Resource kinds addressed by id in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Company,
    Employee
}

impl Resource {
    /// Message used in the 404 envelope.
    pub const fn not_found_message(&self) -> &'static str {
        match self {
            Self::Company => "Company not found",
            Self::Employee => "Employee not found"
        }
    }
}

/// Single entry of a bad-request message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldMessage {
    /// Request field the message refers to, absent for payload-level errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Human readable description of the failure.
    pub message: String
}

impl FieldMessage {
    /// Message attached to a request field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field:   Some(field.into()),
            message: message.into()
        }
    }

    /// Message about the payload as a whole.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field:   None,
            message: message.into()
        }
    }
}

/// Message carried by `developerMessage` and `userMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Plain string, used for missing resources and server faults.
    Text(String),

    /// Ordered field messages, used for every bad request.
    Violations(Vec<FieldMessage>)
}

/// Uniform JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub developer_message: ErrorMessage,
    pub user_message:      ErrorMessage,
    /// Mirrors the HTTP status code.
    pub error_code:        u16,
    pub more_info:         String
}

impl ErrorEnvelope {
    /// Build an envelope whose developer and user messages are identical.
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        Self {
            developer_message: message.clone(),
            user_message:      message,
            error_code:        status.as_u16(),
            more_info:         MORE_INFO.to_string()
        }
    }
}

/// Failure of a single API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was empty.
    #[error("Payload cannot be empty")]
    EmptyPayload,

    /// Request body was not a JSON object of the expected shape.
    #[error("Invalid json payload")]
    MalformedPayload,

    /// A required field was absent or empty (presence tier).
    #[error("{message}")]
    MissingField {
        field:   &'static str,
        message: &'static str
    },

    /// One or more declarative constraints failed.
    #[error("payload failed validation with {} violation(s)", .0.len())]
    Validation(Vec<FieldMessage>),

    /// The addressed resource does not exist.
    #[error("{}", .0.not_found_message())]
    NotFound(Resource),

    /// The store failed to complete the operation.
    #[error("store failure: {0}")]
    Store(String)
}

impl ApiError {
    /// Wrap any store error.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }

    /// Flatten validator output into an ordered violation list.
    ///
    /// `fields` fixes the order in which fields are reported.
    pub fn validation(errors: &ValidationErrors, fields: &[&'static str]) -> Self {
        Self::Validation(validation::flatten(errors, fields))
    }

    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::EmptyPayload
            | Self::MalformedPayload
            | Self::MissingField {
                ..
            }
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Envelope sent to the client.
    pub fn envelope(&self) -> ErrorEnvelope {
        let message = match self {
            Self::EmptyPayload | Self::MalformedPayload => {
                ErrorMessage::Violations(vec![FieldMessage::general(self.to_string())])
            }
            Self::MissingField {
                field,
                message
            } => ErrorMessage::Violations(vec![FieldMessage::new(*field, *message)]),
            Self::Validation(violations) => ErrorMessage::Violations(violations.clone()),
            Self::NotFound(resource) => ErrorMessage::Text(resource.not_found_message().to_string()),
            Self::Store(_) => ErrorMessage::Text("Internal server error".to_string())
        };
        ErrorEnvelope::new(self.status(), message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(cause) = &self {
            tracing::error!("Store error: {cause}");
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}
