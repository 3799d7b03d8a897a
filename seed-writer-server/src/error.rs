//! HTTP mapping for generation failures.
//!
//! Validation failures become 400s naming the offending request field;
//! invariant failures become redacted 500s.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use seed_writer::{Field, GenerateError};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidRequest,
    InternalError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl ApiError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidRequest,
            message: message.into(),
            field: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

/// Request body key for a core field.
pub fn wire_name(field: Field) -> &'static str {
    match field {
        Field::PhoneticReading => "name_kana",
        Field::DateOfBirth => "dob",
        Field::ReferenceDate => "today",
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Validation(v) => {
                ApiError::invalid_request(v.reason).with_field(wire_name(v.field))
            }
            GenerateError::Invariant(detail) => {
                error!(detail = %detail, "generation invariant violated");
                ApiError::internal(detail)
            }
        }
    }
}

fn redact_if_internal(error: &ApiError) -> ApiError {
    if matches!(error.code, ErrorCode::InternalError) {
        ApiError::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "ok": false,
            "error": redact_if_internal(self),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use seed_writer::core::validate::ValidationError;
    use serde_json::Value;

    #[rstest]
    #[case(Field::PhoneticReading, "name_kana")]
    #[case(Field::DateOfBirth, "dob")]
    #[case(Field::ReferenceDate, "today")]
    fn validation_maps_to_wire_field(#[case] field: Field, #[case] expected: &str) {
        let err = ApiError::from(GenerateError::Validation(ValidationError::new(field, "bad")));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.field(), Some(expected));
        assert_eq!(err.message(), "bad");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let err = ApiError::from(GenerateError::Invariant("month out of range: 13".into()));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let value: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "internal_error");
        assert_eq!(value["error"]["message"], "Internal server error");
    }
}
