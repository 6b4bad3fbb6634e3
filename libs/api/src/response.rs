use std::sync::OnceLock;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::UnsupportedMediaType(message) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
            }
            ApiError::PayloadTooLarge(message) => {
                (StatusCode::PAYLOAD_TOO_LARGE, message)
            }
            ApiError::StorageError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

impl ApiError {
    /// Maps an extractor failure, keeping a body-limit breach as 413.
    fn rejected(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(message)
        } else {
            ApiError::ValidationError(message)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::rejected(e.status(), e.body_text())
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(code = error_code, error = format!("{:?}", e));
            ApiError::StorageError(format!(
                "{}: {:#}",
                error_message(error_code),
                e
            ))
        })
    }
}

static ERROR_CODES: OnceLock<Map<String, Value>> = OnceLock::new();

fn error_message(error_code: &str) -> String {
    let errors = ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    });

    errors
        .get(error_code)
        .and_then(Value::as_str)
        .unwrap_or("unexpected error")
        .to_string()
}

#[derive(Serialize, ToSchema)]
pub struct CreatedResp {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
pub struct UpdatedResp {
    pub updated: u64,
}

#[derive(Serialize, ToSchema)]
pub struct DeletedResp {
    pub deleted: u64,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub error: String,
}
