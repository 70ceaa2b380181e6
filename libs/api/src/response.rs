use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use repository::RepositoryError;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

pub enum ApiError {
    NotFound(String),
    ServerError(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, Json(ErrorResp { error: message })).into_response()
    }
}

// Requests the handlers cannot read fail like any other non-lookup error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        error!(task = "read json body", error = rejection.body_text());
        ApiError::ServerError(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        error!(task = "read path", error = rejection.body_text());
        ApiError::ServerError(rejection.body_text())
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, task: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, task: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(task, error = e.to_string());
            ApiError::ServerError(e.to_string())
        })
    }
}
