use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// HTTP 错误，序列化为 `{"data": null, "error": "<msg>"}` 信封
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        use domain::DomainError;

        let message = error.to_string();
        let status = match error {
            ApplicationError::Domain(DomainError::AdNotFound)
            | ApplicationError::Domain(DomainError::UserNotFound) => StatusCode::NOT_FOUND,
            ApplicationError::Domain(DomainError::AccessForbidden) => StatusCode::FORBIDDEN,
            ApplicationError::Domain(DomainError::Validation { .. })
            | ApplicationError::Domain(DomainError::MalformedQuery { .. })
            | ApplicationError::Authentication => StatusCode::BAD_REQUEST,
        };
        Self::new(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "data": null, "error": self.message })),
        )
            .into_response()
    }
}
