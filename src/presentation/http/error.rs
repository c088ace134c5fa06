use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Parameter errors carry a single message, validation errors one per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Messages(Vec<String>),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    detail: ErrorDetail,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::BadRequest(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSort(msg) | DomainError::InvalidFilter(msg) => {
                Self::message(StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            DomainError::ValidationFailed(messages) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: ErrorDetail::Messages(messages),
            },
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "persistence failure");
                Self::message(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    fn message(status: StatusCode, message: String) -> Self {
        Self {
            status,
            detail: ErrorDetail::Message(message),
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse { error: self.detail };
        (self.status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_are_unprocessable_with_single_message() {
        let err = HttpError::from_error(
            DomainError::InvalidSort("Invalid sort param 'x'".into()).into(),
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail, ErrorDetail::Message("Invalid sort param 'x'".into()));
    }

    #[test]
    fn validation_errors_keep_every_message() {
        let err = HttpError::from_error(
            DomainError::ValidationFailed(vec!["a".into(), "b".into()]).into(),
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(ErrorResponse { error: err.detail }).unwrap(),
            serde_json::json!({ "error": ["a", "b"] })
        );
    }

    #[test]
    fn persistence_errors_are_internal() {
        let err = HttpError::from_error(DomainError::Persistence("down".into()).into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
