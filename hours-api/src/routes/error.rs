use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::{auth::AuthError, domain::LoggedHoursError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

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

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<LoggedHoursError> for ApiError {
    fn from(err: LoggedHoursError) -> Self {
        match err {
            LoggedHoursError::HoursOutOfRange(_)
            | LoggedHoursError::EmptyDescription
            | LoggedHoursError::ReportDateOutOfRange => Self::bad_request(err.to_string()),
            LoggedHoursError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                Self::internal("storage operation failed")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => Self::unauthorized("Not authenticated"),
            AuthError::InvalidToken(ref e) => {
                tracing::debug!("Rejected access token: {}", e);
                Self::unauthorized("Invalid or expired token")
            }
            AuthError::MissingScope(_) => Self::forbidden(err.to_string()),
            AuthError::Misconfigured(ref e) => {
                tracing::error!("Auth misconfigured: {}", e);
                Self::internal("authentication unavailable")
            }
        }
    }
}
