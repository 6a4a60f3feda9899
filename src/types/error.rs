use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // auth
    #[error("malformed token")]
    MalformedToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("forbidden")]
    Forbidden,

    // data
    #[error("handle already taken")]
    DuplicateHandle,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),

    // infra things
    #[error(transparent)]
    StoreUnavailable(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::DuplicateHandle => "DUPLICATE_HANDLE",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::NotFound => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = err {
            return AppError::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::from_unique_violation(&msg, err),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::NotFound,
            _ => AppError::StoreUnavailable(err),
        }
    }

    /// Postgres reports `users_handle_key`, SQLite `users.handle`; both name
    /// the column.
    fn from_unique_violation(msg: &str, err: DbErr) -> Self {
        if msg.contains("handle") {
            AppError::DuplicateHandle
        } else if msg.contains("email") {
            AppError::DuplicateEmail
        } else {
            AppError::StoreUnavailable(err)
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedToken | Self::InvalidToken | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::DuplicateHandle | Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // store errors can carry SQL; keep them out of the body
        let message = match self {
            Self::StoreUnavailable(e) => {
                error!("store failure: {e}");
                "store unavailable".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message })
    }
}
