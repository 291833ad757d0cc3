use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // client side
    #[error("already exists")]
    AlreadyExists,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // infra things
    #[error(transparent)]
    Db(DbErr),
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
    message: &'a str,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to hand to the caller. Infra errors never leak their detail.
    fn public_message(&self) -> &str {
        match self {
            Self::AlreadyExists => "User already exists",
            Self::Validation(msg) | Self::BadRequest(msg) => msg,
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Not allowed to act on this resource",
            Self::Db(_) | Self::Internal(_) => "Internal server error",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists | Self::Validation(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(kind = self.kind(), "request failed: {self}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.public_message(),
        })
    }
}
