//! HTTP error mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use clientdir_core::{RepoError, SeedError};
use serde_json::json;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure surfaced by a request handler.
///
/// Every variant maps to `500`; the store has no recoverable failure modes.
#[derive(Debug)]
pub enum ApiError {
    Repo(RepoError),
    Seed(SeedError),
    /// A previous holder of the connection lock panicked.
    StatePoisoned,
    /// The blocking worker running the query was cancelled.
    Blocking,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "{err}"),
            Self::StatePoisoned => write!(f, "database connection lock is poisoned"),
            Self::Blocking => write!(f, "database worker was cancelled"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Seed(err) => Some(err),
            Self::StatePoisoned | Self::Blocking => None,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<SeedError> for ApiError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
