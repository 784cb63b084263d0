use crate::utils::error::StatsError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// A report endpoint failed to produce a body.
///
/// Upstream failures are already folded into the reports as empty
/// contributions, so this only surfaces local composition errors.
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
pub struct ApiError {
    pub message: &'static str,
    #[source]
    pub source: StatsError,
}

impl ApiError {
    pub fn new(message: &'static str, source: StatsError) -> Self {
        Self { message, source }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(kind = self.source.kind(), "{}", self);
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.message,
        })
    }
}
