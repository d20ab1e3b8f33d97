//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting actix handlers
//! return it directly: status codes are derived from [`ErrorCode`], internal
//! failures are redacted, and the trace id is echoed as a header.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => error!(message = self.message(), "request failed"),
            ErrorCode::ServiceUnavailable => warn!(message = self.message(), "dependency unavailable"),
            _ => {}
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

/// `JsonConfig` error handler turning body parse failures into
/// `invalid_request` responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let details = json!({ "code": "invalid_json", "reason": err.to_string() });
    Error::invalid_request("request body is not valid JSON for this endpoint")
        .with_details(details)
        .into()
}

/// `QueryConfig` error handler turning query parse failures into
/// `invalid_request` responses.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let details = json!({ "code": "invalid_query", "reason": err.to_string() });
    Error::invalid_request("query string is malformed")
        .with_details(details)
        .into()
}

#[cfg(test)]
mod tests;
