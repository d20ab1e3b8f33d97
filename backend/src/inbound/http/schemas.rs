//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; the
//! wrappers here mirror their serialized shape for the generated document.

use utoipa::ToSchema;

use crate::inbound::http::posts::PostResponse;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication is missing or invalid.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted, e.g. not the author.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource or its parent does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "cannot follow yourself")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Machine-readable context such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for a paged post listing.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PostPageSchema {
    /// Total number of posts, independent of the window.
    count: usize,
    /// Absolute URL of the next window, if any.
    #[schema(example = "http://localhost:8080/api/v1/posts?limit=2&offset=2")]
    next: Option<String>,
    /// Absolute URL of the previous window, if any.
    previous: Option<String>,
    results: Vec<PostResponse>,
}
