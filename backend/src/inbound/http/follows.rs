//! Follow handlers.
//!
//! ```text
//! GET  /api/v1/follow?search=bob
//! POST /api/v1/follow {"following":"bob"}
//! ```
//!
//! Both routes act only on the caller's own outgoing edges.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Follow;
use crate::domain::ports::CreateFollowRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Rendered follow edge: `{user, following}` as usernames.
#[derive(Debug, Serialize, ToSchema)]
pub struct FollowResponse {
    #[schema(example = "alice")]
    pub user: String,
    #[schema(example = "bob")]
    pub following: String,
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        Self {
            user: follow.user.username().to_string(),
            following: follow.following.username().to_string(),
        }
    }
}

/// Filter for `GET /api/v1/follow`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FollowSearchQuery {
    /// Exact username of a followed user.
    pub search: Option<String>,
}

/// Body for `POST /api/v1/follow`. A `user` field is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FollowBody {
    #[schema(example = "bob")]
    pub following: Option<String>,
}

/// List the caller's outgoing follow edges.
#[utoipa::path(
    get,
    path = "/api/v1/follow",
    params(FollowSearchQuery),
    responses(
        (status = 200, description = "Follow edges", body = [FollowResponse]),
        (status = 401, description = "Authentication required", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "listFollows"
)]
#[get("/follow")]
pub async fn list_follows(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<FollowSearchQuery>,
) -> ApiResult<web::Json<Vec<FollowResponse>>> {
    let actor = session.actor()?;
    let follows = state
        .follows_query
        .list_follows(&actor, query.into_inner().search)
        .await?;
    Ok(web::Json(follows.into_iter().map(FollowResponse::from).collect()))
}

/// Follow another user.
#[utoipa::path(
    post,
    path = "/api/v1/follow",
    request_body = FollowBody,
    responses(
        (status = 201, description = "Created", body = FollowResponse),
        (status = 400, description = "Self-follow, duplicate or missing field", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 404, description = "Unknown username", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "createFollow"
)]
#[post("/follow")]
pub async fn create_follow(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<FollowBody>,
) -> ApiResult<HttpResponse> {
    let follow = state
        .follows
        .create_follow(CreateFollowRequest {
            actor: session.actor()?,
            following: payload.into_inner().following,
        })
        .await?;
    Ok(HttpResponse::Created().json(FollowResponse::from(follow)))
}
