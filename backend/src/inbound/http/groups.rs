//! Group handlers (read-only).
//!
//! ```text
//! GET /api/v1/groups
//! GET /api/v1/groups/{id}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Group;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_group_id;

/// Rendered group.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Rustaceans")]
    pub title: String,
    #[schema(example = "rust")]
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.get(),
            title: group.title,
            slug: group.slug.into(),
            description: group.description,
        }
    }
}

/// List all groups.
#[utoipa::path(
    get,
    path = "/api/v1/groups",
    responses(
        (status = 200, description = "Groups", body = [GroupResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "listGroups",
    security([])
)]
#[get("/groups")]
pub async fn list_groups(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<GroupResponse>>> {
    let actor = session.actor()?;
    let groups = state.groups.list_groups(&actor).await?;
    Ok(web::Json(groups.into_iter().map(GroupResponse::from).collect()))
}

/// Fetch one group.
#[utoipa::path(
    get,
    path = "/api/v1/groups/{id}",
    params(("id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group", body = GroupResponse),
        (status = 404, description = "No such group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "getGroup",
    security([])
)]
#[get("/groups/{id}")]
pub async fn get_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<GroupResponse>> {
    let id = parse_group_id(&path)?;
    let actor = session.actor()?;
    let group = state.groups.get_group(&actor, id).await?;
    Ok(web::Json(group.into()))
}
