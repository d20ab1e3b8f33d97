//! Post handlers.
//!
//! ```text
//! GET    /api/v1/posts?limit=2&offset=4
//! POST   /api/v1/posts {"text":"hi","group":1}
//! GET    /api/v1/posts/{id}
//! PUT    /api/v1/posts/{id} {"text":"edited"}
//! PATCH  /api/v1/posts/{id} {"image":null}
//! DELETE /api/v1/posts/{id}
//! ```
//!
//! Listing returns a plain array unless a valid `limit` is supplied, in which
//! case the `{count, next, previous, results}` envelope is used.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use pagination::{PageRequest, Paginated};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::access::UpdateMode;
use crate::domain::ports::{CreatePostRequest, DeletePostRequest, ListPostsRequest, UpdatePostRequest};
use crate::domain::{GroupId, Post, PostChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PostPageSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{double_option, parse_post_id};

/// Rendered post; `author` is the author's username.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "hi")]
    pub text: String,
    /// RFC 3339 creation timestamp.
    #[schema(example = "2024-01-01T12:00:00+00:00")]
    pub pub_date: String,
    #[schema(example = "alice")]
    pub author: String,
    pub image: Option<String>,
    pub group: Option<i64>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.get(),
            text: post.text,
            pub_date: post.pub_date.to_rfc3339(),
            author: post.author.username().to_string(),
            image: post.image,
            group: post.group.map(GroupId::get),
        }
    }
}

/// Window parameters for `GET /api/v1/posts`.
///
/// Documentation only: the handler reads the raw query string so that
/// malformed or repeated values fall back to the unpaginated listing
/// (`limit`) or to zero (`offset`) instead of failing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PostListQuery {
    /// Page size; enables the paged envelope when a positive integer.
    pub limit: Option<String>,
    /// Number of posts to skip.
    pub offset: Option<String>,
}

/// Body for `POST /api/v1/posts`. `author` is never read from input.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreatePostBody {
    pub text: Option<String>,
    pub image: Option<String>,
    pub group: Option<i64>,
}

/// Body for `PUT`/`PATCH /api/v1/posts/{id}`.
///
/// `image` and `group` may be sent as `null` to clear them.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostBody {
    pub text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i64>)]
    pub group: Option<Option<i64>>,
}

impl From<UpdatePostBody> for PostChanges {
    fn from(body: UpdatePostBody) -> Self {
        Self {
            text: body.text,
            image: body.image,
            group: body.group.map(|group| group.map(GroupId::new)),
        }
    }
}

/// List posts, optionally windowed.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListQuery),
    responses(
        (status = 200, description = "Posts; a plain array without `limit`", body = PostPageSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts",
    security([])
)]
#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let actor = session.actor()?;
    let window = PageRequest::from_query_string(req.query_string(), state.max_page_limit);
    let page = state
        .posts_query
        .list_posts(ListPostsRequest { actor, window })
        .await?
        .map(PostResponse::from);

    match window {
        Some(window) => {
            let base = req.full_url();
            Ok(HttpResponse::Ok().json(Paginated::from_page(page, window, &base)))
        }
        None => {
            let (items, _) = page.into_parts();
            Ok(HttpResponse::Ok().json(items))
        }
    }
}

/// Create a post authored by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostBody,
    responses(
        (status = 201, description = "Created", body = PostResponse),
        (status = 400, description = "Invalid payload or unknown group", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreatePostBody>,
) -> ApiResult<HttpResponse> {
    let CreatePostBody { text, image, group } = payload.into_inner();
    let post = state
        .posts
        .create_post(CreatePostRequest {
            actor: session.actor()?,
            text,
            image,
            group: group.map(GroupId::new),
        })
        .await?;
    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// Fetch one post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = PostResponse),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost",
    security([])
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<PostResponse>> {
    let id = parse_post_id(&path)?;
    let post = state.posts_query.get_post(&session.actor()?, id).await?;
    Ok(web::Json(post.into()))
}

async fn update(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdatePostBody>,
    mode: UpdateMode,
) -> ApiResult<web::Json<PostResponse>> {
    let post_id = parse_post_id(&path)?;
    let post = state
        .posts
        .update_post(UpdatePostRequest {
            actor: session.actor()?,
            post_id,
            mode,
            changes: payload.into_inner().into(),
        })
        .await?;
    Ok(web::Json(post.into()))
}

/// Replace a post's text; only the author may do this.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostBody,
    responses(
        (status = 200, description = "Updated", body = PostResponse),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "updatePost"
)]
#[put("/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdatePostBody>,
) -> ApiResult<web::Json<PostResponse>> {
    update(state, session, path, payload, UpdateMode::Full).await
}

/// Change selected fields of a post; only the author may do this.
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostBody,
    responses(
        (status = 200, description = "Updated", body = PostResponse),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "patchPost"
)]
#[patch("/posts/{id}")]
pub async fn patch_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdatePostBody>,
) -> ApiResult<web::Json<PostResponse>> {
    update(state, session, path, payload, UpdateMode::Partial).await
}

/// Delete a post; only the author may do this.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    state
        .posts
        .delete_post(DeletePostRequest {
            actor: session.actor()?,
            post_id,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
