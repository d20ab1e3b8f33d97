//! Comment handlers, nested under their post.
//!
//! ```text
//! GET    /api/v1/posts/{post_id}/comments
//! POST   /api/v1/posts/{post_id}/comments {"text":"nice"}
//! GET    /api/v1/posts/{post_id}/comments/{id}
//! PUT    /api/v1/posts/{post_id}/comments/{id}
//! PATCH  /api/v1/posts/{post_id}/comments/{id}
//! DELETE /api/v1/posts/{post_id}/comments/{id}
//! ```
//!
//! The post id in the path is authoritative; a `post` field in a body is
//! ignored.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::access::UpdateMode;
use crate::domain::ports::{CreateCommentRequest, DeleteCommentRequest, UpdateCommentRequest};
use crate::domain::{Comment, CommentId, PostId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_comment_id, parse_post_id};

/// Rendered comment: exactly `{id, author, text, created, post}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "bob")]
    pub author: String,
    pub text: String,
    /// RFC 3339 creation timestamp.
    pub created: String,
    #[schema(example = 7)]
    pub post: i64,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.get(),
            author: comment.author.username().to_string(),
            text: comment.text,
            created: comment.created.to_rfc3339(),
            post: comment.post.get(),
        }
    }
}

/// Body for comment create and update.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CommentBody {
    pub text: Option<String>,
}

fn parse_item_path(path: &(String, String)) -> Result<(PostId, CommentId), crate::domain::Error> {
    Ok((parse_post_id(&path.0)?, parse_comment_id(&path.1)?))
}

/// List the comments of one post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Parent post id")),
    responses(
        (status = 200, description = "Comments", body = [CommentResponse]),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments",
    security([])
)]
#[get("/posts/{post_id}/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<CommentResponse>>> {
    let post_id = parse_post_id(&path)?;
    let comments = state
        .comments_query
        .list_comments(&session.actor()?, post_id)
        .await?;
    Ok(web::Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

/// Comment on a post as the caller.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Parent post id")),
    request_body = CommentBody,
    responses(
        (status = 201, description = "Created", body = CommentResponse),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 404, description = "No such post", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/posts/{post_id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CommentBody>,
) -> ApiResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let comment = state
        .comments
        .create_comment(CreateCommentRequest {
            actor: session.actor()?,
            post_id,
            text: payload.into_inner().text,
        })
        .await?;
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

/// Fetch one comment of a post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    params(
        ("post_id" = i64, Path, description = "Parent post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment", body = CommentResponse),
        (status = 404, description = "No such post or comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "getComment",
    security([])
)]
#[get("/posts/{post_id}/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<CommentResponse>> {
    let (post_id, comment_id) = parse_item_path(&path)?;
    let comment = state
        .comments_query
        .get_comment(&session.actor()?, post_id, comment_id)
        .await?;
    Ok(web::Json(comment.into()))
}

async fn update(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
    payload: web::Json<CommentBody>,
    mode: UpdateMode,
) -> ApiResult<web::Json<CommentResponse>> {
    let (post_id, comment_id) = parse_item_path(&path)?;
    let comment = state
        .comments
        .update_comment(UpdateCommentRequest {
            actor: session.actor()?,
            post_id,
            comment_id,
            mode,
            text: payload.into_inner().text,
        })
        .await?;
    Ok(web::Json(comment.into()))
}

/// Replace a comment's text; only the author may do this.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    params(
        ("post_id" = i64, Path, description = "Parent post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = CommentBody,
    responses(
        (status = 200, description = "Updated", body = CommentResponse),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post or comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "updateComment"
)]
#[put("/posts/{post_id}/comments/{id}")]
pub async fn update_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
    payload: web::Json<CommentBody>,
) -> ApiResult<web::Json<CommentResponse>> {
    update(state, session, path, payload, UpdateMode::Full).await
}

/// Partially update a comment; only the author may do this.
#[utoipa::path(
    patch,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    params(
        ("post_id" = i64, Path, description = "Parent post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = CommentBody,
    responses(
        (status = 200, description = "Updated", body = CommentResponse),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post or comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "patchComment"
)]
#[patch("/posts/{post_id}/comments/{id}")]
pub async fn patch_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
    payload: web::Json<CommentBody>,
) -> ApiResult<web::Json<CommentResponse>> {
    update(state, session, path, payload, UpdateMode::Partial).await
}

/// Delete a comment; only the author may do this.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    params(
        ("post_id" = i64, Path, description = "Parent post id"),
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Authentication required", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such post or comment", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "deleteComment"
)]
#[delete("/posts/{post_id}/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (post_id, comment_id) = parse_item_path(&path)?;
    state
        .comments
        .delete_comment(DeleteCommentRequest {
            actor: session.actor()?,
            post_id,
            comment_id,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
