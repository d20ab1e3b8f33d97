//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every `/api/v1` handler, the health probes, the
//! response and request bodies, and the session cookie security scheme. The
//! document backs Swagger UI in debug builds.

use crate::inbound::http::comments::{CommentBody, CommentResponse};
use crate::inbound::http::follows::{FollowBody, FollowResponse};
use crate::inbound::http::groups::GroupResponse;
use crate::inbound::http::posts::{CreatePostBody, PostResponse, UpdatePostBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PostPageSchema};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the blog REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog API",
        description = "Posts, comments, groups and follow subscriptions behind a session cookie."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::groups::list_groups,
        crate::inbound::http::groups::get_group,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::update_post,
        crate::inbound::http::posts::patch_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::get_comment,
        crate::inbound::http::comments::update_comment,
        crate::inbound::http::comments::patch_comment,
        crate::inbound::http::comments::delete_comment,
        crate::inbound::http::follows::list_follows,
        crate::inbound::http::follows::create_follow,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        GroupResponse,
        PostResponse,
        PostPageSchema,
        CreatePostBody,
        UpdatePostBody,
        CommentResponse,
        CommentBody,
        FollowResponse,
        FollowBody,
    )),
    tags(
        (name = "users", description = "Session login and logout"),
        (name = "groups", description = "Read-only communities"),
        (name = "posts", description = "Posts and paginated listing"),
        (name = "comments", description = "Comments nested under a post"),
        (name = "follows", description = "Follow subscriptions of the session user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
