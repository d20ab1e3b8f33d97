//! Wiring of Diesel adapters into the domain services behind `HttpState`.

use std::sync::Arc;

use actix_web::web;

use blog_api::domain::{CommentsService, FollowsService, GroupsService, PostsService};
use blog_api::inbound::http::state::{HttpState, HttpStatePorts};
use blog_api::outbound::persistence::{
    DbPool, DieselCommentRepository, DieselFollowRepository, DieselGroupRepository,
    DieselLoginService, DieselPostRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Build every driving port from one shared pool.
///
/// Each service is shared between its query and command roles.
fn build_http_ports(pool: &DbPool) -> HttpStatePorts {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let group_repo = Arc::new(DieselGroupRepository::new(pool.clone()));
    let post_repo = Arc::new(DieselPostRepository::new(pool.clone()));
    let comment_repo = Arc::new(DieselCommentRepository::new(pool.clone()));
    let follow_repo = Arc::new(DieselFollowRepository::new(pool.clone()));

    let groups = Arc::new(GroupsService::new(group_repo.clone()));
    let posts = Arc::new(PostsService::new(post_repo.clone(), group_repo));
    let comments = Arc::new(CommentsService::new(post_repo, comment_repo));
    let follows = Arc::new(FollowsService::new(users, follow_repo));

    HttpStatePorts {
        login: Arc::new(DieselLoginService::new(pool.clone())),
        groups,
        posts_query: posts.clone(),
        posts,
        comments_query: comments.clone(),
        comments,
        follows_query: follows.clone(),
        follows,
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::with_max_page_limit(
        build_http_ports(&config.db_pool),
        config.max_page_limit,
    ))
}
