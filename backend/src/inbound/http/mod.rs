//! HTTP inbound adapter exposing REST endpoints.

pub mod comments;
pub mod error;
pub mod follows;
pub mod groups;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`, with JSON and query parse
/// failures reported in the domain error shape.
///
/// Callers supply the [`state::HttpState`] as app data and wrap the app in a
/// session middleware.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .service(users::login)
            .service(users::logout)
            .service(groups::list_groups)
            .service(groups::get_group)
            .service(posts::list_posts)
            .service(posts::create_post)
            .service(posts::get_post)
            .service(posts::update_post)
            .service(posts::patch_post)
            .service(posts::delete_post)
            .service(comments::list_comments)
            .service(comments::create_comment)
            .service(comments::get_comment)
            .service(comments::update_comment)
            .service(comments::patch_comment)
            .service(comments::delete_comment)
            .service(follows::list_follows)
            .service(follows::create_follow),
    );
}
