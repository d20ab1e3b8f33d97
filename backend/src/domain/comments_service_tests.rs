//! Tests for the comment service and parent resolution.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockCommentRepository, MockPostRepository};
use crate::domain::service_test_helpers::{alice, bob, comment_by, post_by};
use crate::domain::{User, UserId};

type Service = CommentsService<MockPostRepository, MockCommentRepository>;

fn make_service(posts: MockPostRepository, comments: MockCommentRepository) -> Service {
    CommentsService::new(Arc::new(posts), Arc::new(comments))
}

fn actor(user: &User) -> Actor {
    Actor::Authenticated(user.id().clone())
}

fn posts_with(id: i64) -> MockPostRepository {
    let mut posts = MockPostRepository::new();
    posts
        .expect_find_by_id()
        .withf(move |post_id| *post_id == PostId::new(id))
        .returning(move |_| Ok(Some(post_by(id, alice()))));
    posts
}

fn no_posts() -> MockPostRepository {
    let mut posts = MockPostRepository::new();
    posts.expect_find_by_id().returning(|_| Ok(None));
    posts
}

#[tokio::test]
async fn listing_under_missing_post_is_not_found() {
    let service = make_service(no_posts(), MockCommentRepository::new());

    let err = service
        .list_comments(&Actor::Anonymous, PostId::new(999))
        .await
        .expect_err("missing parent");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "post not found");
}

#[tokio::test]
async fn listing_is_scoped_to_the_parent() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_list_for_post()
        .withf(|post| *post == PostId::new(7))
        .times(1)
        .return_once(|_| Ok(vec![comment_by(1, 7, bob())]));
    let service = make_service(posts_with(7), comments);

    let listed = service
        .list_comments(&Actor::Anonymous, PostId::new(7))
        .await
        .expect("list");

    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|c| c.post == PostId::new(7)));
}

#[tokio::test]
async fn create_under_missing_post_is_not_found_and_writes_nothing() {
    let service = make_service(no_posts(), MockCommentRepository::new());

    let err = service
        .create_comment(CreateCommentRequest {
            actor: actor(&alice()),
            post_id: PostId::new(999),
            text: Some("hello".to_owned()),
        })
        .await
        .expect_err("missing parent");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn parent_is_resolved_before_payload_validation() {
    let service = make_service(no_posts(), MockCommentRepository::new());

    let err = service
        .create_comment(CreateCommentRequest {
            actor: actor(&alice()),
            post_id: PostId::new(999),
            text: None,
        })
        .await
        .expect_err("missing parent");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn create_injects_parent_and_author() {
    let mut comments = MockCommentRepository::new();
    let bob_id: UserId = bob().id().clone();
    comments
        .expect_create()
        .withf(move |new| new.post == PostId::new(7) && new.author == bob_id)
        .times(1)
        .return_once(|new| {
            let mut comment = comment_by(3, new.post.get(), bob());
            comment.text = new.text.clone();
            Ok(comment)
        });
    let service = make_service(posts_with(7), comments);

    let comment = service
        .create_comment(CreateCommentRequest {
            actor: actor(&bob()),
            post_id: PostId::new(7),
            text: Some("nice".to_owned()),
        })
        .await
        .expect("create");

    assert_eq!(comment.post, PostId::new(7));
    assert_eq!(comment.author.username().as_ref(), "bob");
}

#[tokio::test]
async fn create_by_vanished_session_user_is_unauthorised() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_create()
        .times(1)
        .return_once(|_| Err(CommentRepositoryError::unknown_author()));
    let service = make_service(posts_with(7), comments);

    let err = service
        .create_comment(CreateCommentRequest {
            actor: actor(&bob()),
            post_id: PostId::new(7),
            text: Some("still here?".to_owned()),
        })
        .await
        .expect_err("author gone");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[tokio::test]
async fn anonymous_create_is_unauthorised_before_parent_lookup() {
    let service = make_service(MockPostRepository::new(), MockCommentRepository::new());

    let err = service
        .create_comment(CreateCommentRequest {
            actor: Actor::Anonymous,
            post_id: PostId::new(1),
            text: Some("hi".to_owned()),
        })
        .await
        .expect_err("anonymous");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
}

#[tokio::test]
async fn comment_from_another_post_is_not_found() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_for_post()
        .withf(|post, id| *post == PostId::new(7) && *id == CommentId::new(5))
        .return_once(|_, _| Ok(None));
    let service = make_service(posts_with(7), comments);

    let err = service
        .get_comment(&Actor::Anonymous, PostId::new(7), CommentId::new(5))
        .await
        .expect_err("scoped lookup");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "comment not found");
}

#[rstest]
#[case(UpdateMode::Full)]
#[case(UpdateMode::Partial)]
#[tokio::test]
async fn non_author_cannot_update(#[case] mode: UpdateMode) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_for_post()
        .return_once(|_, _| Ok(Some(comment_by(5, 7, alice()))));
    let service = make_service(posts_with(7), comments);

    let err = service
        .update_comment(UpdateCommentRequest {
            actor: actor(&bob()),
            post_id: PostId::new(7),
            comment_id: CommentId::new(5),
            mode,
            text: Some("hijack".to_owned()),
        })
        .await
        .expect_err("forbidden");

    assert_eq!(err.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn author_can_update_text() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_for_post()
        .return_once(|_, _| Ok(Some(comment_by(5, 7, alice()))));
    comments
        .expect_update_text()
        .withf(|id, text| *id == CommentId::new(5) && text == "edited")
        .return_once(|_, text| {
            let mut comment = comment_by(5, 7, alice());
            comment.text = text.to_owned();
            Ok(Some(comment))
        });
    let service = make_service(posts_with(7), comments);

    let updated = service
        .update_comment(UpdateCommentRequest {
            actor: actor(&alice()),
            post_id: PostId::new(7),
            comment_id: CommentId::new(5),
            mode: UpdateMode::Full,
            text: Some("edited".to_owned()),
        })
        .await
        .expect("update");

    assert_eq!(updated.text, "edited");
}

#[tokio::test]
async fn empty_partial_update_returns_comment_unchanged() {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_for_post()
        .return_once(|_, _| Ok(Some(comment_by(5, 7, alice()))));
    let service = make_service(posts_with(7), comments);

    let unchanged = service
        .update_comment(UpdateCommentRequest {
            actor: actor(&alice()),
            post_id: PostId::new(7),
            comment_id: CommentId::new(5),
            mode: UpdateMode::Partial,
            text: None,
        })
        .await
        .expect("no-op update");

    assert_eq!(unchanged.text, "comment 5");
}

#[rstest]
#[case(alice(), None)]
#[case(bob(), Some(ErrorCode::Forbidden))]
#[tokio::test]
async fn delete_is_author_only(#[case] caller: User, #[case] expected: Option<ErrorCode>) {
    let mut comments = MockCommentRepository::new();
    comments
        .expect_find_for_post()
        .return_once(|_, _| Ok(Some(comment_by(5, 7, alice()))));
    if expected.is_none() {
        comments.expect_delete().times(1).return_once(|_| Ok(true));
    }
    let service = make_service(posts_with(7), comments);

    let result = service
        .delete_comment(DeleteCommentRequest {
            actor: actor(&caller),
            post_id: PostId::new(7),
            comment_id: CommentId::new(5),
        })
        .await;

    assert_eq!(result.err().map(|err| err.code()), expected);
}
