//! In-memory implementation of every driven port.
//!
//! One [`MemoryStore`] backs all repositories so cross-entity rules
//! (cascading comment deletes, author lookups) behave like the database.

use std::sync::Mutex;

use async_trait::async_trait;
use blog_api::domain::ports::{
    CommentRepository, CommentRepositoryError, FollowRepository, FollowRepositoryError,
    GroupRepository, GroupRepositoryError, LoginService, PostRepository, PostRepositoryError,
    UserRepository, UserRepositoryError,
};
use blog_api::domain::{
    Comment, CommentId, Error, Follow, Group, GroupId, LoginCredentials, NewComment, NewPost,
    Post, PostChanges, PostId, Slug, User, UserId, Username,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use pagination::PageRequest;

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    groups: Vec<Group>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    follows: Vec<(UserId, UserId)>,
    next_id: i64,
    ticks: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Strictly increasing timestamps keep creation order observable.
    fn now(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        let epoch = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("fixed epoch");
        epoch + Duration::seconds(self.ticks)
    }

    fn user(&self, id: &UserId) -> Option<User> {
        self.users
            .iter()
            .find(|(user, _)| user.id() == id)
            .map(|(user, _)| user.clone())
    }
}

/// Shared in-memory store; wrap in an `Arc` and hand to every service.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("store lock")
    }

    /// Register a user that can log in with `password`.
    pub fn add_user(&self, username: &str, password: &str) -> User {
        let user = User::new(
            UserId::random(),
            Username::new(username).expect("valid username"),
        );
        self.lock().users.push((user.clone(), password.to_owned()));
        user
    }

    /// Drop an account while its sessions stay valid.
    pub fn remove_user(&self, username: &str) {
        self.lock()
            .users
            .retain(|(user, _)| user.username().as_ref() != username);
    }

    pub fn add_group(&self, title: &str, slug: &str) -> Group {
        let mut state = self.lock();
        let group = Group {
            id: GroupId::new(state.next_id()),
            title: title.to_owned(),
            slug: Slug::new(slug).expect("valid slug"),
            description: format!("{title} discussions"),
        };
        state.groups.push(group.clone());
        group
    }

    pub fn add_post(&self, author: &User, text: &str) -> Post {
        let mut state = self.lock();
        let post = Post {
            id: PostId::new(state.next_id()),
            text: text.to_owned(),
            pub_date: state.now(),
            author: author.clone(),
            image: None,
            group: None,
        };
        state.posts.push(post.clone());
        post
    }

    pub fn add_follow(&self, follower: &User, following: &User) {
        self.lock()
            .follows
            .push((follower.id().clone(), following.id().clone()));
    }

    pub fn post(&self, id: PostId) -> Option<Post> {
        self.lock().posts.iter().find(|post| post.id == id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    pub fn follow_count(&self) -> usize {
        self.lock().follows.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.lock().user(id))
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|(user, _)| user.username() == username)
            .map(|(user, _)| user.clone()))
    }
}

#[async_trait]
impl LoginService for MemoryStore {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        self.lock()
            .users
            .iter()
            .find(|(user, password)| {
                user.username().as_ref() == credentials.username()
                    && password == credentials.password()
            })
            .map(|(user, _)| user.id().clone())
            .ok_or_else(|| Error::unauthorized("invalid credentials"))
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Group>, GroupRepositoryError> {
        Ok(self.lock().groups.clone())
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, GroupRepositoryError> {
        Ok(self.lock().groups.iter().find(|g| g.id == id).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn count(&self) -> Result<usize, PostRepositoryError> {
        Ok(self.lock().posts.len())
    }

    async fn list(&self, window: Option<PageRequest>) -> Result<Vec<Post>, PostRepositoryError> {
        let posts = self.lock().posts.clone();
        Ok(match window {
            Some(window) => posts
                .into_iter()
                .skip(window.offset())
                .take(window.limit())
                .collect(),
            None => posts,
        })
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostRepositoryError> {
        Ok(self.post(id))
    }

    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        let mut state = self.lock();
        let author = state
            .user(&post.author)
            .ok_or_else(|| PostRepositoryError::unknown_author())?;
        let stored = Post {
            id: PostId::new(state.next_id()),
            text: post.text.clone(),
            pub_date: state.now(),
            author,
            image: post.image.clone(),
            group: post.group,
        };
        state.posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: PostId,
        changes: &PostChanges,
    ) -> Result<Option<Post>, PostRepositoryError> {
        let mut state = self.lock();
        let Some(post) = state.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        if let Some(text) = &changes.text {
            post.text.clone_from(text);
        }
        if let Some(image) = &changes.image {
            post.image.clone_from(image);
        }
        if let Some(group) = changes.group {
            post.group = group;
        }
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, PostRepositoryError> {
        let mut state = self.lock();
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);
        state.comments.retain(|comment| comment.post != id);
        Ok(state.posts.len() < before)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list_for_post(&self, post: PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(self
            .lock()
            .comments
            .iter()
            .filter(|comment| comment.post == post)
            .cloned()
            .collect())
    }

    async fn find_for_post(
        &self,
        post: PostId,
        id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self
            .lock()
            .comments
            .iter()
            .find(|comment| comment.post == post && comment.id == id)
            .cloned())
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut state = self.lock();
        let author = state
            .user(&comment.author)
            .ok_or_else(|| CommentRepositoryError::unknown_author())?;
        let stored = Comment {
            id: CommentId::new(state.next_id()),
            post: comment.post,
            author,
            text: comment.text.clone(),
            created: state.now(),
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn update_text(
        &self,
        id: CommentId,
        text: &str,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        let mut state = self.lock();
        Ok(state
            .comments
            .iter_mut()
            .find(|comment| comment.id == id)
            .map(|comment| {
                text.clone_into(&mut comment.text);
                comment.clone()
            }))
    }

    async fn delete(&self, id: CommentId) -> Result<bool, CommentRepositoryError> {
        let mut state = self.lock();
        let before = state.comments.len();
        state.comments.retain(|comment| comment.id != id);
        Ok(state.comments.len() < before)
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn list_for_follower(
        &self,
        follower: &UserId,
        following: Option<Username>,
    ) -> Result<Vec<Follow>, FollowRepositoryError> {
        let state = self.lock();
        let Some(user) = state.user(follower) else {
            return Ok(Vec::new());
        };
        Ok(state
            .follows
            .iter()
            .filter(|(from, _)| from == follower)
            .filter_map(|(_, to)| state.user(to))
            .filter(|target| following.as_ref().is_none_or(|name| target.username() == name))
            .map(|target| Follow {
                user: user.clone(),
                following: target,
            })
            .collect())
    }

    async fn exists(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<bool, FollowRepositoryError> {
        Ok(self
            .lock()
            .follows
            .iter()
            .any(|(from, to)| from == follower && to == following))
    }

    async fn create(
        &self,
        follower: &UserId,
        following: &UserId,
    ) -> Result<(), FollowRepositoryError> {
        let mut state = self.lock();
        if state
            .follows
            .iter()
            .any(|(from, to)| from == follower && to == following)
        {
            return Err(FollowRepositoryError::duplicate());
        }
        state.follows.push((follower.clone(), following.clone()));
        Ok(())
    }
}
