//! Relation resolvers for nested fields.
//!
//! Relations are derived by foreign-key equality on every call. List
//! relations are empty when nothing matches. Single relations are mandatory,
//! so a key that does not resolve is reported as an [`IntegrityError`].
use crate::error::IntegrityError;
use crate::store::Comment;
use crate::store::EntityStore;
use crate::store::Post;
use crate::store::User;

/// Posts written by `user`.
pub fn user_posts(store: &EntityStore, user: &User) -> Vec<Post> {
    store
        .read()
        .posts()
        .iter()
        .filter(|post| post.author == user.id)
        .cloned()
        .collect()
}

/// Comments written by `user`.
pub fn user_comments(store: &EntityStore, user: &User) -> Vec<Comment> {
    store
        .read()
        .comments()
        .iter()
        .filter(|comment| comment.author == user.id)
        .cloned()
        .collect()
}

/// The author of `post`; an error when the author is not in the store.
pub fn post_author(store: &EntityStore, post: &Post) -> Result<User, IntegrityError> {
    store
        .read()
        .user(&post.author)
        .cloned()
        .ok_or_else(|| dangling("Post", "author", "User", &post.author))
}

/// Comments left on `post`.
pub fn post_comments(store: &EntityStore, post: &Post) -> Vec<Comment> {
    store
        .read()
        .comments()
        .iter()
        .filter(|comment| comment.post == post.id)
        .cloned()
        .collect()
}

/// The author of `comment`; an error when the author is not in the store.
pub fn comment_author(store: &EntityStore, comment: &Comment) -> Result<User, IntegrityError> {
    store
        .read()
        .user(&comment.author)
        .cloned()
        .ok_or_else(|| dangling("Comment", "author", "User", &comment.author))
}

/// The post `comment` was left on; an error when the post is not in the store.
pub fn comment_post(store: &EntityStore, comment: &Comment) -> Result<Post, IntegrityError> {
    store
        .read()
        .post(&comment.post)
        .cloned()
        .ok_or_else(|| dangling("Comment", "post", "Post", &comment.post))
}

fn dangling(
    entity: &'static str,
    field: &'static str,
    target: &'static str,
    id: &str,
) -> IntegrityError {
    let error = IntegrityError::DanglingReference {
        entity,
        field,
        target,
        id: id.to_string(),
    };
    tracing::error!(%error, "relation could not be resolved");
    error
}
