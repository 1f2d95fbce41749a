//! Root mutation resolvers.
//!
//! Each mutation validates, mints an id, appends and returns the new record
//! while holding the store's write lock, so no other mutation can interleave
//! between the check and the append.
use async_graphql::InputObject;
use async_graphql::ID;
use uuid::Uuid;

use crate::error::MutationError;
use crate::store::Comment;
use crate::store::EntityStore;
use crate::store::Post;
use crate::store::User;

#[derive(Clone, Debug, InputObject)]
pub struct CreateUserInput {
    /// Expected to be non-empty. Only email uniqueness is checked here.
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(Clone, Debug, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Id of an existing user.
    pub author: ID,
}

#[derive(Clone, Debug, InputObject)]
pub struct CreateCommentInput {
    pub text: String,
    /// Id of an existing user.
    pub author: ID,
    /// Id of an existing, published post.
    pub post: ID,
}

/// Creates a user.
///
/// Fails with [`MutationError::Conflict`] when the email is already taken.
pub fn create_user(store: &EntityStore, data: CreateUserInput) -> Result<User, MutationError> {
    let mut collections = store.write();
    if collections.users().iter().any(|user| user.email == data.email) {
        tracing::info!(email = %data.email, "rejected createUser: email taken");
        return Err(MutationError::email_taken());
    }

    let user = User {
        id: new_id(),
        name: data.name,
        email: data.email,
        age: data.age,
    };
    collections.append_user(user.clone());
    tracing::debug!(id = %user.id, "created user");
    Ok(user)
}

/// Creates a post.
///
/// Fails with [`MutationError::NotFound`] when the author does not exist.
pub fn create_post(store: &EntityStore, data: CreatePostInput) -> Result<Post, MutationError> {
    let mut collections = store.write();
    if collections.user(&data.author).is_none() {
        tracing::info!(author = %data.author.as_str(), "rejected createPost: author does not exist");
        return Err(MutationError::author_not_found());
    }

    let post = Post {
        id: new_id(),
        title: data.title,
        body: data.body,
        published: data.published,
        author: data.author.0,
    };
    collections.append_post(post.clone());
    tracing::debug!(id = %post.id, author = %post.author, "created post");
    Ok(post)
}

/// Creates a comment on a published post.
///
/// A missing author and a missing or unpublished post are reported as the
/// same [`MutationError::NotFound`].
pub fn create_comment(
    store: &EntityStore,
    data: CreateCommentInput,
) -> Result<Comment, MutationError> {
    let mut collections = store.write();
    let author_exists = collections.user(&data.author).is_some();
    let post_is_published = collections
        .post(&data.post)
        .is_some_and(|post| post.published);
    if !author_exists || !post_is_published {
        tracing::info!(
            author = %data.author.as_str(),
            post = %data.post.as_str(),
            author_exists,
            post_is_published,
            "rejected createComment: author or post invalid"
        );
        return Err(MutationError::author_or_post_invalid());
    }

    let comment = Comment {
        id: new_id(),
        text: data.text,
        author: data.author.0,
        post: data.post.0,
    };
    collections.append_comment(comment.clone());
    tracing::debug!(id = %comment.id, post = %comment.post, "created comment");
    Ok(comment)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
