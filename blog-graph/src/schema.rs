//! GraphQL schema over the entity store.
//!
//! The object types below only adapt arguments and results; all lookups are
//! delegated to [`crate::resolvers`].
use std::sync::Arc;

use async_graphql::Context;
use async_graphql::EmptySubscription;
use async_graphql::ErrorExtensions;
use async_graphql::Object;
use async_graphql::Result;
use async_graphql::Schema;
use async_graphql::ID;

use crate::resolvers::fields;
use crate::resolvers::mutation;
use crate::resolvers::mutation::CreateCommentInput;
use crate::resolvers::mutation::CreatePostInput;
use crate::resolvers::mutation::CreateUserInput;
use crate::resolvers::query;
use crate::store::Comment;
use crate::store::EntityStore;
use crate::store::Post;
use crate::store::User;

/// The executable schema served over HTTP.
pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema, attaching `store` as the data every resolver reads from.
pub fn build_schema(store: Arc<EntityStore>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// The schema in SDL form.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<EntityStore>> {
    ctx.data::<Arc<EntityStore>>()
}

/*
  type Query {
    users(query: String): [User!]!
    posts(query: String): [Post!]!
    comments: [Comment!]!
    me: User!
    post: Post!
  }
*/
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn users(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "query")] filter: Option<String>,
    ) -> Result<Vec<User>> {
        Ok(query::users(store(ctx)?, filter.as_deref()))
    }

    async fn posts(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "query")] filter: Option<String>,
    ) -> Result<Vec<Post>> {
        Ok(query::posts(store(ctx)?, filter.as_deref()))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        Ok(query::comments(store(ctx)?))
    }

    async fn me(&self) -> User {
        query::me()
    }

    async fn post(&self) -> Post {
        query::post()
    }
}

/*
  type Mutation {
    createUser(data: CreateUserInput!): User!
    createPost(data: CreatePostInput!): Post!
    createComment(data: CreateCommentInput!): Comment!
  }
*/
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Result<User> {
        mutation::create_user(store(ctx)?, data).map_err(|error| error.extend())
    }

    async fn create_post(&self, ctx: &Context<'_>, data: CreatePostInput) -> Result<Post> {
        mutation::create_post(store(ctx)?, data).map_err(|error| error.extend())
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentInput,
    ) -> Result<Comment> {
        mutation::create_comment(store(ctx)?, data).map_err(|error| error.extend())
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID::from(self.id.as_str())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn age(&self) -> Option<i32> {
        self.age
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        Ok(fields::user_posts(store(ctx)?, self))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        Ok(fields::user_comments(store(ctx)?, self))
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID::from(self.id.as_str())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn body(&self) -> &str {
        &self.body
    }

    async fn published(&self) -> bool {
        self.published
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        fields::post_author(store(ctx)?, self).map_err(|error| error.extend())
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        Ok(fields::post_comments(store(ctx)?, self))
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID::from(self.id.as_str())
    }

    async fn text(&self) -> &str {
        &self.text
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        fields::comment_author(store(ctx)?, self).map_err(|error| error.extend())
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        fields::comment_post(store(ctx)?, self).map_err(|error| error.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_exposes_the_declared_types() {
        let sdl = sdl();
        for fragment in [
            "users(query: String): [User!]!",
            "posts(query: String): [Post!]!",
            "comments: [Comment!]!",
            "me: User!",
            "createUser(data: CreateUserInput!): User!",
            "createComment(data: CreateCommentInput!): Comment!",
            "author: User!",
            "age: Int",
        ] {
            assert!(sdl.contains(fragment), "missing `{fragment}` in:\n{sdl}");
        }
    }
}
