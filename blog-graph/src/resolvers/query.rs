//! Root query resolvers.
use crate::store::Comment;
use crate::store::EntityStore;
use crate::store::Post;
use crate::store::User;

/// Id of the [`me`] placeholder.
pub const ME_ID: &str = "123abc";
/// Id of the [`post`] placeholder.
pub const PLACEHOLDER_POST_ID: &str = "q2ewqw";

/// Lists users, keeping those whose name contains `filter` when one is given.
pub fn users(store: &EntityStore, filter: Option<&str>) -> Vec<User> {
    let collections = store.read();
    match Filter::new(filter) {
        None => collections.users().to_vec(),
        Some(filter) => collections
            .users()
            .iter()
            .filter(|user| filter.matches(&user.name))
            .cloned()
            .collect(),
    }
}

/// Lists posts, keeping those whose title or body contains `filter` when one
/// is given.
///
/// Unpublished posts are listed too.
pub fn posts(store: &EntityStore, filter: Option<&str>) -> Vec<Post> {
    let collections = store.read();
    match Filter::new(filter) {
        None => collections.posts().to_vec(),
        Some(filter) => collections
            .posts()
            .iter()
            .filter(|post| filter.matches(&post.title) || filter.matches(&post.body))
            .cloned()
            .collect(),
    }
}

pub fn comments(store: &EntityStore) -> Vec<Comment> {
    store.read().comments().to_vec()
}

/// A fixed user that is not backed by the store.
pub fn me() -> User {
    User::builder()
        .id(ME_ID)
        .name("John")
        .email("john@doe.com")
        .build()
}

/// A fixed post that is not backed by the store.
///
/// Its author is the [`me`] placeholder, which the store does not know about.
pub fn post() -> Post {
    Post::builder()
        .id(PLACEHOLDER_POST_ID)
        .title("GraphQL 101")
        .body("Welcome")
        .published(true)
        .author(ME_ID)
        .build()
}

/// Case-insensitive substring match.
struct Filter {
    needle: String,
}

impl Filter {
    /// An absent or empty filter matches everything and is reported as `None`.
    fn new(filter: Option<&str>) -> Option<Self> {
        filter.filter(|f| !f.is_empty()).map(|f| Self {
            needle: f.to_lowercase(),
        })
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}
