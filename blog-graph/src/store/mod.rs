//! In-memory entity store.
//!
//! Records hold foreign keys only; relations are derived by scanning. The
//! collections sit behind a single [`RwLock`]: any number of readers may scan
//! concurrently while a writer holds the lock for the whole of its
//! validate-then-append sequence.
mod model;
mod seed;

use parking_lot::RwLock;
use parking_lot::RwLockReadGuard;
use parking_lot::RwLockWriteGuard;

pub use self::model::Comment;
pub use self::model::Post;
pub use self::model::User;

/// The three collections, in insertion order.
///
/// Reachable through [`EntityStore::read`] for scans, and through the
/// crate-private write guard for appends. There is no way to update or
/// remove a record.
#[derive(Debug, Default)]
pub struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Collections {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub(crate) fn append_user(&mut self, user: User) {
        debug_assert!(self.user(&user.id).is_none(), "duplicate user id");
        self.users.push(user);
    }

    pub(crate) fn append_post(&mut self, post: Post) {
        debug_assert!(self.post(&post.id).is_none(), "duplicate post id");
        self.posts.push(post);
    }

    pub(crate) fn append_comment(&mut self, comment: Comment) {
        debug_assert!(self.comment(&comment.id).is_none(), "duplicate comment id");
        self.comments.push(comment);
    }
}

/// Shared, append-only store of users, posts and comments.
#[derive(Debug, Default)]
pub struct EntityStore {
    collections: RwLock<Collections>,
}

#[buildstructor::buildstructor]
impl EntityStore {
    /// Builds a store pre-populated with the given records.
    ///
    /// Records are taken as-is: referential checks only apply to writes
    /// made through the mutation resolvers.
    #[builder]
    pub fn new(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            collections: RwLock::new(Collections {
                users,
                posts,
                comments,
            }),
        }
    }

    /// Builds a store holding the demo users, posts and comments.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::posts(), seed::comments())
    }

    /// Takes a consistent view of the collections for scanning.
    ///
    /// Writers are blocked while the guard is alive, so keep it short-lived.
    pub fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write()
    }

    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.read().posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.read().comments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_an_empty_store() {
        for store in [EntityStore::default(), EntityStore::builder().build()] {
            assert_eq!(store.user_count(), 0);
            assert_eq!(store.post_count(), 0);
            assert_eq!(store.comment_count(), 0);
        }
    }

    #[test]
    fn it_looks_up_records_by_id() {
        let store = EntityStore::seeded();
        let collections = store.read();
        assert_eq!(collections.user("2").map(|u| u.name.as_str()), Some("Mark"));
        assert_eq!(
            collections.post("12").map(|p| p.published),
            Some(false)
        );
        assert_eq!(collections.comment("104").map(|c| c.post.as_str()), Some("11"));
        assert!(collections.user("404").is_none());
    }

    #[test]
    fn it_appends_in_insertion_order() {
        let store = EntityStore::builder()
            .user(User::builder().id("a").name("Ann").email("ann@x.com").build())
            .build();
        store.write().append_user(
            User::builder()
                .id("b")
                .name("Bob")
                .email("bob@x.com")
                .age(30)
                .build(),
        );
        let ids: Vec<_> = store.read().users().iter().map(|u| u.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
