//! Demo data loaded by [`super::EntityStore::seeded`].
use super::Comment;
use super::Post;
use super::User;

pub(super) fn users() -> Vec<User> {
    vec![
        User::builder()
            .id("1")
            .name("Steve")
            .email("steve.jobs@apple.com")
            .age(55)
            .build(),
        User::builder()
            .id("2")
            .name("Mark")
            .email("mark.zuckerberg@facebook.com")
            .build(),
        User::builder()
            .id("3")
            .name("Elon")
            .email("elon.musk@tesla.com")
            .build(),
    ]
}

pub(super) fn posts() -> Vec<Post> {
    vec![
        Post::builder()
            .id("10")
            .title("GraphQL 101")
            .body("Welcome to GraphQL course")
            .published(true)
            .author("1")
            .build(),
        Post::builder()
            .id("11")
            .title("Node.js 101")
            .body("Welcome to Node.js course")
            .published(true)
            .author("1")
            .build(),
        Post::builder()
            .id("12")
            .title("Angular 101")
            .published(false)
            .author("2")
            .build(),
    ]
}

// 105 comments on an unpublished post; seed data is not validated.
pub(super) fn comments() -> Vec<Comment> {
    vec![
        Comment::builder()
            .id("102")
            .text("She's got a smile that it seems to me...Reminds me of childhood memories..")
            .author("1")
            .post("10")
            .build(),
        Comment::builder()
            .id("103")
            .text("Maybe I'm too busy being yours to fall for somebody new...")
            .author("1")
            .post("10")
            .build(),
        Comment::builder()
            .id("104")
            .text("I used to love her...But I had to kill her...")
            .author("2")
            .post("11")
            .build(),
        Comment::builder()
            .id("105")
            .text("But life still goes on...I want to break free...")
            .author("3")
            .post("12")
            .build(),
    ]
}
