/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// A post, pointing at its author by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Id of the authoring [`User`].
    pub author: String,
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    /// Id of the authoring [`User`].
    pub author: String,
    /// Id of the commented [`Post`].
    pub post: String,
}

#[buildstructor::buildstructor]
impl User {
    #[builder]
    pub fn new(id: String, name: String, email: String, age: Option<i32>) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }
}

#[buildstructor::buildstructor]
impl Post {
    #[builder]
    pub fn new(
        id: String,
        title: String,
        body: Option<String>,
        published: bool,
        author: String,
    ) -> Self {
        Self {
            id,
            title,
            body: body.unwrap_or_default(),
            published,
            author,
        }
    }
}

#[buildstructor::buildstructor]
impl Comment {
    #[builder]
    pub fn new(id: String, text: String, author: String, post: String) -> Self {
        Self {
            id,
            text,
            author,
            post,
        }
    }
}
