use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::error::BrambleError;
use crate::model;

use super::schema::store;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: ID(u.id),
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}

#[ComplexObject]
impl User {
    /// Posts authored by this user.
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let store = store(ctx).read().await;
        Ok(store
            .posts_by_author(self.id.as_str())
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Comments written by this user, on any post.
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = store(ctx).read().await;
        Ok(store
            .comments_by_author(self.id.as_str())
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub published: bool,

    // Raw foreign key; the `author` field below resolves it to a User.
    #[graphql(skip)]
    pub author_id: String,
}

impl From<model::Post> for Post {
    fn from(p: model::Post) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            body: p.body,
            published: p.published,
            author_id: p.author,
        }
    }
}

#[ComplexObject]
impl Post {
    /// The user who wrote this post. Creation-time validation guarantees the
    /// reference; a miss still surfaces as an error rather than a panic.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = store(ctx).read().await;
        let user = store
            .user(&self.author_id)
            .ok_or(BrambleError::UserNotFound)?;
        Ok(user.clone().into())
    }

    /// Comments sitting on this post.
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = store(ctx).read().await;
        Ok(store
            .comments_on_post(self.id.as_str())
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Comment {
    pub id: ID,
    pub text: String,
    pub author_id: ID,
    pub post_id: ID,
}

impl From<model::Comment> for Comment {
    fn from(c: model::Comment) -> Self {
        Self {
            id: ID(c.id),
            text: c.text,
            author_id: ID(c.author_id),
            post_id: ID(c.post_id),
        }
    }
}

#[ComplexObject]
impl Comment {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let store = store(ctx).read().await;
        let user = store
            .user(self.author_id.as_str())
            .ok_or(BrambleError::UserNotFound)?;
        Ok(user.clone().into())
    }

    async fn post(&self, ctx: &Context<'_>) -> async_graphql::Result<Post> {
        let store = store(ctx).read().await;
        let post = store
            .post(self.post_id.as_str())
            .ok_or(BrambleError::PostNotFound)?;
        Ok(post.clone().into())
    }
}
