use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};
use tokio::sync::RwLock;

use crate::store::Store;

use super::types::*;

pub type BrambleSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct AppState {
    pub store: RwLock<Store>,
}

pub fn build_schema(store: Store) -> BrambleSchema {
    let state = Arc::new(AppState {
        store: RwLock::new(store),
    });

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> &'a RwLock<Store> {
    let state = ctx.data::<Arc<AppState>>().unwrap();
    &state.store
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List users, optionally filtered by a case-insensitive name substring
    async fn users(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<User>> {
        let store = store(ctx).read().await;
        Ok(store
            .users(query.as_deref())
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// List posts, optionally filtered by a case-insensitive title substring
    async fn posts(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> async_graphql::Result<Vec<Post>> {
        let store = store(ctx).read().await;
        Ok(store
            .posts(query.as_deref())
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// List all comments
    async fn comments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Comment>> {
        let store = store(ctx).read().await;
        Ok(store.comments().into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new user; the email must not already be in use
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> async_graphql::Result<User> {
        let mut store = store(ctx).write().await;
        let user = store.create_user(name, email, age)?;
        tracing::debug!(id = %user.id, "created user");
        Ok(user.into())
    }

    /// Create a new post authored by an existing user
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        published: bool,
        author: ID,
    ) -> async_graphql::Result<Post> {
        let mut store = store(ctx).write().await;
        let post = store.create_post(title, body, published, author.0)?;
        tracing::debug!(id = %post.id, "created post");
        Ok(post.into())
    }

    /// Create a comment on a published post
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        author_id: ID,
        post_id: ID,
    ) -> async_graphql::Result<Comment> {
        let mut store = store(ctx).write().await;
        let comment = store.create_comment(text, author_id.0, post_id.0)?;
        tracing::debug!(id = %comment.id, "created comment");
        Ok(comment.into())
    }

    /// Delete a user, cascading to their posts and comments
    async fn delete_user(&self, ctx: &Context<'_>, user_id: ID) -> async_graphql::Result<User> {
        let mut store = store(ctx).write().await;
        let user = store.delete_user(&user_id)?;
        tracing::debug!(id = %user.id, "deleted user");
        Ok(user.into())
    }

    /// Delete a post, cascading to its comments
    async fn delete_post(&self, ctx: &Context<'_>, post_id: ID) -> async_graphql::Result<Post> {
        let mut store = store(ctx).write().await;
        let post = store.delete_post(&post_id)?;
        tracing::debug!(id = %post.id, "deleted post");
        Ok(post.into())
    }

    /// Delete a comment; only its author may do so
    async fn delete_comment(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        comment_id: ID,
    ) -> async_graphql::Result<Comment> {
        let mut store = store(ctx).write().await;
        let comment = store.delete_comment(&user_id, &comment_id)?;
        tracing::debug!(id = %comment.id, "deleted comment");
        Ok(comment.into())
    }
}
