//! The in-memory store and its relational integrity rules.
//!
//! All domain logic lives here: referential validation on create, cascading
//! deletes, the ownership check on comment deletion. The GraphQL layer is a
//! thin shell over these methods.
//!
//! Collections are plain `Vec`s kept in insertion order; every lookup is a
//! linear scan, which is fine at the dataset sizes this serves.

use crate::error::{BrambleError, Result};
use crate::model::{Comment, Post, User};

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const ID_LENGTH: usize = 12;

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the sample dataset used by `bramble query`
    /// and the test suite.
    pub fn with_fixtures() -> Self {
        let users = vec![
            User::new(
                "1".into(),
                "Jesús".into(),
                "jesus@gmail.com".into(),
                Some(33),
            ),
            User::new(
                "2".into(),
                "Keisa".into(),
                "keisa@gmail.com".into(),
                Some(33),
            ),
            User::new(
                "3".into(),
                "Geraldine".into(),
                "geraldine@gmail.com".into(),
                Some(32),
            ),
        ];

        let posts = vec![
            Post::new(
                "1".into(),
                "Advanced ReactJS".into(),
                "Contenido del post 1".into(),
                true,
                "2".into(),
            ),
            Post::new(
                "2".into(),
                "Learning Backend Web Development".into(),
                "Contenido del post 2".into(),
                false,
                "1".into(),
            ),
            Post::new(
                "3".into(),
                "GraphQL from the Ground Up".into(),
                "Contenido del post 3".into(),
                true,
                "2".into(),
            ),
        ];

        let comments = vec![
            Comment::new(
                "14".into(),
                "Excelent post, very useful information.".into(),
                "1".into(),
                "3".into(),
            ),
            Comment::new(
                "26".into(),
                "This post is really helpful.".into(),
                "2".into(),
                "1".into(),
            ),
            Comment::new(
                "39".into(),
                "This post is ok, but could be better.".into(),
                "3".into(),
                "2".into(),
            ),
            Comment::new(
                "45".into(),
                "Good explanations! May be better if adding more on SSR and Security, tho."
                    .into(),
                "2".into(),
                "3".into(),
            ),
        ];

        Self {
            users,
            posts,
            comments,
        }
    }

    /// Fresh id for a newly created entity. Never reused, even after deletes.
    fn generate_id() -> String {
        nanoid::format(nanoid::rngs::default, &ID_ALPHABET, ID_LENGTH)
    }

    // ---- queries -----------------------------------------------------------

    /// All users, or those whose name contains `query` case-insensitively.
    pub fn users(&self, query: Option<&str>) -> Vec<User> {
        match query {
            None => self.users.clone(),
            Some(q) => {
                let q = q.to_lowercase();
                self.users
                    .iter()
                    .filter(|u| u.name.to_lowercase().contains(&q))
                    .cloned()
                    .collect()
            }
        }
    }

    /// All posts, or those whose title contains `query` case-insensitively.
    pub fn posts(&self, query: Option<&str>) -> Vec<Post> {
        match query {
            None => self.posts.clone(),
            Some(q) => {
                let q = q.to_lowercase();
                self.posts
                    .iter()
                    .filter(|p| p.title.to_lowercase().contains(&q))
                    .cloned()
                    .collect()
            }
        }
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    // ---- relationship lookups ----------------------------------------------

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn posts_by_author(&self, user_id: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author == user_id)
            .cloned()
            .collect()
    }

    pub fn comments_on_post(&self, post_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    pub fn comments_by_author(&self, user_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.author_id == user_id)
            .cloned()
            .collect()
    }

    // ---- mutations ---------------------------------------------------------
    //
    // Every check runs before the first collection is touched, so a failing
    // mutation leaves the store exactly as it was.

    pub fn create_user(&mut self, name: String, email: String, age: Option<i32>) -> Result<User> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(BrambleError::EmailTaken);
        }

        let user = User::new(Self::generate_id(), name, email, age);
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn create_post(
        &mut self,
        title: String,
        body: String,
        published: bool,
        author: String,
    ) -> Result<Post> {
        if self.user(&author).is_none() {
            return Err(BrambleError::UserNotFound);
        }

        let post = Post::new(Self::generate_id(), title, body, published, author);
        self.posts.push(post.clone());
        Ok(post)
    }

    pub fn create_comment(
        &mut self,
        text: String,
        author_id: String,
        post_id: String,
    ) -> Result<Comment> {
        if self.user(&author_id).is_none() {
            return Err(BrambleError::UserNotFound);
        }
        let post = self.post(&post_id).ok_or(BrambleError::PostNotFound)?;
        if !post.published {
            return Err(BrambleError::PostNotPublished);
        }

        let comment = Comment::new(Self::generate_id(), text, author_id, post_id);
        self.comments.push(comment.clone());
        Ok(comment)
    }

    /// Removes a user and everything hanging off them: their posts, the
    /// comments on those posts, and their own comments on anyone's posts.
    pub fn delete_user(&mut self, user_id: &str) -> Result<User> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == user_id)
            .ok_or(BrambleError::UserNotFound)?;
        let deleted = self.users.remove(index);

        let removed_posts: Vec<String> = self
            .posts
            .iter()
            .filter(|p| p.author == user_id)
            .map(|p| p.id.clone())
            .collect();

        self.posts.retain(|p| p.author != user_id);
        self.comments
            .retain(|c| !removed_posts.contains(&c.post_id) && c.author_id != user_id);

        Ok(deleted)
    }

    /// Removes a post and every comment referencing it.
    pub fn delete_post(&mut self, post_id: &str) -> Result<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or(BrambleError::PostNotFound)?;
        let deleted = self.posts.remove(index);

        self.comments.retain(|c| c.post_id != post_id);

        Ok(deleted)
    }

    /// Removes a comment, but only for its author. A wrong `user_id` is
    /// indistinguishable from a missing comment.
    pub fn delete_comment(&mut self, user_id: &str, comment_id: &str) -> Result<Comment> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id && c.author_id == user_id)
            .ok_or(BrambleError::CommentNotFound)?;

        Ok(self.comments.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_without_query_returns_all_in_order() {
        let store = Store::with_fixtures();
        let users = store.users(None);
        let ids: Vec<_> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn users_query_is_case_insensitive_substring() {
        let store = Store::with_fixtures();
        let users = store.users(Some("GERALD"));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Geraldine");

        assert!(store.users(Some("zzz")).is_empty());
    }

    #[test]
    fn users_is_idempotent_without_mutation() {
        let store = Store::with_fixtures();
        assert_eq!(store.users(None), store.users(None));
    }

    #[test]
    fn posts_query_matches_title() {
        let store = Store::with_fixtures();
        let posts = store.posts(Some("graphql"));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "3");
    }

    #[test]
    fn create_user_rejects_duplicate_email() {
        let mut store = Store::with_fixtures();
        let err = store
            .create_user("Someone".into(), "jesus@gmail.com".into(), None)
            .unwrap_err();
        assert!(matches!(err, BrambleError::EmailTaken));
        assert_eq!(err.to_string(), "Email already in use");
        assert_eq!(store.users(None).len(), 3);
    }

    #[test]
    fn create_user_assigns_fresh_ids() {
        let mut store = Store::new();
        let a = store
            .create_user("A".into(), "a@example.com".into(), Some(20))
            .unwrap();
        let b = store
            .create_user("B".into(), "b@example.com".into(), None)
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), ID_LENGTH);
        assert_eq!(store.users(None).len(), 2);
    }

    #[test]
    fn create_post_requires_existing_author() {
        let mut store = Store::with_fixtures();
        let err = store
            .create_post("T".into(), "B".into(), true, "999".into())
            .unwrap_err();
        assert!(matches!(err, BrambleError::UserNotFound));
        assert_eq!(store.posts(None).len(), 3);
    }

    #[test]
    fn create_comment_checks_author_then_post_then_published() {
        let mut store = Store::with_fixtures();

        let err = store
            .create_comment("c".into(), "999".into(), "999".into())
            .unwrap_err();
        assert!(matches!(err, BrambleError::UserNotFound));

        let err = store
            .create_comment("c".into(), "1".into(), "999".into())
            .unwrap_err();
        assert!(matches!(err, BrambleError::PostNotFound));

        // post "2" exists but is unpublished
        let err = store
            .create_comment("c".into(), "1".into(), "2".into())
            .unwrap_err();
        assert!(matches!(err, BrambleError::PostNotPublished));
        assert_eq!(
            err.to_string(),
            "This post hasn't been published yet"
        );
        assert_eq!(store.comments().len(), 4);
    }

    #[test]
    fn create_comment_on_published_post() {
        let mut store = Store::with_fixtures();
        let comment = store
            .create_comment("Nice one".into(), "3".into(), "1".into())
            .unwrap();
        assert_eq!(comment.post_id, "1");
        assert_eq!(store.comments_on_post("1").len(), 2);
    }

    #[test]
    fn delete_user_cascades_posts_and_comments() {
        let mut store = Store::with_fixtures();

        // User "2" authored posts "1" and "3"; comments "14" and "45" sit on
        // post "3", comment "26" sits on post "1", and "26"/"45" are authored
        // by user "2" themselves.
        let deleted = store.delete_user("2").unwrap();
        assert_eq!(deleted.id, "2");

        let post_ids: Vec<_> = store.posts(None).iter().map(|p| p.id.clone()).collect();
        assert_eq!(post_ids, ["2"]);

        let comments = store.comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, "39");
        assert_eq!(comments[0].post_id, "2");
        assert_ne!(comments[0].author_id, "2");

        assert!(store.posts_by_author("2").is_empty());
        assert!(store.comments_by_author("2").is_empty());
    }

    #[test]
    fn delete_user_removes_their_comments_on_other_posts() {
        let mut store = Store::with_fixtures();

        // User "1" authored no published-post comments besides "14" on post
        // "3" (someone else's post). Deleting user "1" must take "14" with it.
        store.delete_user("1").unwrap();
        assert!(store.comments().iter().all(|c| c.author_id != "1"));
        assert!(store.comments().iter().all(|c| c.id != "14"));
    }

    #[test]
    fn delete_missing_user_fails_and_leaves_store_untouched() {
        let mut store = Store::with_fixtures();
        let err = store.delete_user("999").unwrap_err();
        assert!(matches!(err, BrambleError::UserNotFound));
        assert_eq!(store.users(None).len(), 3);
        assert_eq!(store.posts(None).len(), 3);
        assert_eq!(store.comments().len(), 4);
    }

    #[test]
    fn delete_post_cascades_its_comments() {
        let mut store = Store::with_fixtures();
        let deleted = store.delete_post("3").unwrap();
        assert_eq!(deleted.title, "GraphQL from the Ground Up");

        assert!(store.post("3").is_none());
        assert!(store.comments_on_post("3").is_empty());
        // comments on other posts survive
        assert_eq!(store.comments().len(), 2);
    }

    #[test]
    fn delete_comment_enforces_ownership() {
        let mut store = Store::with_fixtures();

        // comment "14" exists but belongs to user "1"
        let err = store.delete_comment("999", "14").unwrap_err();
        assert!(matches!(err, BrambleError::CommentNotFound));
        assert_eq!(store.comments().len(), 4);

        let deleted = store.delete_comment("1", "14").unwrap();
        assert_eq!(deleted.id, "14");
        assert_eq!(store.comments().len(), 3);
    }

    #[test]
    fn relationship_lookups_follow_foreign_keys() {
        let store = Store::with_fixtures();

        assert_eq!(store.user("2").unwrap().name, "Keisa");
        assert_eq!(store.post("1").unwrap().author, "2");

        let keisa_posts = store.posts_by_author("2");
        let ids: Vec<_> = keisa_posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        let on_post_3: Vec<_> = store
            .comments_on_post("3")
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(on_post_3, ["14", "45"]);
    }
}
