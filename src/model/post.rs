use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,

    /// Id of the authoring [`User`](super::User).
    pub author: String,
}

impl Post {
    pub fn new(id: String, title: String, body: String, published: bool, author: String) -> Self {
        Self {
            id,
            title,
            body,
            published,
            author,
        }
    }
}
