use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,

    /// Id of the authoring [`User`](super::User).
    pub author_id: String,

    /// Id of the [`Post`](super::Post) this comment sits on.
    pub post_id: String,
}

impl Comment {
    pub fn new(id: String, text: String, author_id: String, post_id: String) -> Self {
        Self {
            id,
            text,
            author_id,
            post_id,
        }
    }
}
