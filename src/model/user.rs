use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl User {
    pub fn new(id: String, name: String, email: String, age: Option<i32>) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }
}
