mod comment;
mod de;
mod place;
mod user;
mod visited;

pub use comment::*;
pub use place::*;
pub use user::*;
pub use visited::*;

use serde::{Deserialize, Serialize};

/// `{"content": "..."}`: the summary text and a place's long-form content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "de::text")]
    pub content: String,
}

impl Content {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}
