use serde::{Deserialize, Serialize};

use super::de;

/// Join row between a user and a place they have visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitedLink {
    #[serde(deserialize_with = "de::id")]
    pub user_id: String,
    #[serde(deserialize_with = "de::id")]
    pub place_id: String,
}

impl VisitedLink {
    pub fn new(user_id: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            place_id: place_id.into(),
        }
    }
}
