use serde::{Deserialize, Serialize};

use super::de;

/// Role gates navigation only; the backend does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// A traveller account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id", deserialize_with = "de::id")]
    pub id: String,

    /// Login handle. Comments reference users by this, not by id.
    #[serde(rename = "user_name", deserialize_with = "de::id")]
    pub handle: String,

    #[serde(rename = "full_name", default, deserialize_with = "de::text")]
    pub display_name: String,

    #[serde(default, deserialize_with = "de::text")]
    pub avatar_url: String,

    #[serde(default, deserialize_with = "de::role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// `POST /login` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default, deserialize_with = "de::opt_text", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
