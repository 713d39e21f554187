use serde::Serialize;
use travel::User;

/// Login form state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub phase: AuthPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The user came from fixture data.
    pub offline: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthPhase {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// The "About TravelAI" panel on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutState {
    pub loading: bool,
    pub content: String,
    pub offline: bool,
}
