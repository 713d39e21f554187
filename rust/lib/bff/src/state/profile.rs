use serde::Serialize;
use travel::User;

use super::PlaceCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Visited places in catalogue order.
    pub visited: Vec<PlaceCard>,
}
