use serde::Serialize;
use travel::{Place, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Visited,
    NewTrip,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    pub tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<User>,
    pub visited: Vec<Place>,
    /// Catalogue places, replaced by AI recommendations on request.
    pub new_trip: Vec<Place>,
    pub recommending: bool,
}

impl DashboardState {
    /// The list under the active tab.
    pub fn current(&self) -> &[Place] {
        match self.tab {
            Tab::Visited => &self.visited,
            Tab::NewTrip => &self.new_trip,
        }
    }
}
