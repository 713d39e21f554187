use serde::Serialize;
use travel::{name_matches, Place, RatingMap};

use super::PlaceCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    /// Free-text query sent with the recommendation request.
    pub query: String,
    /// Local name filter over `places`.
    pub search: String,
    pub places: Vec<Place>,
    pub ratings: RatingMap,
}

impl DiscoveryState {
    /// Places whose name matches `search`, with their ratings.
    pub fn visible(&self) -> Vec<PlaceCard> {
        self.places
            .iter()
            .filter(|p| name_matches(&p.name, &self.search))
            .map(|p| PlaceCard::new(p.clone(), &self.ratings))
            .collect()
    }
}
