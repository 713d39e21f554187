use serde::Serialize;
use travel::{Comment, Place, RatingSummary};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    /// Load finished and no place has `place_id`.
    pub not_found: bool,
    /// Long-form text; the place's own `content` unless fetched separately.
    pub content: String,
    pub comments: Vec<Comment>,
    /// Only the classic backend rates places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingSummary>,
}
