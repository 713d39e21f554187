use serde::Serialize;
use travel::{rating_for, Place, RatingMap, RatingSummary};

/// A place with its rating, as listed in the profile, discovery and admin
/// views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceCard {
    pub place: Place,
    pub rating: RatingSummary,
}

impl PlaceCard {
    pub fn new(place: Place, ratings: &RatingMap) -> Self {
        let rating = rating_for(ratings, &place.id);
        Self { place, rating }
    }
}

/// Colour band of a rating badge in the admin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingBand {
    High,
    Medium,
    Low,
}

impl RatingBand {
    pub fn of(mean: f64) -> Self {
        if mean >= 4.0 {
            RatingBand::High
        } else if mean >= 3.0 {
            RatingBand::Medium
        } else {
            RatingBand::Low
        }
    }
}
