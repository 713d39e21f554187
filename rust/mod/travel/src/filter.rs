//! Place filters used by the discovery and admin views.
//!
//! Name matching lower-cases both sides with Unicode default case mapping
//! (`str::to_lowercase`) and does a substring test. There is no diacritic
//! folding, so `"HA LONG"` does not match `"Vịnh Hạ Long"` but `"HẠ LONG"`
//! does.

use serde::{Deserialize, Serialize};

use crate::model::Place;
use crate::rating::{rating_for, RatingMap};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Name + inclusive rating-range filter, combined with AND.
///
/// Bounds are not checked against each other: `min > max` simply matches
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFilter {
    pub name: String,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl Default for PlaceFilter {
    fn default() -> Self {
        Self {
            name: String::new(),
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
        }
    }
}

impl PlaceFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_rating = min;
        self.max_rating = max;
        self
    }

    /// True when the range is still `[0, 5]`.
    pub fn is_rating_default(&self) -> bool {
        self.min_rating <= MIN_RATING && self.max_rating >= MAX_RATING
    }

    pub fn reset_rating(&mut self) {
        self.min_rating = MIN_RATING;
        self.max_rating = MAX_RATING;
    }

    pub fn matches_name(&self, place: &Place) -> bool {
        name_matches(&place.name, &self.name)
    }

    pub fn matches_rating(&self, mean: f64) -> bool {
        mean >= self.min_rating && mean <= self.max_rating
    }

    pub fn matches(&self, place: &Place, ratings: &RatingMap) -> bool {
        self.matches_name(place) && self.matches_rating(rating_for(ratings, &place.id).mean)
    }

    /// Places passing both filters, in input order.
    pub fn apply<'a>(&self, places: &'a [Place], ratings: &RatingMap) -> Vec<&'a Place> {
        places.iter().filter(|p| self.matches(p, ratings)).collect()
    }
}

/// Case-insensitive substring test. An empty term matches everything.
pub fn name_matches(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Name-only filter, for views that have no rating range.
pub fn filter_by_name<'a>(places: &'a [Place], term: &str) -> Vec<&'a Place> {
    places.iter().filter(|p| name_matches(&p.name, term)).collect()
}
