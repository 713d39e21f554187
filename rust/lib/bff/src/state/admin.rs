use serde::Serialize;
use travel::{rating_for, Comment, Place, PlaceFilter, RatingMap, RatingSummary};

use super::PlaceCard;

/// Per-user statistics lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUsersState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    pub username: String,
    /// Set once a lookup has completed.
    pub searched: bool,
    pub visited_count: usize,
    pub comments: Vec<Comment>,
}

/// Catalogue table with filters and a detail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPlacesState {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub offline: bool,
    pub places: Vec<Place>,
    pub comments: Vec<Comment>,
    pub ratings: RatingMap,
    pub filter: PlaceFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

/// Detail panel for the selected place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSelection {
    pub place: Place,
    pub rating: RatingSummary,
    pub comments: Vec<Comment>,
}

impl AdminPlacesState {
    /// Rows passing the name and rating filters, in catalogue order.
    pub fn visible(&self) -> Vec<PlaceCard> {
        self.filter
            .apply(&self.places, &self.ratings)
            .into_iter()
            .map(|p| PlaceCard::new(p.clone(), &self.ratings))
            .collect()
    }

    /// Whether "clear rating filter" applies.
    pub fn can_clear_rating(&self) -> bool {
        !self.filter.is_rating_default()
    }

    pub fn selection(&self) -> Option<PlaceSelection> {
        let id = self.selected.as_deref()?;
        let place = self.places.iter().find(|p| p.id == id)?.clone();
        let comments = self
            .comments
            .iter()
            .filter(|c| c.place_id == id)
            .cloned()
            .collect();
        Some(PlaceSelection {
            rating: rating_for(&self.ratings, id),
            place,
            comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel::aggregate;

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            thumb_url: String::new(),
            description: String::new(),
            content: String::new(),
        }
    }

    fn comment(id: &str, place_id: &str, rating: u8) -> Comment {
        Comment {
            id: id.into(),
            author: "user_a".into(),
            place_id: place_id.into(),
            body: String::new(),
            date: String::new(),
            rating: Some(rating),
            place_name: None,
        }
    }

    fn state() -> AdminPlacesState {
        let comments = vec![comment("c1", "a", 3), comment("c2", "b", 4), comment("c3", "c", 5)];
        AdminPlacesState {
            places: vec![place("a", "Đà Nẵng"), place("b", "Huế"), place("c", "Sa Pa"), place("d", "Mũi Né")],
            ratings: aggregate(&comments),
            comments,
            ..Default::default()
        }
    }

    #[test]
    fn rating_range_filters_rows() {
        let mut s = state();
        s.filter = PlaceFilter::default().with_range(4.0, 5.0);
        let ids: Vec<String> = s.visible().into_iter().map(|c| c.place.id).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert!(s.can_clear_rating());

        s.filter.reset_rating();
        assert_eq!(s.visible().len(), 4);
        assert!(!s.can_clear_rating());
    }

    #[test]
    fn selection_has_place_comments() {
        let mut s = state();
        s.selected = Some("b".into());
        let sel = s.selection().unwrap();
        assert_eq!(sel.place.name, "Huế");
        assert_eq!(sel.rating.mean, 4.0);
        assert_eq!(sel.comments.len(), 1);

        s.selected = Some("d".into());
        let sel = s.selection().unwrap();
        assert_eq!(sel.rating, RatingSummary::EMPTY);
        assert!(sel.comments.is_empty());

        s.selected = Some("zz".into());
        assert!(s.selection().is_none());
    }
}
