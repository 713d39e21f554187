use std::sync::RwLock;

use travel::{aggregate, rating_for};
use travelai_client::classic::ClassicApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::state::PlaceDetailState;

/// One place with its community comments.
///
/// The classic backend has no per-place endpoint; the place is picked out
/// of the full catalogue.
pub struct PlaceDetailView {
    api: ClassicApi,
    guard: RequestGuard,
    state: RwLock<PlaceDetailState>,
}

impl PlaceDetailView {
    pub fn new(api: ClassicApi) -> Self {
        Self {
            api,
            guard: RequestGuard::new(),
            state: RwLock::new(PlaceDetailState::default()),
        }
    }

    pub fn state(&self) -> PlaceDetailState {
        self.state.read().unwrap().clone()
    }

    pub async fn load(&self, place_id: &str) -> Result<(), ViewError> {
        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            *s = PlaceDetailState {
                loading: true,
                place_id: place_id.to_string(),
                ..Default::default()
            };
        }

        let (places, comments) = tokio::join!(
            self.api.get_places(),
            self.api.get_comments_by_place(place_id),
        );
        let result = match (places, comments) {
            (Ok(p), Ok(c)) => Ok((p, c)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        match result {
            Ok((places, comments)) => {
                let offline = places.is_fallback() || comments.is_fallback();
                let place = places.data.into_iter().find(|p| p.id == place_id);
                let rating = rating_for(&aggregate(&comments.data), place_id);
                self.guard.apply(ticket, &self.state, "place_detail", |s| {
                    s.loading = false;
                    s.offline = offline;
                    s.not_found = place.is_none();
                    s.content = place.as_ref().map(|p| p.content.clone()).unwrap_or_default();
                    s.place = place;
                    s.comments = comments.data;
                    s.rating = Some(rating);
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "place_detail", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }
}
