use std::sync::{Arc, RwLock};

use travel::aggregate;
use travelai_client::classic::ClassicApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::AdminPlacesState;

/// Admin catalogue table: name and rating-range filters plus a detail panel.
pub struct AdminPlacesView {
    api: ClassicApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<AdminPlacesState>,
}

impl AdminPlacesView {
    pub fn new(api: ClassicApi, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            state: RwLock::new(AdminPlacesState::default()),
        }
    }

    pub fn state(&self) -> AdminPlacesState {
        self.state.read().unwrap().clone()
    }

    /// Fetch places and all comments; filters and selection are kept.
    pub async fn load(&self) -> Result<(), ViewError> {
        if !self.session.is_admin() {
            return Err(ViewError::Forbidden);
        }

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.loading = true;
            s.error = None;
        }

        let (places, comments) = tokio::join!(self.api.get_places(), self.api.get_all_comments());
        let result = match (places, comments) {
            (Ok(p), Ok(c)) => Ok((p, c)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        match result {
            Ok((places, comments)) => {
                let ratings = aggregate(&comments.data);
                self.guard.apply(ticket, &self.state, "admin_places", |s| {
                    s.loading = false;
                    s.offline = places.is_fallback() || comments.is_fallback();
                    s.places = places.data;
                    s.comments = comments.data;
                    s.ratings = ratings;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "admin_places", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    pub fn set_name_filter(&self, term: &str) {
        self.state.write().unwrap().filter.name = term.to_string();
    }

    /// Inclusive bounds on the rounded mean. `min > max` shows nothing.
    pub fn set_rating_range(&self, min: f64, max: f64) {
        let mut s = self.state.write().unwrap();
        s.filter.min_rating = min;
        s.filter.max_rating = max;
    }

    pub fn clear_rating_filter(&self) {
        self.state.write().unwrap().filter.reset_rating();
    }

    /// Open the detail panel for `place_id`, or close it with `None`.
    pub fn select(&self, place_id: Option<&str>) {
        self.state.write().unwrap().selected = place_id.map(str::to_string);
    }
}
