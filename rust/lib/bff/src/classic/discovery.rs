use std::sync::{Arc, RwLock};

use travelai_client::classic::ClassicApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::DiscoveryState;

/// Recommendations for the logged-in user, with a local name filter.
pub struct DiscoveryView {
    api: ClassicApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<DiscoveryState>,
}

impl DiscoveryView {
    pub fn new(api: ClassicApi, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            state: RwLock::new(DiscoveryState::default()),
        }
    }

    pub fn state(&self) -> DiscoveryState {
        self.state.read().unwrap().clone()
    }

    /// Fetch recommendations (optionally for a free-text query) and ratings.
    pub async fn load(&self, query: Option<&str>) -> Result<(), ViewError> {
        let user = self.session.current_user().ok_or(ViewError::NotLoggedIn)?;
        let query = query.map(str::trim).unwrap_or_default().to_string();

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.loading = true;
            s.error = None;
            s.query = query.clone();
        }

        let q = (!query.is_empty()).then_some(query.as_str());
        let (recommended, ratings) = tokio::join!(
            self.api.get_recommendations(&user.id, q),
            self.api.get_place_ratings(),
        );
        let result = match (recommended, ratings) {
            (Ok(p), Ok(r)) => Ok((p, r)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        match result {
            Ok((places, ratings)) => {
                self.guard.apply(ticket, &self.state, "discovery", |s| {
                    s.loading = false;
                    s.offline = places.is_fallback() || ratings.is_fallback();
                    s.places = places.data;
                    s.ratings = ratings.data;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "discovery", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    /// Local name filter; no request.
    pub fn set_search(&self, term: &str) {
        self.state.write().unwrap().search = term.to_string();
    }

    /// Clear search and query and list the whole catalogue. Ratings from the
    /// last load are kept.
    pub async fn reset(&self) -> Result<(), ViewError> {
        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.search.clear();
            s.query.clear();
            s.loading = true;
            s.error = None;
        }

        match self.api.get_places().await {
            Ok(places) => {
                self.guard.apply(ticket, &self.state, "discovery", |s| {
                    s.loading = false;
                    s.offline = places.is_fallback();
                    s.places = places.data;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "discovery", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }
}
