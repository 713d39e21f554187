use std::sync::{Arc, RwLock};

use travelai_client::companion::CompanionApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::{DashboardState, Tab};

/// Profile header with "History Visited" and "New Trip" tabs.
pub struct DashboardView {
    api: CompanionApi,
    session: Arc<Session>,
    guard: RequestGuard,
    recommend_guard: RequestGuard,
    state: RwLock<DashboardState>,
}

impl DashboardView {
    pub fn new(api: CompanionApi, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            recommend_guard: RequestGuard::new(),
            state: RwLock::new(DashboardState::default()),
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state.read().unwrap().clone()
    }

    /// Profile, visited places and the catalogue, fetched together.
    pub async fn load(&self) -> Result<(), ViewError> {
        if !self.session.is_logged_in() {
            return Err(ViewError::NotLoggedIn);
        }

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.loading = true;
            s.error = None;
        }

        let (profile, visited, places) = tokio::join!(
            self.api.get_profile(),
            self.api.get_visited_places(),
            self.api.get_places(),
        );
        let result = match (profile, visited, places) {
            (Ok(u), Ok(v), Ok(p)) => Ok((u, v, p)),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(e),
        };

        match result {
            Ok((profile, visited, places)) => {
                self.guard.apply(ticket, &self.state, "dashboard", |s| {
                    s.loading = false;
                    s.offline = profile.is_fallback() || visited.is_fallback() || places.is_fallback();
                    s.profile = Some(profile.data);
                    s.visited = visited.data;
                    s.new_trip = places.data;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "dashboard", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    pub fn set_tab(&self, tab: Tab) {
        self.state.write().unwrap().tab = tab;
    }

    /// Replace the new-trip list with AI recommendations.
    pub async fn recommend(&self) -> Result<(), ViewError> {
        if !self.session.is_logged_in() {
            return Err(ViewError::NotLoggedIn);
        }

        let ticket = self.recommend_guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.recommending = true;
            s.error = None;
        }

        match self.api.get_recommendations().await {
            Ok(places) => {
                self.recommend_guard.apply(ticket, &self.state, "dashboard", |s| {
                    s.recommending = false;
                    s.offline = places.is_fallback();
                    s.new_trip = places.data;
                });
                Ok(())
            }
            Err(e) => {
                self.recommend_guard.apply(ticket, &self.state, "dashboard", |s| {
                    s.recommending = false;
                    s.error = Some("AI Recommendation failed".to_string());
                });
                Err(e.into())
            }
        }
    }
}
