use std::sync::{Arc, RwLock};

use travelai_client::classic::ClassicApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::{PlaceCard, ProfileState};

/// The logged-in user's visited places with their ratings.
pub struct ProfileView {
    api: ClassicApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<ProfileState>,
}

impl ProfileView {
    pub fn new(api: ClassicApi, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            state: RwLock::new(ProfileState::default()),
        }
    }

    pub fn state(&self) -> ProfileState {
        self.state.read().unwrap().clone()
    }

    pub async fn load(&self) -> Result<(), ViewError> {
        let user = self.session.current_user().ok_or(ViewError::NotLoggedIn)?;

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.loading = true;
            s.error = None;
            s.user = Some(user.clone());
        }

        let (places, visited, ratings) = tokio::join!(
            self.api.get_places(),
            self.api.get_visited_place_ids(&user.id),
            self.api.get_place_ratings(),
        );
        let result = match (places, visited, ratings) {
            (Ok(p), Ok(v), Ok(r)) => Ok((p, v, r)),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(e),
        };

        match result {
            Ok((places, visited, ratings)) => {
                let offline = places.is_fallback() || visited.is_fallback() || ratings.is_fallback();
                let cards = places
                    .data
                    .into_iter()
                    .filter(|p| visited.data.contains(&p.id))
                    .map(|p| PlaceCard::new(p, &ratings.data))
                    .collect();
                self.guard.apply(ticket, &self.state, "profile", |s| {
                    s.loading = false;
                    s.offline = offline;
                    s.visited = cards;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "profile", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }
}
