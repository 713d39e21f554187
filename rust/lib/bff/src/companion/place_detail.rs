use std::sync::RwLock;

use travelai_client::companion::CompanionApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::state::PlaceDetailState;

/// Place header, markdown content and the comments sidebar.
pub struct PlaceDetailView {
    api: CompanionApi,
    guard: RequestGuard,
    state: RwLock<PlaceDetailState>,
}

impl PlaceDetailView {
    pub fn new(api: CompanionApi) -> Self {
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

        let (info, content, comments) = tokio::join!(
            self.api.get_place_info(place_id),
            self.api.get_place_content(place_id),
            self.api.get_place_comments(place_id),
        );
        let result = match (info, content, comments) {
            (Ok(i), Ok(c), Ok(cs)) => Ok((i, c, cs)),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => Err(e),
        };

        match result {
            Ok((info, content, comments)) => {
                let offline = info.is_fallback() || content.is_fallback() || comments.is_fallback();
                self.guard.apply(ticket, &self.state, "place_detail", |s| {
                    s.loading = false;
                    s.offline = offline;
                    s.place = Some(info.data);
                    s.content = content.data.content;
                    s.comments = comments.data;
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
