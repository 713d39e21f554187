use std::sync::{Arc, RwLock};

use travelai_client::classic::ClassicApi;
use travelai_client::FetchError;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::AdminUsersState;

/// Admin look-up of a user's comments and visited-place count.
pub struct AdminUsersView {
    api: ClassicApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<AdminUsersState>,
}

impl AdminUsersView {
    pub fn new(api: ClassicApi, session: Arc<Session>) -> Self {
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            state: RwLock::new(AdminUsersState::default()),
        }
    }

    pub fn state(&self) -> AdminUsersState {
        self.state.read().unwrap().clone()
    }

    /// Comments are matched by handle. Visits are keyed by user id, which is
    /// resolved through the user directory; an unknown handle is used as the
    /// id as is.
    pub async fn lookup(&self, username: &str) -> Result<(), ViewError> {
        if !self.session.is_admin() {
            return Err(ViewError::Forbidden);
        }
        let username = username.trim().to_string();

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.loading = true;
            s.error = None;
            s.username = username.clone();
        }

        let result = async {
            let (comments, users) = tokio::join!(
                self.api.get_comments_by_user(&username),
                self.api.get_users(),
            );
            let (comments, users) = (comments?, users?);
            let user_id = users
                .data
                .iter()
                .find(|u| u.handle == username)
                .map(|u| u.id.clone())
                .unwrap_or_else(|| username.clone());
            let visited = self.api.get_visited_place_ids(&user_id).await?;
            let offline = comments.is_fallback() || users.is_fallback() || visited.is_fallback();
            Ok::<_, FetchError>((comments.data, visited.data.len(), offline))
        }
        .await;

        match result {
            Ok((comments, visited_count, offline)) => {
                self.guard.apply(ticket, &self.state, "admin_users", |s| {
                    s.loading = false;
                    s.searched = true;
                    s.offline = offline;
                    s.comments = comments;
                    s.visited_count = visited_count;
                });
                Ok(())
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "admin_users", |s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                Err(ViewError::Fetch(e))
            }
        }
    }
}
