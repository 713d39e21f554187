use std::sync::{Arc, RwLock};

use travel::User;
use travelai_client::classic::ClassicApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::{AuthPhase, AuthState};

/// Shown when no user has the submitted handle.
pub const USER_NOT_FOUND: &str = r#"User not found! Try "user_a" or "admin""#;

/// Login by handle look-up in the user directory. No password, no token.
pub struct LoginView {
    api: ClassicApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<AuthState>,
}

impl LoginView {
    pub fn new(api: ClassicApi, session: Arc<Session>) -> Self {
        let state = AuthState {
            phase: if session.is_logged_in() {
                AuthPhase::Authenticated
            } else {
                AuthPhase::Unauthenticated
            },
            user: session.current_user(),
            ..Default::default()
        };
        Self {
            api,
            session,
            guard: RequestGuard::new(),
            state: RwLock::new(state),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().unwrap().clone()
    }

    /// Look up `username`; on success the session holds the user.
    ///
    /// An unknown handle is not an error: the state carries
    /// [`USER_NOT_FOUND`] and `Ok(None)` is returned. A blank handle is
    /// ignored.
    pub async fn submit(&self, username: &str) -> Result<Option<User>, ViewError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(None);
        }

        let ticket = self.guard.issue();
        {
            let mut s = self.state.write().unwrap();
            s.busy = true;
            s.error = None;
        }

        let result = self.api.login(username).await;

        let mut found = None;
        self.guard.apply(ticket, &self.state, "login", |s| {
            s.busy = false;
            match &result {
                Ok(fetched) => {
                    s.offline = fetched.is_fallback();
                    match &fetched.data {
                        Some(user) => {
                            self.session.login(user.clone(), None);
                            s.phase = AuthPhase::Authenticated;
                            s.user = Some(user.clone());
                            found = Some(user.clone());
                        }
                        None => {
                            s.phase = AuthPhase::Unauthenticated;
                            s.user = None;
                            s.error = Some(USER_NOT_FOUND.to_string());
                        }
                    }
                }
                Err(e) => s.error = Some(e.to_string()),
            }
        });
        result?;
        Ok(found)
    }

    pub fn logout(&self) {
        self.session.logout();
        *self.state.write().unwrap() = AuthState::default();
    }
}
