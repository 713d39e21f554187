use std::sync::{Arc, RwLock};

use travel::User;
use travelai_client::companion::CompanionApi;

use crate::error::ViewError;
use crate::guard::RequestGuard;
use crate::session::Session;
use crate::state::{AboutState, AuthPhase, AuthState};

/// Shown in the about panel when the summary cannot be loaded.
pub const SUMMARY_FAILED: &str = "Failed to load summary.";

/// Token login plus the "About TravelAI" panel.
pub struct LoginView {
    api: CompanionApi,
    session: Arc<Session>,
    guard: RequestGuard,
    state: RwLock<AuthState>,
    about_guard: RequestGuard,
    about: RwLock<AboutState>,
}

impl LoginView {
    pub fn new(api: CompanionApi, session: Arc<Session>) -> Self {
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
            about_guard: RequestGuard::new(),
            about: RwLock::new(AboutState::default()),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().unwrap().clone()
    }

    pub fn about(&self) -> AboutState {
        self.about.read().unwrap().clone()
    }

    /// `POST /login`; the session keeps the user and token. Blank input is
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

        match self.api.login(username).await {
            Ok(resp) => {
                let offline = resp.is_fallback();
                let resp = resp.into_inner();
                let user = resp.user.clone();
                let applied = self.guard.apply(ticket, &self.state, "login", |s| {
                    self.session.login(resp.user, resp.token);
                    s.busy = false;
                    s.offline = offline;
                    s.phase = AuthPhase::Authenticated;
                    s.user = Some(user.clone());
                });
                Ok(applied.then_some(user))
            }
            Err(e) => {
                self.guard.apply(ticket, &self.state, "login", |s| {
                    s.busy = false;
                    s.error = Some("Login failed".to_string());
                });
                Err(e.into())
            }
        }
    }

    /// Load the markdown summary; failures leave [`SUMMARY_FAILED`] as content.
    pub async fn load_summary(&self) {
        let ticket = self.about_guard.issue();
        self.about.write().unwrap().loading = true;

        let result = self.api.get_summary().await;
        self.about_guard.apply(ticket, &self.about, "about", |s| {
            s.loading = false;
            match result {
                Ok(summary) => {
                    s.offline = summary.is_fallback();
                    s.content = summary.into_inner().content;
                }
                Err(_) => s.content = SUMMARY_FAILED.to_string(),
            }
        });
    }

    pub fn logout(&self) {
        self.session.logout();
        *self.state.write().unwrap() = AuthState::default();
    }
}
