use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use travel::User;
use travelai_client::{FetchError, TokenSource};

/// Logged-in user plus the opaque token the backend handed out, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: User,
}

/// The current login, shared by every view as `Arc<Session>`.
///
/// Also the client's [`TokenSource`]: requests carry
/// `Authorization: Bearer <token>` while a token is held.
#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<Option<SessionSnapshot>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session restored from a saved snapshot. Not validated with the backend.
    pub fn restored(snapshot: Option<SessionSnapshot>) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    pub fn login(&self, user: User, token: Option<String>) {
        *self.inner.write().unwrap() = Some(SessionSnapshot { user, token });
    }

    pub fn logout(&self) {
        *self.inner.write().unwrap() = None;
    }

    pub fn restore(&self, snapshot: SessionSnapshot) {
        *self.inner.write().unwrap() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.inner.read().unwrap().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.read().unwrap().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().as_ref().and_then(|s| s.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .read()
            .unwrap()
            .as_ref()
            .map_or(false, |s| s.user.is_admin())
    }
}

#[async_trait::async_trait]
impl TokenSource for Session {
    async fn token(&self) -> Result<Option<String>, FetchError> {
        Ok(Session::token(self))
    }
}
