//! Command implementations. Each command builds a [`Context`] from the
//! config file, checks the route it shows, drives one view and prints its
//! state.

pub mod admin;
pub mod config;
pub mod discover;
pub mod places;
pub mod session;

mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use travelai_bff::{resolve, Route, Session};
use travelai_client::classic::ClassicApi;
use travelai_client::companion::CompanionApi;
use travelai_client::{ApiClient, Variant};

use crate::config::ClientConfig;

/// Everything a command needs: config, restored session, client.
pub struct Context {
    pub config_path: PathBuf,
    pub config: ClientConfig,
    pub session: Arc<Session>,
    pub client: Arc<ApiClient>,
    pub json: bool,
}

impl Context {
    pub fn load(config_path: &Path, json: bool) -> Result<Self> {
        let config = ClientConfig::load(config_path)?;
        let session = Arc::new(Session::restored(config.session.clone()));
        debug!(
            server = %config.server,
            variant = config.variant.as_str(),
            logged_in = session.is_logged_in(),
            "config loaded"
        );
        let client = ApiClient::new(&config.server, session.clone())?
            .with_fallback_delay(config.fallback_delay());
        Ok(Self {
            config_path: config_path.to_path_buf(),
            config,
            session,
            client: Arc::new(client),
            json,
        })
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn classic(&self) -> ClassicApi {
        ClassicApi::new(self.client.clone())
    }

    pub fn companion(&self) -> CompanionApi {
        CompanionApi::new(self.client.clone())
    }

    /// Fail unless `requested` is what the logged-in user would be shown.
    pub fn ensure(&self, requested: Route) -> Result<()> {
        let user = self.session.current_user();
        let shown = resolve(self.variant(), requested.clone(), user.as_ref());
        if shown == requested {
            return Ok(());
        }
        match shown {
            Route::Login => anyhow::bail!("Not logged in. Run `travelai login <username>`."),
            other => anyhow::bail!(
                "{} is not available for this account on the {} backend (try {}).",
                requested,
                self.variant().as_str(),
                other
            ),
        }
    }

    /// Persist the current session into the config file.
    pub fn save_session(&mut self) -> Result<()> {
        self.config.session = self.session.snapshot();
        self.config.save(&self.config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on port 1, so every request is served from fixtures.
    fn offline_config(dir: &Path) -> PathBuf {
        let path = dir.join("config.toml");
        let mut config = ClientConfig::default();
        config.set("server", "http://127.0.0.1:1").unwrap();
        config.set("fallback_delay_ms", "0").unwrap();
        config.save(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn test_login_persists_and_logout_clears() {
        let dir = tempfile::tempdir().unwrap();
        let path = offline_config(dir.path());

        let mut ctx = Context::load(&path, false).unwrap();
        session::login(&mut ctx, "user_a").await.unwrap();

        let on_disk = ClientConfig::load(&path).unwrap();
        assert_eq!(on_disk.session.as_ref().map(|s| s.user.handle.as_str()), Some("user_a"));
        assert_eq!(on_disk.server, "http://127.0.0.1:1");

        let mut ctx = Context::load(&path, false).unwrap();
        let user = ctx.session.current_user().unwrap();
        assert_eq!(user.handle, "user_a");
        assert!(!ctx.session.is_admin());
        ctx.ensure(Route::Profile).unwrap();
        assert!(ctx.ensure(Route::AdminUsers).is_err());

        session::logout(&mut ctx).unwrap();
        assert_eq!(ClientConfig::load(&path).unwrap().session, None);
        let ctx = Context::load(&path, false).unwrap();
        assert!(!ctx.session.is_logged_in());
        assert!(ctx.ensure(Route::Places).is_err());
    }

    #[tokio::test]
    async fn test_unknown_user_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = offline_config(dir.path());

        let mut ctx = Context::load(&path, false).unwrap();
        assert!(session::login(&mut ctx, "nobody").await.is_err());
        assert_eq!(ClientConfig::load(&path).unwrap().session, None);
    }

    #[tokio::test]
    async fn test_variant_change_drops_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = offline_config(dir.path());

        let mut ctx = Context::load(&path, false).unwrap();
        session::login(&mut ctx, "admin").await.unwrap();
        assert!(ClientConfig::load(&path).unwrap().session.is_some());

        // Same variant: the session stays.
        config::set(&path, "variant", "classic").unwrap();
        assert!(ClientConfig::load(&path).unwrap().session.is_some());

        config::set(&path, "variant", "companion").unwrap();
        let on_disk = ClientConfig::load(&path).unwrap();
        assert_eq!(on_disk.variant, Variant::Companion);
        assert_eq!(on_disk.session, None);
        assert!(!Context::load(&path, false).unwrap().session.is_logged_in());
    }
}
