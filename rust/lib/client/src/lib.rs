//! TravelAI HTTP client.
//!
//! Every backend call is a typed [`Endpoint`]: it knows its method, path,
//! query, body, response type and the fixture data to use when the backend
//! cannot be reached. [`ApiClient::fetch`] only talks to the network;
//! [`ApiClient::fetch_or_fallback`] substitutes the fixture and tags the
//! result with [`Source::Fallback`] so callers can tell the two apart.
//!
//! Two backend variants are supported, each with its own endpoint set and
//! service façade:
//!
//! - [`classic`]: `/users`, `/places`, `/user_place`, `/comments`, `/recommendations`
//! - [`companion`]: `/login`, `/summary`, `/user/*`, `/ai/recommend`, `/places/{id}/*`
//!
//! # Usage
//!
//! ```ignore
//! use travelai_client::{ApiClient, NoAuth, classic::ClassicApi};
//!
//! let client = Arc::new(ApiClient::new("http://localhost:5000", Arc::new(NoAuth))?);
//! let api = ClassicApi::new(client);
//! let places = api.get_places().await?;
//! if places.is_fallback() { /* show an offline badge */ }
//! ```

pub mod classic;
pub mod companion;
pub mod fixtures;

mod client;
mod endpoint;
mod error;
mod token;

pub use client::ApiClient;
pub use endpoint::{Endpoint, Fetched, Source};
pub use error::FetchError;
pub use token::{NoAuth, StaticToken, TokenSource};

/// Which backend the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// User directory + comments API, admin dashboard, no tokens.
    #[default]
    Classic,
    /// Token login, summary, AI recommendations.
    Companion,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Companion => "companion",
        }
    }

    /// Artificial delay applied before serving fixture data.
    pub fn default_fallback_delay(&self) -> std::time::Duration {
        match self {
            Variant::Classic => std::time::Duration::ZERO,
            Variant::Companion => std::time::Duration::from_millis(500),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Variant::Classic),
            "companion" => Ok(Variant::Companion),
            other => Err(format!("unknown variant: {} (expected classic or companion)", other)),
        }
    }
}
