use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoint::{Endpoint, Fetched};
use crate::error::FetchError;
use crate::token::TokenSource;

/// HTTP client for one backend.
///
/// Cheap to share behind an `Arc`; views hold one each.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token_source: Arc<dyn TokenSource>,
    fallback_delay: Duration,
}

impl ApiClient {
    pub fn new(base_url: &str, token_source: Arc<dyn TokenSource>) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token_source,
            fallback_delay: Duration::ZERO,
        })
    }

    /// Wait this long before serving fixture data.
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    fn url_for<E: Endpoint>(&self, endpoint: &E) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    /// Build a request with auth header.
    async fn authed(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, FetchError> {
        match self.token_source.token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// Parse an API response, mapping HTTP errors to `FetchError`.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, FetchError> {
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status: code, message: body });
        }
        let bytes = resp.bytes().await?;
        serde_json::from_slice::<R>(&bytes)
            .map_err(|e| FetchError::Decode(format!("response body: {}", e)))
    }

    /// Call the backend. No retry, no fallback.
    pub async fn fetch<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, FetchError> {
        let mut req = self.http.request(endpoint.method(), self.url_for(endpoint)?);
        let query = endpoint.query();
        if !query.is_empty() {
            req = req.query(&query);
        }
        if let Some(body) = endpoint.body() {
            req = req.json(&body);
        }
        let req = self.authed(req).await?;

        debug!(endpoint = %endpoint.describe(), "request");
        let resp = req.send().await?;
        Self::parse(resp).await
    }

    /// Call the backend; on any failure substitute the endpoint's fixture.
    ///
    /// Returns `Err` only when the call failed and the endpoint has no
    /// fixture ([`FetchError::NoFallback`]).
    pub async fn fetch_or_fallback<E: Endpoint>(&self, endpoint: &E) -> Result<Fetched<E::Response>, FetchError> {
        match self.fetch(endpoint).await {
            Ok(data) => Ok(Fetched::live(data)),
            Err(err) => {
                warn!(endpoint = %endpoint.describe(), error = %err, "request failed, falling back to fixture data");
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }
                endpoint
                    .fallback()
                    .map(Fetched::fallback)
                    .ok_or_else(|| FetchError::NoFallback {
                        endpoint: endpoint.describe(),
                        cause: Box::new(err),
                    })
            }
        }
    }
}
