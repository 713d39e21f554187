use reqwest::Method;
use serde::de::DeserializeOwned;

/// One backend call, with its typed response and fixture fallback.
///
/// The fallback table is this trait: each endpoint struct decides what to
/// return when the backend is unreachable, so list and single-object shapes
/// can never be mixed up by a path-string lookup.
pub trait Endpoint: Send + Sync {
    type Response: DeserializeOwned + Send;

    fn method(&self) -> Method;

    /// Path segments below the base URL, unencoded.
    fn segments(&self) -> Vec<String>;

    /// Query parameters; omitted when empty.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON request body.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// Fixture response, or `None` if this endpoint is not mocked.
    fn fallback(&self) -> Option<Self::Response>;

    /// `/places/p1/info`, for logs and errors.
    fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// `GET /places/p1/info`.
    fn describe(&self) -> String {
        format!("{} {}", self.method(), self.path())
    }
}

/// Where a [`Fetched`] value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback,
}

/// A response plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    pub fn live(data: T) -> Self {
        Self { data, source: Source::Live }
    }

    pub fn fallback(data: T) -> Self {
        Self { data, source: Source::Fallback }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            data: f(self.data),
            source: self.source,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}
