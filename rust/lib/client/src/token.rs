use crate::error::FetchError;

/// Pluggable token provider. Called before every API request.
///
/// Returns `Ok(None)` to skip the Authorization header (anonymous).
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync + 'static {
    async fn token(&self) -> Result<Option<String>, FetchError>;
}

/// No authentication: anonymous requests.
pub struct NoAuth;

#[async_trait::async_trait]
impl TokenSource for NoAuth {
    async fn token(&self) -> Result<Option<String>, FetchError> {
        Ok(None)
    }
}

/// Fixed bearer token, e.g. one restored from disk.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<Option<String>, FetchError> {
        Ok(Some(self.0.clone()))
    }
}
