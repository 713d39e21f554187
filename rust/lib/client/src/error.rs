/// Client-side fetch error.
///
/// Network, status and decode failures are what
/// [`ApiClient::fetch_or_fallback`](crate::ApiClient::fetch_or_fallback)
/// recovers from; `NoFallback` is what it returns when the endpoint has no
/// fixture to substitute.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("endpoint not mocked: {endpoint} ({cause})")]
    NoFallback {
        endpoint: String,
        cause: Box<FetchError>,
    },
}

impl FetchError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::NoFallback { cause, .. } => cause.status(),
            _ => None,
        }
    }
}
