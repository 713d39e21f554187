use travelai_client::FetchError;

/// Why a view operation did not run or did not finish.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error("admin only")]
    Forbidden,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
