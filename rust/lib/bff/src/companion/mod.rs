//! Views for the companion backend (token login, dashboard, AI picks).

mod dashboard;
mod login;
mod place_detail;

pub use dashboard::DashboardView;
pub use login::{LoginView, SUMMARY_FAILED};
pub use place_detail::PlaceDetailView;
