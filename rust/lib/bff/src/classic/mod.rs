//! Views for the classic backend (user directory, comments, admin pages).

mod admin_places;
mod admin_users;
mod discovery;
mod login;
mod place_detail;
mod profile;

pub use admin_places::AdminPlacesView;
pub use admin_users::AdminUsersView;
pub use discovery::DiscoveryView;
pub use login::{LoginView, USER_NOT_FOUND};
pub use place_detail::PlaceDetailView;
pub use profile::ProfileView;
