//! View state types. Views hand out clones; the UI renders them.

mod admin;
mod auth;
mod dashboard;
mod discovery;
mod place;
mod place_detail;
mod profile;

pub use admin::*;
pub use auth::*;
pub use dashboard::*;
pub use discovery::*;
pub use place::*;
pub use place_detail::*;
pub use profile::*;
