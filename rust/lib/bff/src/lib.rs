//! TravelAI view layer.
//!
//! Each view owns its state behind a `RwLock`, talks to the backend through
//! a service façade and reads the logged-in user from a shared [`Session`].
//! The UI (here, the CLI) calls an operation and then reads a state
//! snapshot; it never mutates state directly.
//!
//! - [`classic`]: login, profile, discovery, place detail, admin pages
//! - [`companion`]: login + about panel, dashboard, place detail
//!
//! Results from a superseded request are dropped by the view's
//! [`RequestGuard`].

pub mod classic;
pub mod companion;
pub mod route;
pub mod state;

mod error;
mod guard;
mod session;

pub use error::ViewError;
pub use guard::{RequestGuard, Ticket};
pub use route::{resolve, Route};
pub use session::{Session, SessionSnapshot};
