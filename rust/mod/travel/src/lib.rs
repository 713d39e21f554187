//! Travel module: places, comments, ratings and the filters the views apply.
//!
//! # Resources
//!
//! - **User**: a traveller (or admin) identified by handle
//! - **Place**: a destination in the catalogue
//! - **Comment**: a review of a place, optionally rated 1–5
//! - **VisitedLink**: "user has been to place"
//!
//! Everything here is read-only data plus pure functions over it; fetching
//! lives in `travelai-client`.

pub mod filter;
pub mod model;
pub mod rating;

pub use filter::{filter_by_name, name_matches, PlaceFilter};
pub use model::*;
pub use rating::{aggregate, rating_for, RatingMap, RatingSummary};
