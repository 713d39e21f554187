//! Static records served when a backend is unreachable.
//!
//! Each variant ships its own set; the two are not interchangeable (the
//! companion backend lists two places, the classic one three).

pub mod classic;
pub mod companion;
