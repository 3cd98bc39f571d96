//! Activity Catalog
//!
//! Data model for the activities served by the backend and the small
//! derivations the board renders from it.

mod initials;
mod types;

pub use initials::initials_from_email;
pub use types::{Activity, Catalog};
