//! Relational storage for heroes, their posts, and likes on posts.
//!
//! Every write runs in a single transaction. Uniqueness and reference checks
//! happen inside that transaction, and cascading deletes enumerate the
//! dependent rows explicitly so the outcome does not depend on whether the
//! backend enforces `ON DELETE CASCADE`.

pub mod error;
pub mod heroes;
pub mod likes;
pub mod posts;

pub use error::*;
pub use heroes::*;
pub use likes::*;
pub use posts::*;
