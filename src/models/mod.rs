pub mod hero;
pub mod post;

pub use hero::*;
pub use post::*;
