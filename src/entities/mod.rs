pub mod hero;
pub mod like;
pub mod post;
