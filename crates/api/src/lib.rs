pub mod club;
pub mod comment;
pub mod post;
