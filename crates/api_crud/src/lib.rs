pub mod club;
pub mod comment;
pub mod person;
pub mod post;
