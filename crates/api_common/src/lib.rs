pub mod club;
pub mod comment;
#[cfg(feature = "full")]
pub mod context;
#[cfg(feature = "full")]
pub mod local_user_view;
pub mod person;
pub mod post;
#[cfg(feature = "full")]
pub mod utils;
pub mod vote;

pub extern crate clubhouse_db_schema;
pub extern crate clubhouse_utils;

pub use clubhouse_utils::error::ClubhouseErrorType;
