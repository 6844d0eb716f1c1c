use serde::{Deserialize, Serialize};

#[cfg(feature = "full")]
pub mod service;
#[cfg(feature = "full")]
pub mod store;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// The score of the target after a vote was applied.
pub struct VoteResponse {
  pub score: i64,
}
