//! Http client for the clubhouse api, plus the optimistic vote state which a client keeps per
//! rendered post or comment.

pub mod error;
pub mod http;
pub mod vote;

pub use error::ClientError;
pub use http::ClubhouseClient;
pub use vote::{OptimisticVoteController, VoteMutation, VoteState};
