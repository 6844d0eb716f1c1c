use crate::{
  newtypes::PersonId,
  source::{comment::CommentVote, post::PostVote, vote::VoteType},
};

/// A single persons vote on some target.
pub trait VoteRecord {
  fn person_id(&self) -> PersonId;
  fn vote_type(&self) -> VoteType;
}

impl VoteRecord for PostVote {
  fn person_id(&self) -> PersonId {
    self.person_id
  }
  fn vote_type(&self) -> VoteType {
    self.vote_type
  }
}

impl VoteRecord for CommentVote {
  fn person_id(&self) -> PersonId {
    self.person_id
  }
  fn vote_type(&self) -> VoteType {
    self.vote_type
  }
}

/// Number of up votes minus number of down votes.
pub fn score<V: VoteRecord>(votes: &[V]) -> i64 {
  votes.iter().map(|v| v.vote_type().weight()).sum()
}

/// The vote which `person_id` holds among `votes`, if any.
pub fn vote_of<V: VoteRecord>(votes: &[V], person_id: PersonId) -> Option<VoteType> {
  votes
    .iter()
    .find(|v| v.person_id() == person_id)
    .map(VoteRecord::vote_type)
}
