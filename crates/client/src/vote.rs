use crate::error::{ClientError, ClientResult};
use clubhouse_db_schema::{
  aggregates::{score, vote_of, VoteRecord},
  newtypes::{PersonId, VoteTarget},
  source::vote::{score_delta, VoteTransition, VoteType},
  views::structs::{CommentView, PostView},
};
use std::{future::Future, time::Duration};
use tracing::{debug, warn};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends a vote to the server and returns the resulting score of the target.
pub trait VoteMutation {
  fn apply_vote(
    &self,
    target: VoteTarget,
    vote_type: VoteType,
  ) -> impl Future<Output = ClientResult<i64>> + Send;
}

/// What is displayed for one target: the own vote and the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteState {
  pub vote: Option<VoteType>,
  pub count: i64,
}

/// Vote state of a single rendered post or comment.
///
/// A requested vote is shown immediately, then sent to the server. If the server rejects it or
/// does not answer in time, the state from before the request is restored. Only one request per
/// target can be in flight, further requests fail with [`ClientError::VoteAlreadyPending`] and
/// leave the state untouched.
#[derive(Debug, Clone)]
pub struct OptimisticVoteController {
  target: VoteTarget,
  state: VoteState,
  /// Snapshot taken when a request starts, present while it is in flight.
  rollback: Option<VoteState>,
  notice: Option<&'static str>,
  timeout: Duration,
}

impl OptimisticVoteController {
  pub fn new(target: VoteTarget, state: VoteState) -> Self {
    OptimisticVoteController {
      target,
      state,
      rollback: None,
      notice: None,
      timeout: DEFAULT_REQUEST_TIMEOUT,
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Initial state from the votes of a fetched target. Anonymous viewers have no own vote.
  pub fn from_votes<V: VoteRecord>(
    target: VoteTarget,
    votes: &[V],
    my_person_id: Option<PersonId>,
  ) -> Self {
    let state = VoteState {
      vote: my_person_id.and_then(|id| vote_of(votes, id)),
      count: score(votes),
    };
    Self::new(target, state)
  }

  pub fn from_post_view(view: &PostView, my_person_id: Option<PersonId>) -> Self {
    Self::from_votes(VoteTarget::Post(view.post.id), &view.votes, my_person_id)
  }

  pub fn from_comment_view(view: &CommentView, my_person_id: Option<PersonId>) -> Self {
    Self::from_votes(
      VoteTarget::Comment(view.comment.id),
      &view.votes,
      my_person_id,
    )
  }

  pub fn target(&self) -> VoteTarget {
    self.target
  }

  pub fn state(&self) -> VoteState {
    self.state
  }

  pub fn is_pending(&self) -> bool {
    self.rollback.is_some()
  }

  /// Message for the user about the last failed vote, cleared by the next request.
  pub fn notice(&self) -> Option<&'static str> {
    self.notice
  }

  /// Applies the requested vote to the displayed state and remembers the previous one.
  pub fn begin(&mut self, requested: VoteType) -> ClientResult<VoteState> {
    if self.rollback.is_some() {
      return Err(ClientError::VoteAlreadyPending);
    }
    let previous = self.state;
    let next = VoteTransition::resolve(previous.vote, requested).resulting_vote();
    self.rollback = Some(previous);
    self.notice = None;
    self.state = VoteState {
      vote: next,
      count: previous.count + score_delta(previous.vote, next),
    };
    debug!(
      "Vote on {} predicted as {:?} -> {:?}",
      self.target, previous, self.state
    );
    Ok(self.state)
  }

  /// Finishes the request started by [`Self::begin`]. On success the prediction is kept as is,
  /// the score returned by the server is not shown. On failure the snapshot is restored.
  pub fn settle(&mut self, outcome: ClientResult<i64>) -> ClientResult<VoteState> {
    let Some(previous) = self.rollback.take() else {
      return Ok(self.state);
    };
    match outcome {
      Ok(_) => Ok(self.state),
      Err(e) => {
        warn!("Vote on {} failed, rolling back: {}", self.target, e);
        self.state = previous;
        self.notice = Some(e.notice());
        Err(e)
      }
    }
  }

  /// Predicts, sends and settles a vote. A request which takes longer than the timeout is
  /// treated like an error response.
  pub async fn vote<M: VoteMutation>(
    &mut self,
    mutation: &M,
    requested: VoteType,
  ) -> ClientResult<VoteState> {
    self.begin(requested)?;
    let outcome = tokio::time::timeout(self.timeout, mutation.apply_vote(self.target, requested))
      .await
      .unwrap_or(Err(ClientError::Timeout));
    self.settle(outcome)
  }

  pub async fn request_upvote<M: VoteMutation>(&mut self, mutation: &M) -> ClientResult<VoteState> {
    self.vote(mutation, VoteType::Up).await
  }

  pub async fn request_downvote<M: VoteMutation>(
    &mut self,
    mutation: &M,
  ) -> ClientResult<VoteState> {
    self.vote(mutation, VoteType::Down).await
  }
}
