use clubhouse_utils::error::ClubhouseErrorType;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
  /// The server answered with an error body.
  #[error("api error: {0}")]
  Api(ClubhouseErrorType),
  #[error("request timed out")]
  Timeout,
  /// An earlier vote on the same target has not been answered yet.
  #[error("a vote on this target is still pending")]
  VoteAlreadyPending,
  #[error("invalid url: {0}")]
  Url(#[from] url::ParseError),
}

impl ClientError {
  /// Short message which is shown to the user after a failed vote.
  pub fn notice(&self) -> &'static str {
    match self {
      ClientError::Api(ClubhouseErrorType::NotLoggedIn) => "Sign in to vote",
      ClientError::Api(
        ClubhouseErrorType::CouldntFindPost | ClubhouseErrorType::CouldntFindComment,
      ) => "This no longer exists",
      ClientError::VoteAlreadyPending => "Your last vote is still being saved",
      _ => "Couldn't save your vote, please try again",
    }
  }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_notice() {
    let gone = ClientError::Api(ClubhouseErrorType::CouldntFindComment);
    assert_eq!("This no longer exists", gone.notice());

    // A failing store is not a deleted target
    let broken = ClientError::Api(ClubhouseErrorType::CouldntReadVotes);
    assert_eq!("Couldn't save your vote, please try again", broken.notice());
    assert_eq!(
      "Couldn't save your vote, please try again",
      ClientError::Timeout.notice()
    );
  }
}
