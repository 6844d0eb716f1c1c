use cfg_if::cfg_if;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ClubhouseErrorType {
  NotLoggedIn,
  IncorrectLogin,
  NotFound,
  CouldntFindPerson,
  CouldntFindClub,
  CouldntFindPost,
  CouldntFindComment,
  CouldntUpdatePerson,
  /// Club names must be between 3 and 21 characters, using only letters, digits and underscores
  InvalidClubName,
  InvalidClubDescription,
  InvalidPostTitle,
  InvalidBodyField,
  ClubAlreadyExists,
  CouldntCreateClub,
  CouldntCreatePost,
  CouldntCreateComment,
  CouldntUpdateSubscription,
  /// A second vote row for the same person and target raced the uniqueness constraint
  VoteAlreadyExists,
  CouldntCreateVote,
  CouldntUpdateVote,
  CouldntRemoveVote,
  /// Reading the votes or the target of a vote failed, not a missing target
  CouldntReadVotes,
  InvalidFetchLimit,
  InvalidCursor,
  SystemErrLogin,
  Unknown(String),
}

cfg_if! {
  if #[cfg(feature = "full")] {

    use std::{fmt, backtrace::Backtrace};
    pub type ClubhouseResult<T> = Result<T, ClubhouseError>;

    pub struct ClubhouseError {
      pub error_type: ClubhouseErrorType,
      pub inner: anyhow::Error,
      pub context: Backtrace,
    }

    impl<T> From<T> for ClubhouseError
    where
      T: Into<anyhow::Error>,
    {
      fn from(t: T) -> Self {
        let cause = t.into();
        let error_type = match cause.downcast_ref::<diesel::result::Error>() {
          Some(&diesel::NotFound) => ClubhouseErrorType::NotFound,
          _ => ClubhouseErrorType::Unknown(format!("{}", &cause)),
        };
        ClubhouseError {
          error_type,
          inner: cause,
          context: Backtrace::capture(),
        }
      }
    }

    impl Debug for ClubhouseError {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClubhouseError")
         .field("message", &self.error_type)
         .field("inner", &self.inner)
         .field("context", &self.context)
         .finish()
      }
    }

    impl fmt::Display for ClubhouseError {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{}", self.inner)?;
        fmt::Display::fmt(&self.context, f)
      }
    }

    impl actix_web::error::ResponseError for ClubhouseError {
      fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self.error_type {
          ClubhouseErrorType::NotLoggedIn | ClubhouseErrorType::IncorrectLogin => {
            StatusCode::UNAUTHORIZED
          }
          ClubhouseErrorType::NotFound
          | ClubhouseErrorType::CouldntFindPerson
          | ClubhouseErrorType::CouldntFindClub
          | ClubhouseErrorType::CouldntFindPost
          | ClubhouseErrorType::CouldntFindComment => StatusCode::NOT_FOUND,
          ClubhouseErrorType::VoteAlreadyExists | ClubhouseErrorType::ClubAlreadyExists => {
            StatusCode::CONFLICT
          }
          _ => StatusCode::BAD_REQUEST,
        }
      }

      fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
      }
    }

    impl From<ClubhouseErrorType> for ClubhouseError {
      fn from(error_type: ClubhouseErrorType) -> Self {
        let inner = anyhow::anyhow!("{}", error_type);
        ClubhouseError {
          error_type,
          inner,
          context: Backtrace::capture(),
        }
      }
    }

    pub trait ClubhouseErrorExt<T, E: Into<anyhow::Error>> {
      fn with_clubhouse_type(self, error_type: ClubhouseErrorType) -> ClubhouseResult<T>;
    }

    impl<T, E: Into<anyhow::Error>> ClubhouseErrorExt<T, E> for Result<T, E> {
      fn with_clubhouse_type(self, error_type: ClubhouseErrorType) -> ClubhouseResult<T> {
        self.map_err(|error| ClubhouseError {
          error_type,
          inner: error.into(),
          context: Backtrace::capture(),
        })
      }
    }

  }
}
