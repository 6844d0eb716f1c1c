use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(DieselNewType))]
/// The person id.
pub struct PersonId(pub i32);

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(DieselNewType))]
/// The club id.
pub struct ClubId(pub i32);

impl fmt::Display for ClubId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(DieselNewType))]
/// The post id.
pub struct PostId(pub i32);

impl fmt::Display for PostId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(DieselNewType))]
/// The comment id.
pub struct CommentId(pub i32);

impl fmt::Display for CommentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Anything that can be voted on.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum VoteTarget {
  Post(PostId),
  Comment(CommentId),
}

impl fmt::Display for VoteTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VoteTarget::Post(id) => write!(f, "post/{id}"),
      VoteTarget::Comment(id) => write!(f, "comment/{id}"),
    }
  }
}

/// Opaque keyset pagination cursor. Encodes the `(published, id)` of the first item of the next
/// page, so listings stay stable while new rows are inserted.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PaginationCursor(pub String);

impl PaginationCursor {
  pub fn new(published: DateTime<Utc>, id: i32) -> Self {
    Self(format!("{}_{}", published.timestamp_micros(), id))
  }

  /// Returns `None` if the cursor was not created by [`PaginationCursor::new`].
  pub fn decode(&self) -> Option<(DateTime<Utc>, i32)> {
    let (micros, id) = self.0.split_once('_')?;
    let published = DateTime::from_timestamp_micros(micros.parse().ok()?)?;
    Some((published, id.parse().ok()?))
  }
}
