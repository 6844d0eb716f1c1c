#[cfg(feature = "full")]
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[cfg_attr(feature = "full", derive(DbEnum))]
#[cfg_attr(
  feature = "full",
  ExistingTypePath = "crate::schema::sql_types::VoteTypeEnum"
)]
#[cfg_attr(feature = "full", DbValueStyle = "verbatim")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
/// The direction of a vote.
pub enum VoteType {
  Up,
  Down,
}

impl VoteType {
  /// Contribution of a single vote of this type to the score.
  pub fn weight(self) -> i64 {
    match self {
      VoteType::Up => 1,
      VoteType::Down => -1,
    }
  }
}

/// The storage operation which moves a persons vote on a target from its current state to the
/// state implied by a new request.
///
/// Requesting the vote the person already holds withdraws it, requesting the opposite one switches
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
  Insert(VoteType),
  Update(VoteType),
  Remove,
}

impl VoteTransition {
  pub fn resolve(current: Option<VoteType>, requested: VoteType) -> Self {
    match current {
      None => VoteTransition::Insert(requested),
      Some(c) if c == requested => VoteTransition::Remove,
      Some(_) => VoteTransition::Update(requested),
    }
  }

  /// The vote the person holds once the transition is applied.
  pub fn resulting_vote(self) -> Option<VoteType> {
    match self {
      VoteTransition::Insert(v) | VoteTransition::Update(v) => Some(v),
      VoteTransition::Remove => None,
    }
  }
}

/// Change of the score when a persons vote goes from `previous` to `next`.
pub fn score_delta(previous: Option<VoteType>, next: Option<VoteType>) -> i64 {
  next.map(VoteType::weight).unwrap_or(0) - previous.map(VoteType::weight).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::str::FromStr;
  use VoteType::{Down, Up};

  #[test]
  fn test_transition_table() {
    let cases = [
      (None, Up, VoteTransition::Insert(Up), Some(Up), 1),
      (None, Down, VoteTransition::Insert(Down), Some(Down), -1),
      (Some(Up), Up, VoteTransition::Remove, None, -1),
      (Some(Down), Down, VoteTransition::Remove, None, 1),
      (Some(Down), Up, VoteTransition::Update(Up), Some(Up), 2),
      (Some(Up), Down, VoteTransition::Update(Down), Some(Down), -2),
    ];
    for (current, requested, transition, resulting, delta) in cases {
      let resolved = VoteTransition::resolve(current, requested);
      assert_eq!(transition, resolved);
      assert_eq!(resulting, resolved.resulting_vote());
      assert_eq!(delta, score_delta(current, resolved.resulting_vote()));
    }
  }

  #[test]
  fn test_vote_type_wire_format() -> Result<(), serde_json::Error> {
    assert_eq!("\"UP\"", serde_json::to_string(&Up)?);
    assert_eq!(Down, serde_json::from_str::<VoteType>("\"DOWN\"")?);
    assert_eq!(Ok(Up), VoteType::from_str("UP"));
    assert_eq!("DOWN", Down.to_string());
    Ok(())
  }
}
