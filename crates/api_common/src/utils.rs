use crate::{local_user_view::LocalUserView, post::FeedType};
use clubhouse_db_schema::newtypes::PersonId;
use clubhouse_utils::error::{ClubhouseErrorType, ClubhouseResult};

/// Trims optional text fields, treating blank input as absent.
pub fn clean_optional_text(text: Option<String>) -> Option<String> {
  text
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
}

/// The person whose subscriptions filter a post listing. The subscribed feed needs a signed in
/// person.
pub fn feed_subscriber(
  feed: Option<FeedType>,
  local_user_view: Option<&LocalUserView>,
) -> ClubhouseResult<Option<PersonId>> {
  match (feed.unwrap_or_default(), local_user_view) {
    (FeedType::All, _) => Ok(None),
    (FeedType::Subscribed, Some(view)) => Ok(Some(view.person.id)),
    (FeedType::Subscribed, None) => Err(ClubhouseErrorType::NotLoggedIn.into()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use clubhouse_db_schema::source::person::Person;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_clean_optional_text() {
    assert_eq!(None, clean_optional_text(None));
    assert_eq!(None, clean_optional_text(Some("  \n".into())));
    assert_eq!(Some("hi".into()), clean_optional_text(Some(" hi ".into())));
  }

  #[test]
  fn test_feed_subscriber() -> ClubhouseResult<()> {
    let view = LocalUserView {
      person: Person {
        id: PersonId(5),
        external_id: "test|5".into(),
        name: "iris".into(),
        avatar: None,
        published: Utc::now(),
      },
    };
    assert_eq!(None, feed_subscriber(None, Some(&view))?);
    assert_eq!(None, feed_subscriber(Some(FeedType::All), None)?);
    assert_eq!(
      Some(PersonId(5)),
      feed_subscriber(Some(FeedType::Subscribed), Some(&view))?
    );
    let err = feed_subscriber(Some(FeedType::Subscribed), None)
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::NotLoggedIn), err);
    Ok(())
  }
}
