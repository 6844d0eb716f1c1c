use crate::newtypes::{ClubId, PersonId};
#[cfg(feature = "full")]
use crate::schema::{club, club_subscription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = club))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
/// A club, which posts belong to.
pub struct Club {
  pub id: ClubId,
  /// The unique name, used in urls.
  pub name: String,
  pub description: Option<String>,
  pub creator_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = club))]
pub struct ClubInsertForm {
  pub name: String,
  pub creator_id: PersonId,
  #[new(default)]
  pub description: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = club_subscription))]
#[cfg_attr(feature = "full", diesel(primary_key(person_id, club_id)))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
pub struct ClubSubscription {
  pub person_id: PersonId,
  pub club_id: ClubId,
  pub published: DateTime<Utc>,
}

#[derive(Clone, Debug, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable))]
#[cfg_attr(feature = "full", diesel(table_name = club_subscription))]
pub struct ClubSubscriptionForm {
  pub person_id: PersonId,
  pub club_id: ClubId,
}
