use crate::newtypes::PersonId;
#[cfg(feature = "full")]
use crate::schema::person;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "full", derive(Queryable, Selectable, Identifiable))]
#[cfg_attr(feature = "full", diesel(table_name = person))]
#[cfg_attr(feature = "full", diesel(check_for_backend(diesel::pg::Pg)))]
/// A person, created on first sign in through the identity provider.
pub struct Person {
  pub id: PersonId,
  /// The subject of the identity provider's session token.
  #[serde(skip)]
  pub external_id: String,
  pub name: String,
  pub avatar: Option<String>,
  pub published: DateTime<Utc>,
}

#[derive(Clone, Debug, derive_new::new)]
#[cfg_attr(feature = "full", derive(Insertable, AsChangeset))]
#[cfg_attr(feature = "full", diesel(table_name = person))]
pub struct PersonInsertForm {
  pub external_id: String,
  pub name: String,
  #[new(default)]
  pub avatar: Option<String>,
}
