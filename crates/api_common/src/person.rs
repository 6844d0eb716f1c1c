use clubhouse_db_schema::{newtypes::PersonId, views::structs::PersonView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Gets a persons details.
pub struct GetPersonDetails {
  pub person_id: PersonId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPersonDetailsResponse {
  pub person_view: PersonView,
}
