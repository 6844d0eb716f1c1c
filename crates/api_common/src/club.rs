use clubhouse_db_schema::{
  newtypes::ClubId,
  source::club::Club,
  views::structs::ClubView,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Create a club.
pub struct CreateClub {
  /// The unique name, 3 to 21 letters, digits or underscores.
  pub name: String,
  pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClubResponse {
  pub club_view: ClubView,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Get a club by its name.
pub struct GetClub {
  pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Subscribe to a club, or unsubscribe if already subscribed.
pub struct SubscribeToClub {
  pub club_id: ClubId,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GetSubscribed {
  pub club_id: ClubId,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionResponse {
  pub subscribed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The clubs the signed in person subscribes to or created.
pub struct ListClubsResponse {
  pub clubs: Vec<Club>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Search clubs by name prefix.
pub struct SearchClubs {
  pub q: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchClubsResponse {
  pub clubs: Vec<Club>,
}
