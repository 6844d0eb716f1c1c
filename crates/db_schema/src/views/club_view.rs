use crate::{
  newtypes::PersonId,
  source::{
    club::{Club, ClubSubscription},
    person::Person,
  },
  traits::Crud,
  utils::DbPool,
  views::structs::ClubView,
};
use clubhouse_utils::error::ClubhouseResult;

impl ClubView {
  pub async fn from_club(
    pool: &mut DbPool<'_>,
    club: Club,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<Self> {
    let creator = Person::read(pool, club.creator_id).await?;
    let subscribers = Club::subscriber_count(pool, club.id).await?;
    let subscribed = match my_person_id {
      Some(person_id) => ClubSubscription::is_subscribed(pool, person_id, club.id).await?,
      None => false,
    };
    Ok(ClubView {
      club,
      creator,
      subscribers,
      subscribed,
    })
  }

  pub async fn read_from_name(
    pool: &mut DbPool<'_>,
    name: &str,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<Self> {
    let club = Club::read_from_name(pool, name).await?;
    Self::from_club(pool, club, my_person_id).await
  }
}
