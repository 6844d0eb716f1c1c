use crate::{
  newtypes::PersonId,
  schema::club,
  source::{
    club::ClubSubscription,
    person::Person,
    post::Post,
  },
  traits::Crud,
  utils::{get_conn, DbPool},
  views::structs::PersonView,
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl PersonView {
  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> ClubhouseResult<Self> {
    let person = Person::read(pool, person_id).await?;
    let club_count = {
      let conn = &mut get_conn(pool).await?;
      club::table
        .filter(club::creator_id.eq(person_id))
        .count()
        .get_result(conn)
        .await
        .with_clubhouse_type(ClubhouseErrorType::CouldntFindPerson)?
    };
    let post_count = Post::count_for_creator(pool, person_id).await?;
    let subscription_count = ClubSubscription::count_for_person(pool, person_id).await?;
    Ok(PersonView {
      person,
      club_count,
      post_count,
      subscription_count,
    })
  }
}
