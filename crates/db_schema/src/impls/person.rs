use crate::{
  newtypes::PersonId,
  schema::person,
  source::person::{Person, PersonInsertForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{dsl::insert_into, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdatePerson)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(id)
      .first(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindPerson)
  }

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(id))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::NotFound)
  }
}

impl Person {
  /// Creates the person on first sign in, afterwards keeps name and avatar in sync with the
  /// identity provider.
  pub async fn upsert(pool: &mut DbPool<'_>, form: &PersonInsertForm) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .on_conflict(person::external_id)
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdatePerson)
  }

  pub async fn read_from_external_id(
    pool: &mut DbPool<'_>,
    external_id: &str,
  ) -> ClubhouseResult<Option<Self>> {
    use diesel::OptionalExtension;
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(person::external_id.eq(external_id))
      .first(conn)
      .await
      .optional()
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindPerson)
  }
}
