use crate::{
  newtypes::{ClubId, PersonId},
  schema::{club, club_subscription},
  source::club::{Club, ClubInsertForm, ClubSubscription, ClubSubscriptionForm},
  traits::Crud,
  utils::{get_conn, map_unique_violation, prefix_search, DbPool, SEARCH_LIMIT},
};
use clubhouse_utils::error::{
  ClubhouseError,
  ClubhouseErrorExt,
  ClubhouseErrorType,
  ClubhouseResult,
};
use diesel::{
  dsl::{exists, insert_into, select},
  BoolExpressionMethods,
  ExpressionMethods,
  QueryDsl,
  TextExpressionMethods,
};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncConnection, RunQueryDsl};

impl Crud for Club {
  type InsertForm = ClubInsertForm;
  type IdType = ClubId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let res = insert_into(club::table)
      .values(form)
      .get_result::<Self>(conn)
      .await;
    map_unique_violation(
      res,
      ClubhouseErrorType::ClubAlreadyExists,
      ClubhouseErrorType::CouldntCreateClub,
    )
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    club::table
      .find(id)
      .first(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindClub)
  }

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(club::table.find(id))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindClub)
  }
}

impl Club {
  pub async fn read_from_name(pool: &mut DbPool<'_>, name: &str) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    club::table
      .filter(club::name.eq(name))
      .first(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindClub)
  }

  /// Clubs whose name starts with `q`, alphabetically.
  pub async fn search(pool: &mut DbPool<'_>, q: &str) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    club::table
      .filter(club::name.like(prefix_search(q)))
      .order_by(club::name.asc())
      .limit(SEARCH_LIMIT)
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::NotFound)
  }

  /// Clubs the person subscribes to or created.
  pub async fn list_for_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    let subscribed = club_subscription::table
      .filter(club_subscription::person_id.eq(person_id))
      .select(club_subscription::club_id);
    club::table
      .filter(
        club::creator_id
          .eq(person_id)
          .or(club::id.eq_any(subscribed)),
      )
      .order_by(club::name.asc())
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::NotFound)
  }

  pub async fn subscriber_count(pool: &mut DbPool<'_>, club_id: ClubId) -> ClubhouseResult<i64> {
    let conn = &mut get_conn(pool).await?;
    club_subscription::table
      .filter(club_subscription::club_id.eq(club_id))
      .count()
      .get_result(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindClub)
  }
}

impl ClubSubscription {
  /// Subscribing twice keeps the existing row.
  pub async fn subscribe(
    pool: &mut DbPool<'_>,
    form: &ClubSubscriptionForm,
  ) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    insert_into(club_subscription::table)
      .values(form)
      .on_conflict_do_nothing()
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdateSubscription)
  }

  /// Subscribes, or unsubscribes if already subscribed. Returns whether the person is subscribed
  /// afterwards.
  pub async fn toggle(pool: &mut DbPool<'_>, form: &ClubSubscriptionForm) -> ClubhouseResult<bool> {
    let conn = &mut get_conn(pool).await?;
    conn
      .transaction::<_, ClubhouseError, _>(|conn| {
        async move {
          let pool = &mut conn.into();
          if Self::is_subscribed(pool, form.person_id, form.club_id).await? {
            Self::unsubscribe(pool, form).await?;
            Ok(false)
          } else {
            Self::subscribe(pool, form).await?;
            Ok(true)
          }
        }
        .scope_boxed()
      })
      .await
  }

  pub async fn unsubscribe(
    pool: &mut DbPool<'_>,
    form: &ClubSubscriptionForm,
  ) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(club_subscription::table.find((form.person_id, form.club_id)))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdateSubscription)
  }

  pub async fn is_subscribed(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    club_id: ClubId,
  ) -> ClubhouseResult<bool> {
    let conn = &mut get_conn(pool).await?;
    select(exists(
      club_subscription::table.find((person_id, club_id)),
    ))
    .get_result(conn)
    .await
    .with_clubhouse_type(ClubhouseErrorType::CouldntUpdateSubscription)
  }

  pub async fn count_for_person(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
  ) -> ClubhouseResult<i64> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      club_subscription::table
        .filter(club_subscription::person_id.eq(person_id))
        .count()
        .get_result(conn)
        .await?,
    )
  }
}
