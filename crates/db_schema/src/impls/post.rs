use crate::{
  newtypes::{PersonId, PostId},
  schema::{post, post_vote},
  source::{
    post::{Post, PostInsertForm, PostVote, PostVoteForm},
    vote::VoteType,
  },
  traits::{Crud, Votable},
  utils::{get_conn, map_vote_insert, DbPool},
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{
  dsl::{exists, insert_into, select, update},
  ExpressionMethods,
  OptionalExtension,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntCreatePost)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(id)
      .first(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindPost)
  }

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post::table.find(id))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindPost)
  }
}

impl Post {
  pub async fn count_for_creator(
    pool: &mut DbPool<'_>,
    creator_id: PersonId,
  ) -> ClubhouseResult<i64> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      post::table
        .filter(post::creator_id.eq(creator_id))
        .count()
        .get_result(conn)
        .await?,
    )
  }
}

impl Votable for PostVote {
  type Form = PostVoteForm;
  type IdType = PostId;

  fn form(person_id: PersonId, post_id: PostId, vote_type: VoteType) -> Self::Form {
    PostVoteForm::new(person_id, post_id, vote_type)
  }

  fn target_not_found() -> ClubhouseErrorType {
    ClubhouseErrorType::CouldntFindPost
  }

  async fn target_exists(pool: &mut DbPool<'_>, post_id: PostId) -> ClubhouseResult<bool> {
    let conn = &mut get_conn(pool).await?;
    select(exists(post::table.find(post_id)))
      .get_result(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }

  async fn read_vote(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    post_id: PostId,
  ) -> ClubhouseResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    post_vote::table
      .find((person_id, post_id))
      .first(conn)
      .await
      .optional()
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }

  async fn vote(pool: &mut DbPool<'_>, form: &Self::Form) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let res = insert_into(post_vote::table)
      .values(form)
      .get_result::<Self>(conn)
      .await;
    map_vote_insert(res, Self::target_not_found())
  }

  async fn update_vote(pool: &mut DbPool<'_>, form: &Self::Form) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    update(post_vote::table.find((form.person_id, form.post_id)))
      .set(post_vote::vote_type.eq(form.vote_type))
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdateVote)
  }

  async fn remove(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    post_id: PostId,
  ) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(post_vote::table.find((person_id, post_id)))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntRemoveVote)
  }

  async fn list_for_target(pool: &mut DbPool<'_>, post_id: PostId) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    post_vote::table
      .filter(post_vote::post_id.eq(post_id))
      .order_by(post_vote::published.asc())
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }
}

impl PostVote {
  pub async fn list_for_posts(
    pool: &mut DbPool<'_>,
    post_ids: Vec<PostId>,
  ) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    post_vote::table
      .filter(post_vote::post_id.eq_any(post_ids))
      .order_by(post_vote::published.asc())
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }
}
