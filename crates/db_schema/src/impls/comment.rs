use crate::{
  newtypes::{CommentId, PersonId, PostId},
  schema::{comment, comment_vote},
  source::{
    comment::{Comment, CommentInsertForm, CommentVote, CommentVoteForm},
    vote::VoteType,
  },
  traits::{Crud, Votable},
  utils::{get_conn, map_vote_insert, DbPool},
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{
  dsl::{count_star, exists, insert_into, select, update},
  ExpressionMethods,
  OptionalExtension,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type IdType = CommentId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntCreateComment)
  }

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(id)
      .first(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindComment)
  }

  async fn delete(pool: &mut DbPool<'_>, id: Self::IdType) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment::table.find(id))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntFindComment)
  }
}

impl Comment {
  /// Number of comments per post, posts without comments are left out.
  pub async fn count_for_posts(
    pool: &mut DbPool<'_>,
    post_ids: Vec<PostId>,
  ) -> ClubhouseResult<Vec<(PostId, i64)>> {
    let conn = &mut get_conn(pool).await?;
    Ok(
      comment::table
        .filter(comment::post_id.eq_any(post_ids))
        .group_by(comment::post_id)
        .select((comment::post_id, count_star()))
        .load(conn)
        .await?,
    )
  }
}

impl Votable for CommentVote {
  type Form = CommentVoteForm;
  type IdType = CommentId;

  fn form(person_id: PersonId, comment_id: CommentId, vote_type: VoteType) -> Self::Form {
    CommentVoteForm::new(person_id, comment_id, vote_type)
  }

  fn target_not_found() -> ClubhouseErrorType {
    ClubhouseErrorType::CouldntFindComment
  }

  async fn target_exists(pool: &mut DbPool<'_>, comment_id: CommentId) -> ClubhouseResult<bool> {
    let conn = &mut get_conn(pool).await?;
    select(exists(comment::table.find(comment_id)))
      .get_result(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }

  async fn read_vote(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    comment_id: CommentId,
  ) -> ClubhouseResult<Option<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment_vote::table
      .find((person_id, comment_id))
      .first(conn)
      .await
      .optional()
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }

  async fn vote(pool: &mut DbPool<'_>, form: &Self::Form) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    let res = insert_into(comment_vote::table)
      .values(form)
      .get_result::<Self>(conn)
      .await;
    map_vote_insert(res, Self::target_not_found())
  }

  async fn update_vote(pool: &mut DbPool<'_>, form: &Self::Form) -> ClubhouseResult<Self> {
    let conn = &mut get_conn(pool).await?;
    update(comment_vote::table.find((form.person_id, form.comment_id)))
      .set(comment_vote::vote_type.eq(form.vote_type))
      .get_result::<Self>(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntUpdateVote)
  }

  async fn remove(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    comment_id: CommentId,
  ) -> ClubhouseResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(comment_vote::table.find((person_id, comment_id)))
      .execute(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntRemoveVote)
  }

  async fn list_for_target(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
  ) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment_vote::table
      .filter(comment_vote::comment_id.eq(comment_id))
      .order_by(comment_vote::published.asc())
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }
}

impl CommentVote {
  pub async fn list_for_comments(
    pool: &mut DbPool<'_>,
    comment_ids: Vec<CommentId>,
  ) -> ClubhouseResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment_vote::table
      .filter(comment_vote::comment_id.eq_any(comment_ids))
      .order_by(comment_vote::published.asc())
      .load(conn)
      .await
      .with_clubhouse_type(ClubhouseErrorType::CouldntReadVotes)
  }
}
