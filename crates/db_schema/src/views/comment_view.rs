use crate::{
  newtypes::{CommentId, PaginationCursor, PersonId, PostId},
  schema::{comment, person},
  source::{
    comment::{Comment, CommentVote},
    person::Person,
  },
  traits::Votable,
  utils::{decode_cursor, fetch_limit, get_conn, paginate, DbPool},
  views::structs::CommentView,
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{BoolExpressionMethods, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;

type CommentRow = (Comment, Person);

impl CommentView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    comment_id: CommentId,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<Self> {
    let row = {
      let conn = &mut get_conn(pool).await?;
      comment::table
        .inner_join(person::table)
        .filter(comment::id.eq(comment_id))
        .select((Comment::as_select(), Person::as_select()))
        .first::<CommentRow>(conn)
        .await
        .with_clubhouse_type(ClubhouseErrorType::CouldntFindComment)?
    };
    let votes = CommentVote::list_for_target(pool, comment_id).await?;
    Ok(CommentView::new(row, votes, my_person_id))
  }
}

#[derive(Debug, Clone)]
pub struct CommentQuery {
  pub post_id: PostId,
  pub cursor: Option<PaginationCursor>,
  pub limit: Option<i64>,
}

impl CommentQuery {
  pub async fn list(
    self,
    pool: &mut DbPool<'_>,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<(Vec<CommentView>, Option<PaginationCursor>)> {
    let limit = fetch_limit(self.limit)?;
    let rows = {
      let conn = &mut get_conn(pool).await?;
      let mut query = comment::table
        .inner_join(person::table)
        .filter(comment::post_id.eq(self.post_id))
        .select((Comment::as_select(), Person::as_select()))
        .into_boxed();

      if let Some(cursor) = &self.cursor {
        let (published, id) = decode_cursor(cursor)?;
        query = query.filter(
          comment::published
            .lt(published)
            .or(comment::published.eq(published).and(comment::id.le(id))),
        );
      }

      query
        .order_by((comment::published.desc(), comment::id.desc()))
        .limit(limit + 1)
        .load::<CommentRow>(conn)
        .await?
    };

    let (rows, next_cursor) = paginate(rows, limit, |(comment, _)| {
      PaginationCursor::new(comment.published, comment.id.0)
    });
    let comment_ids = rows.iter().map(|(comment, _)| comment.id).collect();
    let votes = CommentVote::list_for_comments(pool, comment_ids).await?;

    let views = rows
      .into_iter()
      .map(|row| {
        let comment_id = row.0.id;
        let comment_votes = votes
          .iter()
          .filter(|v| v.comment_id == comment_id)
          .cloned()
          .collect();
        CommentView::new(row, comment_votes, my_person_id)
      })
      .collect();
    Ok((views, next_cursor))
  }
}
