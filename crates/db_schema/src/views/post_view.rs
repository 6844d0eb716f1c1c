use crate::{
  newtypes::{PaginationCursor, PersonId, PostId},
  schema::{club, club_subscription, person, post},
  source::{
    club::Club,
    comment::Comment,
    person::Person,
    post::{Post, PostVote},
  },
  traits::Votable,
  utils::{decode_cursor, fetch_limit, get_conn, paginate, DbPool},
  views::structs::PostView,
};
use clubhouse_utils::error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult};
use diesel::{
  BoolExpressionMethods,
  ExpressionMethods,
  QueryDsl,
  SelectableHelper,
};
use diesel_async::RunQueryDsl;
use std::collections::HashMap;

type PostRow = (Post, Person, Club);

impl PostView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<Self> {
    let row = {
      let conn = &mut get_conn(pool).await?;
      post::table
        .inner_join(person::table)
        .inner_join(club::table)
        .filter(post::id.eq(post_id))
        .select((Post::as_select(), Person::as_select(), Club::as_select()))
        .first::<PostRow>(conn)
        .await
        .with_clubhouse_type(ClubhouseErrorType::CouldntFindPost)?
    };
    let votes = PostVote::list_for_target(pool, post_id).await?;
    let comment_count = Comment::count_for_posts(pool, vec![post_id])
      .await?
      .as_slice()
      .first()
      .map(|(_, count)| *count)
      .unwrap_or(0);
    Ok(PostView::new(row, votes, comment_count, my_person_id))
  }
}

/// Lists posts newest first, one page at a time.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
  pub club_name: Option<String>,
  pub creator_id: Option<PersonId>,
  /// Only posts of clubs this person subscribes to or created.
  pub subscribed_by: Option<PersonId>,
  pub cursor: Option<PaginationCursor>,
  pub limit: Option<i64>,
}

impl PostQuery {
  pub async fn list(
    self,
    pool: &mut DbPool<'_>,
    my_person_id: Option<PersonId>,
  ) -> ClubhouseResult<(Vec<PostView>, Option<PaginationCursor>)> {
    let limit = fetch_limit(self.limit)?;
    let rows = {
      let conn = &mut get_conn(pool).await?;
      let mut query = post::table
        .inner_join(person::table)
        .inner_join(club::table)
        .select((Post::as_select(), Person::as_select(), Club::as_select()))
        .into_boxed();

      if let Some(club_name) = self.club_name {
        query = query.filter(club::name.eq(club_name));
      }
      if let Some(creator_id) = self.creator_id {
        query = query.filter(post::creator_id.eq(creator_id));
      }
      if let Some(person_id) = self.subscribed_by {
        let subscribed = club_subscription::table
          .filter(club_subscription::person_id.eq(person_id))
          .select(club_subscription::club_id);
        query = query.filter(
          club::creator_id
            .eq(person_id)
            .or(post::club_id.eq_any(subscribed)),
        );
      }
      // The cursor points at the first post of the requested page
      if let Some(cursor) = &self.cursor {
        let (published, id) = decode_cursor(cursor)?;
        query = query.filter(
          post::published
            .lt(published)
            .or(post::published.eq(published).and(post::id.le(id))),
        );
      }

      query
        .order_by((post::published.desc(), post::id.desc()))
        .limit(limit + 1)
        .load::<PostRow>(conn)
        .await?
    };

    let (rows, next_cursor) = paginate(rows, limit, |(post, _, _)| {
      PaginationCursor::new(post.published, post.id.0)
    });
    let post_ids: Vec<PostId> = rows.iter().map(|(post, _, _)| post.id).collect();
    let votes = PostVote::list_for_posts(pool, post_ids.clone()).await?;
    let comment_counts: HashMap<PostId, i64> = Comment::count_for_posts(pool, post_ids)
      .await?
      .into_iter()
      .collect();

    let views = rows
      .into_iter()
      .map(|row| {
        let post_id = row.0.id;
        let post_votes = votes
          .iter()
          .filter(|v| v.post_id == post_id)
          .cloned()
          .collect();
        let comment_count = comment_counts.get(&post_id).copied().unwrap_or(0);
        PostView::new(row, post_votes, comment_count, my_person_id)
      })
      .collect();
    Ok((views, next_cursor))
  }
}
