use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  comment::{GetComments, GetCommentsResponse},
  context::ClubhouseContext,
  local_user_view::LocalUserView,
};
use clubhouse_db_schema::views::comment_view::CommentQuery;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn list_comments(
  data: Query<GetComments>,
  context: Data<ClubhouseContext>,
  local_user_view: Option<LocalUserView>,
) -> ClubhouseResult<Json<GetCommentsResponse>> {
  let data = data.into_inner();
  let person_id = local_user_view.map(|l| l.person.id);

  let (comments, next_cursor) = CommentQuery {
    post_id: data.post_id,
    cursor: data.cursor,
    limit: data.limit,
  }
  .list(&mut context.pool(), person_id)
  .await?;

  Ok(Json(GetCommentsResponse {
    comments,
    next_cursor,
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::comment::create::create_comment;
  use clubhouse_api_common::comment::CreateComment;
  use clubhouse_db_schema::{
    newtypes::PostId,
    source::{
      club::{Club, ClubInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::build_db_pool_for_tests,
  };
  use clubhouse_utils::error::ClubhouseErrorType;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  #[ignore = "needs a postgres database at CLUBHOUSE_DATABASE_URL"]
  async fn test_create_and_list_comments() -> ClubhouseResult<()> {
    let pool = build_db_pool_for_tests().await;
    let context = Data::new(ClubhouseContext::create(pool));
    let pool = &mut context.pool();

    let person_form = PersonInsertForm::new("test|api_comments".into(), "ola".into());
    let person = Person::upsert(pool, &person_form).await?;
    let club_form = ClubInsertForm::new("test_api_comments".into(), person.id);
    let club = Club::create(pool, &club_form).await?;
    let post_form = PostInsertForm::new("talk here".into(), person.id, club.id);
    let post = Post::create(pool, &post_form).await?;
    let view = LocalUserView { person: person.clone() };

    let data = CreateComment {
      post_id: post.id,
      content: " well said ".into(),
    };
    let created = create_comment(Json(data), context.clone(), view.clone()).await?;
    assert_eq!("well said", created.comment_view.comment.content);
    assert_eq!(0, created.comment_view.score);

    let missing_post = CreateComment {
      post_id: PostId(-1),
      content: "anyone?".into(),
    };
    let err = create_comment(Json(missing_post), context.clone(), view)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::CouldntFindPost), err);

    let query = GetComments {
      post_id: post.id,
      limit: None,
      cursor: None,
    };
    let res = list_comments(Query(query), context.clone(), None).await?;
    assert_eq!(1, res.comments.len());
    assert_eq!(None, res.next_cursor);

    Person::delete(pool, person.id).await?;
    Ok(())
  }
}
