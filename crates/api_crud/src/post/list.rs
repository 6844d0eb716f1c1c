use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  post::{GetPosts, GetPostsResponse},
  utils::feed_subscriber,
};
use clubhouse_db_schema::views::post_view::PostQuery;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn list_posts(
  data: Query<GetPosts>,
  context: Data<ClubhouseContext>,
  local_user_view: Option<LocalUserView>,
) -> ClubhouseResult<Json<GetPostsResponse>> {
  let data = data.into_inner();
  let subscribed_by = feed_subscriber(data.feed, local_user_view.as_ref())?;
  let person_id = local_user_view.map(|l| l.person.id);

  let (posts, next_cursor) = PostQuery {
    club_name: data.club_name,
    creator_id: data.creator_id,
    subscribed_by,
    cursor: data.cursor,
    limit: data.limit,
  }
  .list(&mut context.pool(), person_id)
  .await?;

  Ok(Json(GetPostsResponse { posts, next_cursor }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::post::create::create_post;
  use clubhouse_api_common::post::CreatePost;
  use clubhouse_db_schema::{
    source::{
      club::{Club, ClubInsertForm},
      person::{Person, PersonInsertForm},
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
  async fn test_create_and_list_posts() -> ClubhouseResult<()> {
    let pool = build_db_pool_for_tests().await;
    let context = Data::new(ClubhouseContext::create(pool));
    let pool = &mut context.pool();

    let person_form = PersonInsertForm::new("test|api_list_posts".into(), "ned".into());
    let person = Person::upsert(pool, &person_form).await?;
    let club_form = ClubInsertForm::new("test_api_list_posts".into(), person.id);
    let club = Club::create(pool, &club_form).await?;
    let view = LocalUserView { person: person.clone() };

    for name in ["first", "second", "third"] {
      let data = CreatePost {
        name: name.into(),
        club_id: club.id,
        body: Some(format!("body of {name}")),
      };
      create_post(Json(data), context.clone(), view.clone()).await?;
    }

    let query = GetPosts {
      club_name: Some(club.name.clone()),
      limit: Some(2),
      ..Default::default()
    };
    let page = list_posts(Query(query.clone()), context.clone(), None).await?;
    let names: Vec<_> = page.posts.iter().map(|p| p.post.name.clone()).collect();
    assert_eq!(vec!["third".to_string(), "second".to_string()], names);

    let next = GetPosts {
      cursor: page.next_cursor.clone(),
      ..query
    };
    let last_page = list_posts(Query(next), context.clone(), None).await?;
    assert_eq!(1, last_page.posts.len());
    assert_eq!(None, last_page.next_cursor);

    let too_many = GetPosts {
      limit: Some(51),
      ..Default::default()
    };
    let err = list_posts(Query(too_many), context.clone(), None)
      .await
      .err()
      .map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::InvalidFetchLimit), err);

    Person::delete(pool, person.id).await?;
    Ok(())
  }
}
