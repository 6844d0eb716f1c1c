use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  post::{CreatePost, PostResponse},
  utils::clean_optional_text,
};
use clubhouse_db_schema::{
  source::{
    club::Club,
    post::{Post, PostInsertForm},
  },
  traits::Crud,
  views::structs::PostView,
};
use clubhouse_utils::{
  error::ClubhouseResult,
  utils::validation::{is_valid_post_body_field, is_valid_post_title},
};

#[tracing::instrument(skip(context))]
pub async fn create_post(
  data: Json<CreatePost>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<PostResponse>> {
  let data = data.into_inner();
  is_valid_post_title(&data.name)?;
  let body = clean_optional_text(data.body);
  if let Some(body) = &body {
    is_valid_post_body_field(body)?;
  }

  let club = Club::read(&mut context.pool(), data.club_id).await?;
  let person_id = local_user_view.person.id;
  let form = PostInsertForm {
    body,
    ..PostInsertForm::new(data.name.trim().to_string(), person_id, club.id)
  };
  let post = Post::create(&mut context.pool(), &form).await?;

  let post_view = PostView::read(&mut context.pool(), post.id, Some(person_id)).await?;
  Ok(Json(PostResponse { post_view }))
}
