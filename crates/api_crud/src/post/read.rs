use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  post::{GetPost, PostResponse},
};
use clubhouse_db_schema::views::structs::PostView;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn get_post(
  data: Query<GetPost>,
  context: Data<ClubhouseContext>,
  local_user_view: Option<LocalUserView>,
) -> ClubhouseResult<Json<PostResponse>> {
  let person_id = local_user_view.map(|l| l.person.id);
  let post_view = PostView::read(&mut context.pool(), data.id, person_id).await?;
  Ok(Json(PostResponse { post_view }))
}
