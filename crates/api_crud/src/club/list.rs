use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  club::ListClubsResponse,
  context::ClubhouseContext,
  local_user_view::LocalUserView,
};
use clubhouse_db_schema::source::club::Club;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn list_clubs(
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<ListClubsResponse>> {
  let clubs = Club::list_for_person(&mut context.pool(), local_user_view.person.id).await?;
  Ok(Json(ListClubsResponse { clubs }))
}
