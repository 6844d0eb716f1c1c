use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  club::{ClubResponse, GetClub},
  context::ClubhouseContext,
  local_user_view::LocalUserView,
};
use clubhouse_db_schema::views::structs::ClubView;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn get_club(
  data: Query<GetClub>,
  context: Data<ClubhouseContext>,
  local_user_view: Option<LocalUserView>,
) -> ClubhouseResult<Json<ClubResponse>> {
  let person_id = local_user_view.map(|l| l.person.id);
  let club_view = ClubView::read_from_name(&mut context.pool(), &data.name, person_id).await?;
  Ok(Json(ClubResponse { club_view }))
}
