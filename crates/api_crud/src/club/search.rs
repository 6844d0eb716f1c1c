use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  club::{SearchClubs, SearchClubsResponse},
  context::ClubhouseContext,
};
use clubhouse_db_schema::source::club::Club;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn search_clubs(
  data: Query<SearchClubs>,
  context: Data<ClubhouseContext>,
) -> ClubhouseResult<Json<SearchClubsResponse>> {
  // An empty query would match every club
  let clubs = if data.q.trim().is_empty() {
    Vec::new()
  } else {
    Club::search(&mut context.pool(), &data.q).await?
  };
  Ok(Json(SearchClubsResponse { clubs }))
}
