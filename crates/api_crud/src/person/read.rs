use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  context::ClubhouseContext,
  person::{GetPersonDetails, GetPersonDetailsResponse},
};
use clubhouse_db_schema::views::structs::PersonView;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn read_person(
  data: Query<GetPersonDetails>,
  context: Data<ClubhouseContext>,
) -> ClubhouseResult<Json<GetPersonDetailsResponse>> {
  let person_view = PersonView::read(&mut context.pool(), data.person_id).await?;
  Ok(Json(GetPersonDetailsResponse { person_view }))
}
