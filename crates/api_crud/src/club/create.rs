use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  club::{ClubResponse, CreateClub},
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  utils::clean_optional_text,
};
use clubhouse_db_schema::{
  source::club::{Club, ClubInsertForm},
  traits::Crud,
  views::structs::ClubView,
};
use clubhouse_utils::{
  error::ClubhouseResult,
  utils::validation::{is_valid_club_description, is_valid_club_name},
};

#[tracing::instrument(skip(context))]
pub async fn create_club(
  data: Json<CreateClub>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<ClubResponse>> {
  let data = data.into_inner();
  is_valid_club_name(&data.name)?;
  let description = clean_optional_text(data.description);
  if let Some(description) = &description {
    is_valid_club_description(description)?;
  }

  let form = ClubInsertForm {
    description,
    ..ClubInsertForm::new(data.name, local_user_view.person.id)
  };
  let club = Club::create(&mut context.pool(), &form).await?;
  let club_view =
    ClubView::from_club(&mut context.pool(), club, Some(local_user_view.person.id)).await?;

  Ok(Json(ClubResponse { club_view }))
}
