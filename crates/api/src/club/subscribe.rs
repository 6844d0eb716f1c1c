use actix_web::web::{Data, Json, Query};
use clubhouse_api_common::{
  club::{GetSubscribed, SubscribeToClub, SubscriptionResponse},
  context::ClubhouseContext,
  local_user_view::LocalUserView,
};
use clubhouse_db_schema::{
  source::club::{Club, ClubSubscription, ClubSubscriptionForm},
  traits::Crud,
};
use clubhouse_utils::error::ClubhouseResult;

/// Subscribes to the club, or unsubscribes if already subscribed.
#[tracing::instrument(skip(context))]
pub async fn subscribe_to_club(
  data: Json<SubscribeToClub>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<SubscriptionResponse>> {
  let club = Club::read(&mut context.pool(), data.club_id).await?;
  let form = ClubSubscriptionForm::new(local_user_view.person.id, club.id);
  let subscribed = ClubSubscription::toggle(&mut context.pool(), &form).await?;

  Ok(Json(SubscriptionResponse { subscribed }))
}

#[tracing::instrument(skip(context))]
pub async fn get_subscribed(
  data: Query<GetSubscribed>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<SubscriptionResponse>> {
  let subscribed =
    ClubSubscription::is_subscribed(&mut context.pool(), local_user_view.person.id, data.club_id)
      .await?;
  Ok(Json(SubscriptionResponse { subscribed }))
}
