use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  post::CreatePostVote,
  vote::{service::apply_vote_in_transaction, VoteResponse},
};
use clubhouse_db_schema::source::post::PostVote;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn vote_on_post(
  data: Json<CreatePostVote>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<VoteResponse>> {
  let score = apply_vote_in_transaction::<PostVote>(
    &mut context.pool(),
    local_user_view.person.id,
    data.post_id,
    data.vote_type,
  )
  .await?;

  Ok(Json(VoteResponse { score }))
}
