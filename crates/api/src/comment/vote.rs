use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  comment::CreateCommentVote,
  context::ClubhouseContext,
  local_user_view::LocalUserView,
  vote::{service::apply_vote_in_transaction, VoteResponse},
};
use clubhouse_db_schema::source::comment::CommentVote;
use clubhouse_utils::error::ClubhouseResult;

#[tracing::instrument(skip(context))]
pub async fn vote_on_comment(
  data: Json<CreateCommentVote>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<VoteResponse>> {
  let score = apply_vote_in_transaction::<CommentVote>(
    &mut context.pool(),
    local_user_view.person.id,
    data.comment_id,
    data.vote_type,
  )
  .await?;

  Ok(Json(VoteResponse { score }))
}
