use actix_web::web::{Data, Json};
use clubhouse_api_common::{
  comment::{CommentResponse, CreateComment},
  context::ClubhouseContext,
  local_user_view::LocalUserView,
};
use clubhouse_db_schema::{
  source::{
    comment::{Comment, CommentInsertForm},
    post::Post,
  },
  traits::Crud,
  views::structs::CommentView,
};
use clubhouse_utils::{error::ClubhouseResult, utils::validation::is_valid_comment_content};

#[tracing::instrument(skip(context))]
pub async fn create_comment(
  data: Json<CreateComment>,
  context: Data<ClubhouseContext>,
  local_user_view: LocalUserView,
) -> ClubhouseResult<Json<CommentResponse>> {
  is_valid_comment_content(&data.content)?;
  let post = Post::read(&mut context.pool(), data.post_id).await?;

  let person_id = local_user_view.person.id;
  let form = CommentInsertForm::new(person_id, post.id, data.content.trim().to_string());
  let comment = Comment::create(&mut context.pool(), &form).await?;

  let comment_view = CommentView::read(&mut context.pool(), comment.id, Some(person_id)).await?;
  Ok(Json(CommentResponse { comment_view }))
}
