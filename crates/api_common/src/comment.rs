use clubhouse_db_schema::{
  newtypes::{CommentId, PaginationCursor, PostId},
  source::vote::VoteType,
  views::structs::CommentView,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Create a comment.
pub struct CreateComment {
  pub post_id: PostId,
  pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment_view: CommentView,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Get a page of the comments on a post, newest first.
pub struct GetComments {
  pub post_id: PostId,
  pub limit: Option<i64>,
  pub cursor: Option<PaginationCursor>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetCommentsResponse {
  pub comments: Vec<CommentView>,
  pub next_cursor: Option<PaginationCursor>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Vote on a comment. Repeating the current vote withdraws it.
pub struct CreateCommentVote {
  pub comment_id: CommentId,
  pub vote_type: VoteType,
}
