use clubhouse_db_schema::{
  newtypes::{ClubId, PaginationCursor, PersonId, PostId},
  source::vote::VoteType,
  views::structs::PostView,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumString};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Create a post.
pub struct CreatePost {
  pub name: String,
  pub club_id: ClubId,
  /// An optional body for the post in markdown.
  pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
/// Get a post.
pub struct GetPost {
  pub id: PostId,
}

#[derive(EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
/// Which posts a listing shows.
pub enum FeedType {
  #[default]
  All,
  /// Posts of clubs the signed in person subscribes to or created.
  Subscribed,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
/// Get a page of posts, newest first.
pub struct GetPosts {
  pub club_name: Option<String>,
  pub creator_id: Option<PersonId>,
  pub feed: Option<FeedType>,
  pub limit: Option<i64>,
  /// The `next_cursor` of the previous page.
  pub cursor: Option<PaginationCursor>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
  /// Absent on the last page.
  pub next_cursor: Option<PaginationCursor>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
/// Vote on a post. Repeating the current vote withdraws it.
pub struct CreatePostVote {
  pub post_id: PostId,
  pub vote_type: VoteType,
}
