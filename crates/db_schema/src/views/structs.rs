use crate::{
  aggregates::{score, vote_of},
  newtypes::PersonId,
  source::{
    club::Club,
    comment::{Comment, CommentVote},
    person::Person,
    post::{Post, PostVote},
    vote::VoteType,
  },
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A post view, with all votes on the post.
pub struct PostView {
  pub post: Post,
  pub creator: Person,
  pub club: Club,
  pub votes: Vec<PostVote>,
  pub score: i64,
  pub comment_count: i64,
  /// The vote of the person viewing the post.
  pub my_vote: Option<VoteType>,
}

impl PostView {
  pub fn new(
    (post, creator, club): (Post, Person, Club),
    votes: Vec<PostVote>,
    comment_count: i64,
    my_person_id: Option<PersonId>,
  ) -> Self {
    let my_vote = my_person_id.and_then(|id| vote_of(&votes, id));
    PostView {
      post,
      creator,
      club,
      score: score(&votes),
      votes,
      comment_count,
      my_vote,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
/// A comment view, with all votes on the comment.
pub struct CommentView {
  pub comment: Comment,
  pub creator: Person,
  pub votes: Vec<CommentVote>,
  pub score: i64,
  pub my_vote: Option<VoteType>,
}

impl CommentView {
  pub fn new(
    (comment, creator): (Comment, Person),
    votes: Vec<CommentVote>,
    my_person_id: Option<PersonId>,
  ) -> Self {
    let my_vote = my_person_id.and_then(|id| vote_of(&votes, id));
    CommentView {
      comment,
      creator,
      score: score(&votes),
      votes,
      my_vote,
    }
  }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ClubView {
  pub club: Club,
  pub creator: Person,
  pub subscribers: i64,
  pub subscribed: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct PersonView {
  pub person: Person,
  pub club_count: i64,
  pub post_count: i64,
  pub subscription_count: i64,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::newtypes::{ClubId, PostId};
  use chrono::Utc;
  use pretty_assertions::assert_eq;

  fn person(id: i32) -> Person {
    Person {
      id: PersonId(id),
      external_id: format!("test|{id}"),
      name: format!("person_{id}"),
      avatar: None,
      published: Utc::now(),
    }
  }

  fn post_vote(person_id: i32, vote_type: VoteType) -> PostVote {
    PostVote {
      person_id: PersonId(person_id),
      post_id: PostId(1),
      vote_type,
      published: Utc::now(),
    }
  }

  #[test]
  fn test_post_view_derives_score_and_my_vote() {
    let creator = person(1);
    let club = Club {
      id: ClubId(1),
      name: "rust".into(),
      description: None,
      creator_id: creator.id,
      published: Utc::now(),
    };
    let post = Post {
      id: PostId(1),
      name: "hello".into(),
      body: None,
      creator_id: creator.id,
      club_id: club.id,
      published: Utc::now(),
      updated: None,
    };
    let votes = vec![
      post_vote(1, VoteType::Up),
      post_vote(2, VoteType::Up),
      post_vote(3, VoteType::Down),
    ];

    let view = PostView::new(
      (post.clone(), creator.clone(), club.clone()),
      votes.clone(),
      4,
      Some(PersonId(3)),
    );
    assert_eq!(1, view.score);
    assert_eq!(4, view.comment_count);
    assert_eq!(Some(VoteType::Down), view.my_vote);

    let anonymous = PostView::new((post, creator, club), votes, 0, None);
    assert_eq!(None, anonymous.my_vote);
  }
}
