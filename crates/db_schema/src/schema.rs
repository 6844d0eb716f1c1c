pub mod sql_types {
  #[derive(diesel::sql_types::SqlType)]
  #[diesel(postgres_type(name = "vote_type_enum"))]
  pub struct VoteTypeEnum;
}

table! {
  club (id) {
    id -> Int4,
    #[max_length = 21]
    name -> Varchar,
    #[max_length = 300]
    description -> Nullable<Varchar>,
    creator_id -> Int4,
    published -> Timestamptz,
  }
}

table! {
  club_subscription (person_id, club_id) {
    person_id -> Int4,
    club_id -> Int4,
    published -> Timestamptz,
  }
}

table! {
  comment (id) {
    id -> Int4,
    creator_id -> Int4,
    post_id -> Int4,
    content -> Text,
    published -> Timestamptz,
    updated -> Nullable<Timestamptz>,
  }
}

table! {
  use diesel::sql_types::*;
  use super::sql_types::VoteTypeEnum;

  comment_vote (person_id, comment_id) {
    person_id -> Int4,
    comment_id -> Int4,
    vote_type -> VoteTypeEnum,
    published -> Timestamptz,
  }
}

table! {
  person (id) {
    id -> Int4,
    external_id -> Text,
    #[max_length = 255]
    name -> Varchar,
    avatar -> Nullable<Text>,
    published -> Timestamptz,
  }
}

table! {
  post (id) {
    id -> Int4,
    #[max_length = 200]
    name -> Varchar,
    body -> Nullable<Text>,
    creator_id -> Int4,
    club_id -> Int4,
    published -> Timestamptz,
    updated -> Nullable<Timestamptz>,
  }
}

table! {
  use diesel::sql_types::*;
  use super::sql_types::VoteTypeEnum;

  post_vote (person_id, post_id) {
    person_id -> Int4,
    post_id -> Int4,
    vote_type -> VoteTypeEnum,
    published -> Timestamptz,
  }
}

joinable!(club -> person (creator_id));
joinable!(club_subscription -> club (club_id));
joinable!(club_subscription -> person (person_id));
joinable!(comment -> person (creator_id));
joinable!(comment -> post (post_id));
joinable!(comment_vote -> comment (comment_id));
joinable!(comment_vote -> person (person_id));
joinable!(post -> club (club_id));
joinable!(post -> person (creator_id));
joinable!(post_vote -> person (person_id));
joinable!(post_vote -> post (post_id));

allow_tables_to_appear_in_same_query!(
  club,
  club_subscription,
  comment,
  comment_vote,
  person,
  post,
  post_vote,
);
