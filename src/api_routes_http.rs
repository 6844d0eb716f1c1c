use actix_web::web;
use clubhouse_api::{
  club::subscribe::{get_subscribed, subscribe_to_club},
  comment::vote::vote_on_comment,
  post::vote::vote_on_post,
};
use clubhouse_api_crud::{
  club::{create::create_club, list::list_clubs, read::get_club, search::search_clubs},
  comment::{create::create_comment, list::list_comments},
  person::read::read_person,
  post::{create::create_post, list::list_posts, read::get_post},
};

/// Registers every route under `/api/v3`.
pub fn config(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v3")
      // Club
      .service(
        web::scope("/club")
          .route("", web::get().to(get_club))
          .route("", web::post().to(create_club))
          .route("/list", web::get().to(list_clubs))
          .route("/search", web::get().to(search_clubs))
          .route("/subscribe", web::post().to(subscribe_to_club))
          .route("/subscribed", web::get().to(get_subscribed)),
      )
      // Post
      .service(
        web::scope("/post")
          .route("", web::get().to(get_post))
          .route("", web::post().to(create_post))
          .route("/list", web::get().to(list_posts))
          .route("/vote", web::post().to(vote_on_post)),
      )
      // Comment
      .service(
        web::scope("/comment")
          .route("", web::post().to(create_comment))
          .route("/list", web::get().to(list_comments))
          .route("/vote", web::post().to(vote_on_comment)),
      )
      // User
      .service(web::scope("/user").route("", web::get().to(read_person))),
  );
}
