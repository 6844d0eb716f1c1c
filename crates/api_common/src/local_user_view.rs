use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use clubhouse_db_schema::source::person::Person;
use clubhouse_utils::error::{ClubhouseError, ClubhouseErrorType};
use std::future::{ready, Ready};

/// The signed in person, placed into the request extensions by the session middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUserView {
  pub person: Person,
}

/// Rejects the request with `NotLoggedIn` before the handler runs when nobody is signed in.
/// Use `Option<LocalUserView>` for handlers which also serve anonymous requests.
impl FromRequest for LocalUserView {
  type Error = ClubhouseError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalUserView>() {
      Some(c) => Ok(c.clone()),
      None => Err(ClubhouseErrorType::NotLoggedIn.into()),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;
  use chrono::Utc;
  use clubhouse_db_schema::newtypes::PersonId;
  use pretty_assertions::assert_eq;

  #[tokio::test]
  async fn test_missing_view_is_not_logged_in() {
    let req = TestRequest::default().to_http_request();
    let err = LocalUserView::extract(&req).await.err().map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::NotLoggedIn), err);
  }

  #[tokio::test]
  async fn test_view_from_extensions() {
    let view = LocalUserView {
      person: Person {
        id: PersonId(7),
        external_id: "test|7".into(),
        name: "gus".into(),
        avatar: None,
        published: Utc::now(),
      },
    };
    let req = TestRequest::default().to_http_request();
    req.extensions_mut().insert(view.clone());
    let extracted = LocalUserView::extract(&req).await.ok();
    assert_eq!(Some(view), extracted);
  }
}
