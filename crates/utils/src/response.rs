use crate::error::{ClubhouseError, ClubhouseErrorType};
use actix_web::{dev::ServiceResponse, middleware::ErrorHandlerResponse, HttpResponse};

/// Extractor failures (malformed json, missing query params) answer with plain text, this wraps
/// them into the `{"error": ...}` shape which every handler error already has.
pub fn jsonify_plain_text_errors<BODY>(
  res: ServiceResponse<BODY>,
) -> actix_web::Result<ErrorHandlerResponse<BODY>> {
  let message = match res.response().error() {
    None => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    Some(e) if e.as_error::<ClubhouseError>().is_some() => {
      return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()))
    }
    Some(e) => e.to_string(),
  };

  let (req, res) = res.into_parts();
  let response = HttpResponse::build(res.status()).json(ClubhouseErrorType::Unknown(message));

  let service_response = ServiceResponse::new(req, response);
  Ok(ErrorHandlerResponse::Response(
    service_response.map_into_right_body(),
  ))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    error::ErrorInternalServerError,
    http::StatusCode,
    middleware::ErrorHandlers,
    test,
    web,
    App,
    Error,
    Handler,
    Responder,
  };
  use pretty_assertions::assert_eq;

  #[actix_web::test]
  async fn test_non_error_responses_are_not_modified() {
    async fn ok_service() -> actix_web::Result<String, Error> {
      Ok("Oll Korrect".to_string())
    }

    check_for_jsonification(ok_service, StatusCode::OK, "Oll Korrect").await;
  }

  #[actix_web::test]
  async fn test_clubhouse_errors_are_not_modified() {
    async fn clubhouse_error_service() -> actix_web::Result<String, ClubhouseError> {
      Err(ClubhouseError::from(ClubhouseErrorType::VoteAlreadyExists))
    }

    check_for_jsonification(
      clubhouse_error_service,
      StatusCode::CONFLICT,
      "{\"error\":\"vote_already_exists\"}",
    )
    .await;
  }

  #[actix_web::test]
  async fn test_generic_errors_are_jsonified_as_unknown_errors() {
    async fn generic_error_service() -> actix_web::Result<String, Error> {
      Err(ErrorInternalServerError("Not a clubhouse error"))
    }

    check_for_jsonification(
      generic_error_service,
      StatusCode::INTERNAL_SERVER_ERROR,
      "{\"error\":\"unknown\",\"message\":\"Not a clubhouse error\"}",
    )
    .await;
  }

  async fn check_for_jsonification(
    service: impl Handler<(), Output = impl Responder + 'static>,
    expected_status_code: StatusCode,
    expected_body: &str,
  ) {
    let app = test::init_service(
      App::new()
        .wrap(ErrorHandlers::new().default_handler(jsonify_plain_text_errors))
        .route("/", web::get().to(service)),
    )
    .await;
    let req = test::TestRequest::default().to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), expected_status_code);

    let body = test::read_body(res).await;
    assert_eq!(body, expected_body);
  }
}
