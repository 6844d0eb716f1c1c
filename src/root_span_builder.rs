use actix_web::{
  dev::{ServiceRequest, ServiceResponse},
  http::StatusCode,
  ResponseError,
};
use tracing::Span;
use tracing_actix_web::{root_span_macro::private::get_request_id, RootSpanBuilder};

/// Root span per request, which only logs the error details of failed requests instead of
/// emitting an event for every request.
pub struct QuieterRootSpanBuilder;

impl RootSpanBuilder for QuieterRootSpanBuilder {
  fn on_request_start(request: &ServiceRequest) -> Span {
    let request_id = get_request_id(request);

    tracing::info_span!(
        "HTTP request",
        http.method = %request.method(),
        http.target = %request.uri().path(),
        http.status_code = tracing::field::Empty,
        request_id = %request_id,
        exception.message = tracing::field::Empty,
        exception.details = tracing::field::Empty,
    )
  }

  fn on_request_end<B>(span: Span, outcome: &Result<ServiceResponse<B>, actix_web::Error>) {
    match &outcome {
      Ok(response) => {
        if let Some(error) = response.response().error() {
          // use the status code already constructed for the outgoing HTTP response
          handle_error(span, response.status(), error.as_response_error());
        } else {
          let code: i32 = response.response().status().as_u16().into();
          span.record("http.status_code", code);
        }
      }
      Err(error) => {
        let response_error = error.as_response_error();
        handle_error(span, response_error.status_code(), response_error);
      }
    };
  }
}

fn handle_error(span: Span, status_code: StatusCode, response_error: &dyn ResponseError) {
  let display_msg = format!("{}", response_error);
  let debug_msg = format!("{:?}", response_error);
  span.record("exception.message", tracing::field::display(&display_msg));
  span.record("exception.details", tracing::field::display(&debug_msg));
  let code: i32 = status_code.as_u16().into();
  span.record("http.status_code", code);

  let _entered = span.enter();
  if status_code.is_client_error() {
    tracing::warn!("{}", display_msg);
  } else {
    tracing::error!("{}\n{}", display_msg, debug_msg);
  }
}
