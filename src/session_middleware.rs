use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, AUTHORIZATION, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use clubhouse_api_common::{context::ClubhouseContext, local_user_view::LocalUserView};
use clubhouse_db_schema::source::person::{Person, PersonInsertForm};
use clubhouse_utils::{claims::Claims, error::ClubhouseResult};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc};

static AUTH_HEADER_NAME: &str = "auth";

/// Places a [`LocalUserView`] into the request extensions when a valid session token is sent.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: ClubhouseContext,
}

impl SessionMiddleware {
  /// Middleware which looks up persons through the pool of `context`.
  pub fn new(context: ClubhouseContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

/// The service wrapped by [`SessionMiddleware`].
pub struct SessionService<S> {
  service: Rc<S>,
  context: ClubhouseContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = read_jwt(&req);

      if let Some(jwt) = &jwt {
        // Ignore any invalid auth, anonymous routes keep working and the others answer with
        // not_logged_in
        match local_user_view_from_jwt(jwt, &context).await {
          Ok(local_user_view) => {
            req.extensions_mut().insert(local_user_view);
          }
          Err(e) => tracing::debug!("Ignoring session token: {}", e),
        }
      }

      let mut res = svc.call(req).await?;

      // Add cache-control header. If user is authenticated, mark as private. Otherwise cache
      // up to one minute.
      let cache_value = if jwt.is_some() {
        "private"
      } else {
        "public, max-age=60"
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

/// Reads the session token from the `auth` header, falling back to `Authorization: Bearer`.
fn read_jwt(req: &ServiceRequest) -> Option<String> {
  let headers = req.headers();
  if let Some(a) = headers.get(AUTH_HEADER_NAME).and_then(|h| h.to_str().ok()) {
    return Some(a.to_string());
  }
  headers
    .get(AUTHORIZATION)
    .and_then(|h| h.to_str().ok())
    .and_then(|h| h.strip_prefix("Bearer "))
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
}

#[tracing::instrument(skip_all)]
async fn local_user_view_from_jwt(
  jwt: &str,
  context: &ClubhouseContext,
) -> ClubhouseResult<LocalUserView> {
  let claims = Claims::decode(jwt, &context.settings().identity)?;
  let form = PersonInsertForm::new(claims.sub, claims.name);
  let person = Person::upsert(&mut context.pool(), &form).await?;
  Ok(LocalUserView { person })
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_read_jwt_from_auth_header() {
    let req = TestRequest::default()
      .insert_header(("auth", "token-a"))
      .insert_header((AUTHORIZATION, "Bearer token-b"))
      .to_srv_request();
    assert_eq!(Some("token-a".to_string()), read_jwt(&req));
  }

  #[test]
  fn test_read_jwt_from_bearer() {
    let req = TestRequest::default()
      .insert_header((AUTHORIZATION, "Bearer token-b"))
      .to_srv_request();
    assert_eq!(Some("token-b".to_string()), read_jwt(&req));

    let req = TestRequest::default()
      .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
      .to_srv_request();
    assert_eq!(None, read_jwt(&req));

    let req = TestRequest::default().to_srv_request();
    assert_eq!(None, read_jwt(&req));
  }
}
