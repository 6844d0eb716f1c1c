use crate::{
  error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult},
  settings::structs::IdentityConfig,
};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session token claims as issued by the external identity provider.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
  /// Stable identifier of the principal at the identity provider, standard claim by RFC 7519.
  pub sub: String,
  /// Display name of the principal
  pub name: String,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
  /// Expiry as UNIX-timestamp in seconds
  pub exp: i64,
}

impl Claims {
  pub fn decode(jwt: &str, identity: &IdentityConfig) -> ClubhouseResult<Claims> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&identity.issuer]);
    let key = DecodingKey::from_secret(identity.jwt_secret.as_ref());
    let token = decode::<Claims>(jwt, &key, &validation)
      .with_clubhouse_type(ClubhouseErrorType::IncorrectLogin)?;
    Ok(token.claims)
  }

  /// Signs a token the same way the identity provider does. Used by local setups and tests.
  pub fn generate(
    sub: &str,
    name: &str,
    valid_for: TimeDelta,
    identity: &IdentityConfig,
  ) -> ClubhouseResult<String> {
    let now = Utc::now();
    let claims = Claims {
      sub: sub.to_string(),
      name: name.to_string(),
      iss: identity.issuer.clone(),
      iat: now.timestamp(),
      exp: (now + valid_for).timestamp(),
    };
    let key = EncodingKey::from_secret(identity.jwt_secret.as_ref());
    encode(&Header::default(), &claims, &key)
      .with_clubhouse_type(ClubhouseErrorType::SystemErrLogin)
  }
}
