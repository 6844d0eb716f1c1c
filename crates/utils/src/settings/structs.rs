use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::{
  env,
  net::{IpAddr, Ipv4Addr},
};

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct Settings {
  /// settings related to the postgresql database
  #[default(Default::default())]
  pub database: DatabaseConfig,
  /// Verification parameters for tokens issued by the external identity provider
  #[default(Default::default())]
  pub identity: IdentityConfig,
  /// the domain name of your instance (mandatory)
  #[default("localhost")]
  pub hostname: String,
  /// Address where clubhouse should listen for incoming requests
  #[default(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)))]
  pub bind: IpAddr,
  /// Port where clubhouse should listen for incoming requests
  #[default(8536)]
  pub port: u16,
  /// Whether the site is available over TLS.
  #[default(true)]
  pub tls_enabled: bool,
  /// Sets a response Access-Control-Allow-Origin CORS header
  #[default(None)]
  pub(crate) cors_origin: Option<String>,
}

impl Settings {
  pub fn cors_origin(&self) -> Option<String> {
    env::var("CLUBHOUSE_CORS_ORIGIN")
      .ok()
      .or(self.cors_origin.clone())
  }
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct DatabaseConfig {
  #[serde(flatten, default)]
  pub(crate) connection: DatabaseConnection,

  /// Maximum number of active sql connections
  #[default(30)]
  pub pool_size: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(untagged)]
pub enum DatabaseConnection {
  /// Configure the database by specifying a URI
  ///
  /// This is the preferred method to specify database connection details since
  /// it is the most flexible.
  Uri {
    /// Connection URI pointing to a postgres instance
    uri: String,
  },

  /// Configure the database by specifying parts of a URI
  #[default]
  Parts(DatabaseConnectionParts),
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default)]
pub struct DatabaseConnectionParts {
  /// Username to connect to postgres
  #[default("clubhouse")]
  pub(super) user: String,
  /// Password to connect to postgres
  #[default("password")]
  pub(super) password: String,
  #[default("localhost")]
  /// Host where postgres is running
  pub(super) host: String,
  /// Port where postgres can be accessed
  #[default(5432)]
  pub(super) port: i32,
  /// Name of the postgres database for clubhouse
  #[default("clubhouse")]
  pub(super) database: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
  /// Shared secret used by the identity provider to sign session tokens (HS256)
  #[default("changeme")]
  pub jwt_secret: String,
  /// Expected `iss` claim of session tokens
  #[default("clubhouse-identity")]
  pub issuer: String,
}
