use crate::error::ClubhouseResult;
use anyhow::{anyhow, Context};
use deser_hjson::from_str;
use std::{env, fs, sync::LazyLock};
use structs::{DatabaseConnection, Settings};

pub mod structs;

static DEFAULT_CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(|| {
  if env::var("CLUBHOUSE_INITIALIZE_WITH_DEFAULT_SETTINGS").is_ok() {
    Settings::default()
  } else {
    Settings::init().expect("Failed to load settings file, see documentation")
  }
});

impl Settings {
  /// Reads config from configuration file.
  ///
  /// Note: The env var `CLUBHOUSE_DATABASE_URL` is parsed in
  /// `crates/utils/src/settings/mod.rs::get_database_url()`
  pub fn init() -> ClubhouseResult<Self> {
    let path = Self::get_config_location();
    // A missing config file is not an error, every setting has a default
    let config = match fs::read_to_string(&path) {
      Ok(raw) => from_str::<Settings>(&raw)
        .with_context(|| format!("Couldn't parse config file {path}"))?,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
      Err(e) => return Err(anyhow!("Couldn't read config file {path}: {e}").into()),
    };

    if config.hostname.is_empty() {
      Err(anyhow!("Hostname variable is not set!").into())
    } else {
      Ok(config)
    }
  }

  pub fn get_database_url(&self) -> String {
    if let Ok(url) = env::var("CLUBHOUSE_DATABASE_URL") {
      return url;
    }
    match &self.database.connection {
      DatabaseConnection::Uri { uri } => uri.clone(),
      DatabaseConnection::Parts(parts) => {
        format!(
          "postgres://{}:{}@{}:{}/{}",
          parts.user, parts.password, parts.host, parts.port, parts.database,
        )
      }
    }
  }

  fn get_config_location() -> String {
    env::var("CLUBHOUSE_CONFIG_LOCATION").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string())
  }

  /// Returns either "http" or "https", depending on tls_enabled setting
  pub fn get_protocol_string(&self) -> &'static str {
    if self.tls_enabled {
      "https"
    } else {
      "http"
    }
  }

  /// Returns something like `http://localhost` or `https://clubs.example.com`,
  /// with the correct protocol and hostname.
  pub fn get_protocol_and_hostname(&self) -> String {
    format!("{}://{}", self.get_protocol_string(), self.hostname)
  }
}
