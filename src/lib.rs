//! The clubhouse server crate
#![deny(missing_docs)]

/// The API routes
pub mod api_routes_http;
/// Request spans for the tracing logger
pub mod root_span_builder;
/// Resolves the signed in person from the session token
pub mod session_middleware;

use actix_cors::Cors;
use actix_web::{
  middleware::{self, ErrorHandlers},
  web::Data,
  App,
  HttpServer,
};
use clap::Parser;
use clubhouse_api_common::context::ClubhouseContext;
use clubhouse_db_schema::utils::build_db_pool;
use clubhouse_utils::{
  error::ClubhouseResult,
  response::jsonify_plain_text_errors,
  settings::{structs::Settings, SETTINGS},
  VERSION,
};
use root_span_builder::QuieterRootSpanBuilder;
use session_middleware::SessionMiddleware;
use tracing_actix_web::TracingLogger;

#[derive(Parser, Debug)]
#[command(
  version,
  about = "A club based discussion forum",
  long_about = "A club based discussion forum.\n\nThis is the clubhouse backend API server. It \
                applies pending database migrations on startup and then serves the HTTP API."
)]
/// Command line arguments of the server binary
pub struct CmdArgs {
  /// Overrides the listen address from the config file.
  #[arg(long, env = "CLUBHOUSE_BIND")]
  pub bind: Option<std::net::IpAddr>,
  /// Overrides the listen port from the config file.
  #[arg(long, env = "CLUBHOUSE_PORT")]
  pub port: Option<u16>,
  /// Only apply the database migrations, then exit.
  #[arg(long, default_value_t = false)]
  pub migrate_only: bool,
}

/// Placing the main function in lib.rs allows other crates to import it and embed clubhouse
pub async fn start_clubhouse_server(args: CmdArgs) -> ClubhouseResult<()> {
  // Migrations are applied while the pool is built
  let pool = build_db_pool().await?;
  if args.migrate_only {
    tracing::info!("Database migrations applied, exiting");
    return Ok(());
  }

  let settings = SETTINGS.to_owned();
  let bind = args.bind.unwrap_or(settings.bind);
  let port = args.port.unwrap_or(settings.port);
  let context = ClubhouseContext::create(pool);

  tracing::info!(
    "Starting clubhouse v{} at http://{}:{}",
    VERSION,
    bind,
    port
  );

  HttpServer::new(move || {
    let cors_config = cors_config(&settings);
    App::new()
      .wrap(middleware::Compress::default())
      .wrap(cors_config)
      .wrap(TracingLogger::<QuieterRootSpanBuilder>::new())
      .wrap(ErrorHandlers::new().default_handler(jsonify_plain_text_errors))
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context.clone()))
      .configure(api_routes_http::config)
  })
  .bind((bind, port))?
  .run()
  .await?;

  Ok(())
}

/// Permissive while developing, limited to the configured origin plus the own hostname in
/// release builds.
fn cors_config(settings: &Settings) -> Cors {
  let self_origin = settings.get_protocol_and_hostname();
  let cors_origin_setting = settings.cors_origin();

  let cors_default = Cors::default()
    .allow_any_origin()
    .allow_any_method()
    .allow_any_header()
    .expose_any_header()
    .max_age(3600);

  match (cors_origin_setting, cfg!(debug_assertions)) {
    (Some(origin), false) if origin != "*" => Cors::default()
      .allowed_origin(&origin)
      .allowed_origin(&self_origin)
      .allow_any_method()
      .allow_any_header()
      .expose_any_header()
      .max_age(3600),
    _ => cors_default,
  }
}
