use clap::Parser;
use clubhouse_server::{start_clubhouse_server, CmdArgs};
use clubhouse_utils::error::ClubhouseResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> ClubhouseResult<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();

  let args = CmdArgs::parse();

  start_clubhouse_server(args).await?;
  Ok(())
}
