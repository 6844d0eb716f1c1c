use clubhouse_db_schema::utils::{ActualDbPool, DbPool};
use clubhouse_utils::settings::{structs::Settings, SETTINGS};

#[derive(Clone)]
pub struct ClubhouseContext {
  pool: ActualDbPool,
}

impl ClubhouseContext {
  pub fn create(pool: ActualDbPool) -> ClubhouseContext {
    ClubhouseContext { pool }
  }
  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }
  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }
  pub fn settings(&self) -> &'static Settings {
    &SETTINGS
  }
}
