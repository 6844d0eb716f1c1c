use crate::newtypes::PaginationCursor;
use chrono::{DateTime, Utc};
use clubhouse_utils::{
  error::{ClubhouseErrorExt, ClubhouseErrorType, ClubhouseResult},
  settings::SETTINGS,
};
use deadpool::Runtime;
use diesel::{
  helper_types::AsExprOf,
  result::{
    DatabaseErrorKind,
    Error::{self as DieselError, DatabaseError, QueryBuilderError},
  },
  IntoSql,
};
use diesel_async::{
  pg::AsyncPgConnection,
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
};
use std::ops::{Deref, DerefMut};

const FETCH_LIMIT_DEFAULT: i64 = 10;
pub const FETCH_LIMIT_MAX: i64 = 50;
pub const SEARCH_LIMIT: i64 = 5;

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// References a pool or connection. Functions must take `&mut DbPool<'_>` to allow implicit
/// reborrowing.
///
/// https://github.com/rust-lang/rfcs/issues/1403
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> Result<DbConn<'a>, DieselError> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(pool.get().await.map_err(|e| QueryBuilderError(e.into()))?),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl Deref for DbConn<'_> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn.deref(),
    }
  }
}

impl DerefMut for DbConn<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn.deref_mut(),
    }
  }
}

// Allows functions that take `DbPool<'_>` to be called in a transaction by passing `&mut
// conn.into()`
impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(value: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(value)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(value: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(value.deref_mut())
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(value: &'a ActualDbPool) -> Self {
    DbPool::Pool(value)
  }
}

fn build_pool(db_url: &str) -> ClubhouseResult<ActualDbPool> {
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()?;
  Ok(pool)
}

pub async fn build_db_pool() -> ClubhouseResult<ActualDbPool> {
  let db_url = SETTINGS.get_database_url();
  let pool = build_pool(&db_url)?;
  crate::schema_setup::run(&db_url).await?;
  Ok(pool)
}

/// Pool for database tests. These are ignored by default, run them with
/// `CLUBHOUSE_DATABASE_URL` pointing at a postgres instance and `cargo test -- --ignored`.
#[allow(clippy::expect_used)]
pub async fn build_db_pool_for_tests() -> ActualDbPool {
  build_db_pool().await.expect("db pool missing")
}

/// A pool which never connects until it is used. Lets handlers be exercised without a database.
pub fn build_lazy_db_pool(db_url: &str) -> ClubhouseResult<ActualDbPool> {
  build_pool(db_url)
}

pub fn now() -> AsExprOf<diesel::dsl::now, diesel::sql_types::Timestamptz> {
  // https://github.com/diesel-rs/diesel/issues/1514
  diesel::dsl::now.into_sql::<diesel::sql_types::Timestamptz>()
}

/// Uses `conflict` as error type if the query failed on a unique constraint, `other` otherwise.
pub fn map_unique_violation<T>(
  res: Result<T, DieselError>,
  conflict: ClubhouseErrorType,
  other: ClubhouseErrorType,
) -> ClubhouseResult<T> {
  let error_type = match &res {
    Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => conflict,
    _ => other,
  };
  res.with_clubhouse_type(error_type)
}

/// Error type of a failed vote insert. A foreign key violation means the target was deleted
/// after it was checked.
pub fn map_vote_insert<T>(
  res: Result<T, DieselError>,
  target_not_found: ClubhouseErrorType,
) -> ClubhouseResult<T> {
  let error_type = match &res {
    Err(DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
      ClubhouseErrorType::VoteAlreadyExists
    }
    Err(DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => target_not_found,
    _ => ClubhouseErrorType::CouldntCreateVote,
  };
  res.with_clubhouse_type(error_type)
}

pub fn fetch_limit(limit: Option<i64>) -> ClubhouseResult<i64> {
  let limit = limit.unwrap_or(FETCH_LIMIT_DEFAULT);
  if !(1..=FETCH_LIMIT_MAX).contains(&limit) {
    Err(ClubhouseErrorType::InvalidFetchLimit.into())
  } else {
    Ok(limit)
  }
}

pub fn decode_cursor(cursor: &PaginationCursor) -> ClubhouseResult<(DateTime<Utc>, i32)> {
  cursor
    .decode()
    .ok_or_else(|| ClubhouseErrorType::InvalidCursor.into())
}

/// Escapes like-wildcards so user input only matches as a literal prefix.
pub fn prefix_search(q: &str) -> String {
  let escaped = q
    .trim()
    .replace('\\', "\\\\")
    .replace('%', "\\%")
    .replace('_', "\\_");
  format!("{escaped}%")
}

/// Cuts the extra row fetched beyond `limit` and returns the cursor of the next page.
pub fn paginate<T>(
  mut items: Vec<T>,
  limit: i64,
  cursor_of: impl Fn(&T) -> PaginationCursor,
) -> (Vec<T>, Option<PaginationCursor>) {
  let limit = usize::try_from(limit).unwrap_or(0);
  let next_cursor = if items.len() > limit {
    let next = items.get(limit).map(cursor_of);
    items.truncate(limit);
    next
  } else {
    None
  };
  (items, next_cursor)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_fetch_limit() -> ClubhouseResult<()> {
    assert_eq!(10, fetch_limit(None)?);
    assert_eq!(50, fetch_limit(Some(50))?);
    assert!(fetch_limit(Some(0)).is_err());
    assert!(fetch_limit(Some(51)).is_err());
    Ok(())
  }

  #[test]
  fn test_map_unique_violation() {
    let res: Result<(), DieselError> = Err(DatabaseError(
      DatabaseErrorKind::UniqueViolation,
      Box::new("duplicate key".to_string()),
    ));
    let err = map_unique_violation(
      res,
      ClubhouseErrorType::VoteAlreadyExists,
      ClubhouseErrorType::CouldntCreateVote,
    )
    .err()
    .map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::VoteAlreadyExists), err);

    let err = map_unique_violation(
      Err::<(), _>(DieselError::RollbackTransaction),
      ClubhouseErrorType::VoteAlreadyExists,
      ClubhouseErrorType::CouldntCreateVote,
    )
    .err()
    .map(|e| e.error_type);
    assert_eq!(Some(ClubhouseErrorType::CouldntCreateVote), err);
  }

  #[test]
  fn test_map_vote_insert() {
    let insert_error = |kind| {
      let res: Result<(), DieselError> =
        Err(DatabaseError(kind, Box::new("insert failed".to_string())));
      map_vote_insert(res, ClubhouseErrorType::CouldntFindComment)
        .err()
        .map(|e| e.error_type)
    };
    assert_eq!(
      Some(ClubhouseErrorType::VoteAlreadyExists),
      insert_error(DatabaseErrorKind::UniqueViolation)
    );
    assert_eq!(
      Some(ClubhouseErrorType::CouldntFindComment),
      insert_error(DatabaseErrorKind::ForeignKeyViolation)
    );
    assert_eq!(
      Some(ClubhouseErrorType::CouldntCreateVote),
      insert_error(DatabaseErrorKind::SerializationFailure)
    );
  }

  #[test]
  fn test_prefix_search() {
    assert_eq!("rust%", prefix_search(" rust "));
    assert_eq!("a\\_b\\%%", prefix_search("a_b%"));
  }

  #[test]
  fn test_paginate() {
    let published = DateTime::from_timestamp_micros(1_000_000).unwrap_or_default();
    let cursor_of = |id: &i32| PaginationCursor::new(published, *id);

    let (page, next) = paginate(vec![5, 4, 3], 2, cursor_of);
    assert_eq!(vec![5, 4], page);
    assert_eq!(Some(PaginationCursor::new(published, 3)), next);

    let (page, next) = paginate(vec![2, 1], 2, cursor_of);
    assert_eq!(vec![2, 1], page);
    assert_eq!(None, next);
  }
}
