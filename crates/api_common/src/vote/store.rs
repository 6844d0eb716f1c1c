use clubhouse_db_schema::{
  aggregates::VoteRecord,
  newtypes::PersonId,
  source::vote::VoteType,
  traits::Votable,
  utils::DbPool,
};
use clubhouse_utils::error::{ClubhouseError, ClubhouseErrorType, ClubhouseResult};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncConnection, AsyncPgConnection};
use std::{fmt::Debug, future::Future, marker::PhantomData};

/// The vote rows of one kind of target, as seen by the vote mutation.
pub trait VoteStore {
  type TargetId: Copy + Debug + Send;
  type Vote: VoteRecord + Send;

  /// Error type reported when voting on a target which doesn't exist.
  fn not_found() -> ClubhouseErrorType;

  fn target_exists(
    &mut self,
    target_id: Self::TargetId,
  ) -> impl Future<Output = ClubhouseResult<bool>> + Send;

  fn find_vote(
    &mut self,
    person_id: PersonId,
    target_id: Self::TargetId,
  ) -> impl Future<Output = ClubhouseResult<Option<VoteType>>> + Send;

  /// Fails with `VoteAlreadyExists` when a row for the person and target exists.
  fn insert_vote(
    &mut self,
    person_id: PersonId,
    target_id: Self::TargetId,
    vote_type: VoteType,
  ) -> impl Future<Output = ClubhouseResult<()>> + Send;

  fn update_vote_type(
    &mut self,
    person_id: PersonId,
    target_id: Self::TargetId,
    vote_type: VoteType,
  ) -> impl Future<Output = ClubhouseResult<()>> + Send;

  fn delete_vote(
    &mut self,
    person_id: PersonId,
    target_id: Self::TargetId,
  ) -> impl Future<Output = ClubhouseResult<()>> + Send;

  fn list_votes(
    &mut self,
    target_id: Self::TargetId,
  ) -> impl Future<Output = ClubhouseResult<Vec<Self::Vote>>> + Send;
}

/// Database backed vote store, working on a connection with an open transaction.
pub struct DbVoteStore<'a, V> {
  conn: &'a mut AsyncPgConnection,
  _votes: PhantomData<fn() -> V>,
}

impl<'a, V> DbVoteStore<'a, V> {
  pub fn new(conn: &'a mut AsyncPgConnection) -> Self {
    DbVoteStore {
      conn,
      _votes: PhantomData,
    }
  }

  fn pool(&mut self) -> DbPool<'_> {
    DbPool::Conn(&mut *self.conn)
  }
}

impl<V> VoteStore for DbVoteStore<'_, V>
where
  V: Votable + Send + 'static,
  V::IdType: Debug,
{
  type TargetId = V::IdType;
  type Vote = V;

  fn not_found() -> ClubhouseErrorType {
    V::target_not_found()
  }

  async fn target_exists(&mut self, target_id: V::IdType) -> ClubhouseResult<bool> {
    V::target_exists(&mut self.pool(), target_id).await
  }

  async fn find_vote(
    &mut self,
    person_id: PersonId,
    target_id: V::IdType,
  ) -> ClubhouseResult<Option<VoteType>> {
    let vote = V::read_vote(&mut self.pool(), person_id, target_id).await?;
    Ok(vote.map(|v| v.vote_type()))
  }

  async fn insert_vote(
    &mut self,
    person_id: PersonId,
    target_id: V::IdType,
    vote_type: VoteType,
  ) -> ClubhouseResult<()> {
    let form = V::form(person_id, target_id, vote_type);
    // Nested transaction, so a failed insert only rolls back to this savepoint
    self
      .conn
      .transaction::<_, ClubhouseError, _>(|conn| {
        async move { V::vote(&mut conn.into(), &form).await }.scope_boxed()
      })
      .await?;
    Ok(())
  }

  async fn update_vote_type(
    &mut self,
    person_id: PersonId,
    target_id: V::IdType,
    vote_type: VoteType,
  ) -> ClubhouseResult<()> {
    let form = V::form(person_id, target_id, vote_type);
    V::update_vote(&mut self.pool(), &form).await?;
    Ok(())
  }

  async fn delete_vote(
    &mut self,
    person_id: PersonId,
    target_id: V::IdType,
  ) -> ClubhouseResult<()> {
    V::remove(&mut self.pool(), person_id, target_id).await?;
    Ok(())
  }

  async fn list_votes(&mut self, target_id: V::IdType) -> ClubhouseResult<Vec<V>> {
    V::list_for_target(&mut self.pool(), target_id).await
  }
}
