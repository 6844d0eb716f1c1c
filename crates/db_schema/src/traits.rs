use crate::{aggregates::VoteRecord, newtypes::PersonId, source::vote::VoteType, utils::DbPool};
use clubhouse_utils::error::{ClubhouseErrorType, ClubhouseResult};
use std::future::Future;

pub trait Crud: Sized {
  type InsertForm;
  type IdType: Send;

  fn create(
    pool: &mut DbPool<'_>,
    form: &Self::InsertForm,
  ) -> impl Future<Output = ClubhouseResult<Self>> + Send;

  fn read(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<Self>> + Send;

  fn delete(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<usize>> + Send;
}

/// Storage of votes for one kind of target. At most one vote per person and target is stored.
pub trait Votable: VoteRecord + Sized {
  type Form: Send + Sync;
  type IdType: Copy + Send;

  fn form(person_id: PersonId, target_id: Self::IdType, vote_type: VoteType) -> Self::Form;

  /// Error type for votes on a missing target.
  fn target_not_found() -> ClubhouseErrorType;

  fn target_exists(
    pool: &mut DbPool<'_>,
    target_id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<bool>> + Send;

  fn read_vote(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    target_id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<Option<Self>>> + Send;

  /// Fails with `VoteAlreadyExists` if the person already voted on the target.
  fn vote(
    pool: &mut DbPool<'_>,
    form: &Self::Form,
  ) -> impl Future<Output = ClubhouseResult<Self>> + Send;

  fn update_vote(
    pool: &mut DbPool<'_>,
    form: &Self::Form,
  ) -> impl Future<Output = ClubhouseResult<Self>> + Send;

  fn remove(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    target_id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<usize>> + Send;

  fn list_for_target(
    pool: &mut DbPool<'_>,
    target_id: Self::IdType,
  ) -> impl Future<Output = ClubhouseResult<Vec<Self>>> + Send;
}
