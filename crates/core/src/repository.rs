//! Repository capability: durable storage of entities behind a storage-agnostic trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cancellation::CancellationSignal;
use crate::entity::Entity;
use crate::error::PersistenceResult;

/// Write side of a repository.
///
/// Implementations must:
/// - fail with `PersistenceError::Cancelled` without doing any work when the signal is
///   already cancelled on entry
/// - enlist the write in the surrounding unit of work rather than making it visible
///   on their own
///
/// Works with in-memory implementations (tests/dev) and real database backends alike.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Send + Sync,
{
    /// Stage `entity` for insertion.
    async fn insert(&self, entity: &E, signal: &CancellationSignal) -> PersistenceResult<()>;
}

#[async_trait]
impl<E, R> Repository<E> for Arc<R>
where
    E: Entity + Send + Sync,
    R: Repository<E> + ?Sized,
{
    async fn insert(&self, entity: &E, signal: &CancellationSignal) -> PersistenceResult<()> {
        (**self).insert(entity, signal).await
    }
}
