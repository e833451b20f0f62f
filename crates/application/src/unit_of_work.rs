//! Transaction boundary shared by every repository taking part in a request.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::{CancellationSignal, PersistenceResult};

/// Commits a batch of pending writes atomically.
///
/// Decoupled from any specific repository so several repositories can enlist in one
/// commit. There is no explicit rollback here: a boundary that never sees `commit`
/// discards its pending writes.
///
/// Implementations must fail with `PersistenceError::Cancelled` without committing when
/// the signal is already cancelled on entry.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn commit(&self, signal: &CancellationSignal) -> PersistenceResult<()>;
}

#[async_trait]
impl<U> UnitOfWork for Arc<U>
where
    U: UnitOfWork + ?Sized,
{
    async fn commit(&self, signal: &CancellationSignal) -> PersistenceResult<()> {
        (**self).commit(signal).await
    }
}
