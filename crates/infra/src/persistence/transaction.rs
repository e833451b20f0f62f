use std::sync::Mutex;

use catalog_categories::Category;
use catalog_core::{PersistenceError, PersistenceResult};

/// A write staged by a repository, waiting for its unit of work to commit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingWrite {
    InsertCategory(Category),
}

/// Writes staged within one unit of work.
///
/// Owned by a single [`super::InMemoryUnitOfWork`] and shared only with the repositories
/// it hands out. Dropping the last handle discards whatever was never committed.
#[derive(Debug, Default)]
pub(crate) struct Transaction {
    writes: Mutex<Vec<PendingWrite>>,
}

impl Transaction {
    pub(crate) fn stage(&self, write: PendingWrite) -> PersistenceResult<()> {
        self.lock()?.push(write);
        Ok(())
    }

    pub(crate) fn len(&self) -> PersistenceResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Remove and return the staged batch, leaving the transaction empty.
    pub(crate) fn take(&self) -> PersistenceResult<Vec<PendingWrite>> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    fn lock(&self) -> PersistenceResult<std::sync::MutexGuard<'_, Vec<PendingWrite>>> {
        self.writes
            .lock()
            .map_err(|_| PersistenceError::unavailable("pending writes lock poisoned"))
    }
}
