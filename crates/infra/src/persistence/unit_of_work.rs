use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use catalog_application::UnitOfWork;
use catalog_core::{CancellationSignal, PersistenceResult};

use super::category_repository::InMemoryCategoryRepository;
use super::database::InMemoryDatabase;
use super::transaction::Transaction;

/// Request-scoped unit of work over an [`InMemoryDatabase`].
///
/// Each instance owns its own batch of staged writes. Repositories obtained from it enlist
/// in that batch and nothing else; clones share it. A unit of work that is dropped without
/// committing takes its staged writes with it, so other requests on the same database
/// never see them.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    db: Arc<InMemoryDatabase>,
    transaction: Arc<Transaction>,
}

impl InMemoryUnitOfWork {
    /// Begin a unit of work with an empty batch.
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self {
            db,
            transaction: Arc::new(Transaction::default()),
        }
    }

    /// Category repository staging into this unit of work.
    pub fn category_repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository::enlisted(self.db.clone(), self.transaction.clone())
    }

    /// Number of staged, not yet committed writes.
    pub fn pending_count(&self) -> PersistenceResult<usize> {
        self.transaction.len()
    }

    /// Discard staged writes. Returns how many were dropped.
    pub fn rollback(&self) -> PersistenceResult<usize> {
        let discarded = self.transaction.take()?.len();
        debug!(discarded, "unit of work rolled back");
        Ok(discarded)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn commit(&self, signal: &CancellationSignal) -> PersistenceResult<()> {
        signal.check()?;
        // The batch is consumed either way; a rejected batch is not retried.
        let batch = self.transaction.take()?;
        match self.db.apply(batch) {
            Ok(applied) => {
                debug!(applied, "unit of work committed");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "unit of work commit rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_categories::Category;
    use catalog_core::{Entity, PersistenceError, Repository};

    #[tokio::test]
    async fn commit_applies_only_its_own_batch() {
        let db = Arc::new(InMemoryDatabase::new());
        let first = InMemoryUnitOfWork::new(db.clone());
        let second = InMemoryUnitOfWork::new(db.clone());
        let signal = CancellationSignal::none();

        let movies = Category::new("Movies", "").unwrap();
        let series = Category::new("Series", "").unwrap();
        first.category_repository().insert(&movies, &signal).await.unwrap();
        second.category_repository().insert(&series, &signal).await.unwrap();

        second.commit(&signal).await.unwrap();

        assert_eq!(db.category(movies.id()).unwrap(), None);
        assert_eq!(db.category(series.id()).unwrap(), Some(series));
        assert_eq!(first.pending_count().unwrap(), 1);
        assert_eq!(second.pending_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejected_commit_keeps_other_batches_staged() {
        let db = Arc::new(InMemoryDatabase::new());
        let signal = CancellationSignal::none();
        let existing = Category::new("Movies", "").unwrap();
        let seed = InMemoryUnitOfWork::new(db.clone());
        seed.category_repository().insert(&existing, &signal).await.unwrap();
        seed.commit(&signal).await.unwrap();

        let conflicting = InMemoryUnitOfWork::new(db.clone());
        let bystander = InMemoryUnitOfWork::new(db.clone());
        let series = Category::new("Series", "").unwrap();
        conflicting
            .category_repository()
            .insert(&existing, &signal)
            .await
            .unwrap();
        bystander.category_repository().insert(&series, &signal).await.unwrap();

        let err = conflicting.commit(&signal).await.unwrap_err();
        match err {
            PersistenceError::Conflict(_) => {}
            _ => panic!("Expected Conflict error"),
        }
        assert_eq!(conflicting.pending_count().unwrap(), 0);
        assert_eq!(bystander.pending_count().unwrap(), 1);

        bystander.commit(&signal).await.unwrap();
        assert_eq!(db.categories().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rollback_discards_staged_writes() {
        let db = Arc::new(InMemoryDatabase::new());
        let unit_of_work = InMemoryUnitOfWork::new(db.clone());
        let repository = unit_of_work.category_repository();
        let signal = CancellationSignal::none();
        repository
            .insert(&Category::new("Movies", "").unwrap(), &signal)
            .await
            .unwrap();
        repository
            .insert(&Category::new("Series", "").unwrap(), &signal)
            .await
            .unwrap();

        assert_eq!(unit_of_work.rollback().unwrap(), 2);
        unit_of_work.commit(&signal).await.unwrap();
        assert!(db.categories().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dropped_unit_of_work_leaves_nothing_behind() {
        let db = Arc::new(InMemoryDatabase::new());
        let signal = CancellationSignal::none();
        {
            let abandoned = InMemoryUnitOfWork::new(db.clone());
            abandoned
                .category_repository()
                .insert(&Category::new("Movies", "").unwrap(), &signal)
                .await
                .unwrap();
        }

        let next = InMemoryUnitOfWork::new(db.clone());
        assert_eq!(next.pending_count().unwrap(), 0);
        next.commit(&signal).await.unwrap();
        assert!(db.categories().unwrap().is_empty());
    }
}
