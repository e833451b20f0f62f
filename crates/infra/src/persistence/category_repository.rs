use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use catalog_categories::Category;
use catalog_core::{CancellationSignal, Entity, EntityId, PersistenceResult, Repository};

use super::database::InMemoryDatabase;
use super::transaction::{PendingWrite, Transaction};

/// Category repository enlisted in one [`super::InMemoryUnitOfWork`].
///
/// Obtained from [`super::InMemoryUnitOfWork::category_repository`]. Inserts are staged in
/// that unit of work's batch and only become readable once it commits.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    db: Arc<InMemoryDatabase>,
    transaction: Arc<Transaction>,
}

impl InMemoryCategoryRepository {
    pub(crate) fn enlisted(db: Arc<InMemoryDatabase>, transaction: Arc<Transaction>) -> Self {
        Self { db, transaction }
    }

    /// Committed category by id.
    pub fn get(&self, id: &EntityId) -> PersistenceResult<Option<Category>> {
        self.db.category(id)
    }

    /// Every committed category, ordered by id (creation order for UUIDv7 ids).
    pub fn list(&self) -> PersistenceResult<Vec<Category>> {
        self.db.categories()
    }
}

#[async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn insert(&self, category: &Category, signal: &CancellationSignal) -> PersistenceResult<()> {
        signal.check()?;
        self.transaction
            .stage(PendingWrite::InsertCategory(category.clone()))?;
        debug!(category_id = %category.id(), "category insert staged");
        Ok(())
    }
}
