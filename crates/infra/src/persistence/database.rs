use std::collections::HashMap;
use std::sync::RwLock;

use catalog_categories::Category;
use catalog_core::{Entity, EntityId, PersistenceError, PersistenceResult};

use super::transaction::PendingWrite;

/// In-memory committed state shared by every unit of work.
///
/// Only committed rows live here. Staged writes belong to the unit of work that staged
/// them until [`Self::apply`] takes the whole batch. Intended for tests/dev. Not optimized
/// for performance.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    categories: RwLock<HashMap<EntityId, Category>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch atomically (all or nothing). Returns the number of applied writes.
    pub(crate) fn apply(&self, batch: Vec<PendingWrite>) -> PersistenceResult<usize> {
        let mut categories = self
            .categories
            .write()
            .map_err(|_| PersistenceError::unavailable("categories lock poisoned"))?;

        // Validate the whole batch before applying anything.
        let mut seen = Vec::with_capacity(batch.len());
        for write in &batch {
            let PendingWrite::InsertCategory(category) = write;
            let id = *category.id();
            if categories.contains_key(&id) || seen.contains(&id) {
                return Err(PersistenceError::conflict(format!(
                    "category {id} already exists"
                )));
            }
            seen.push(id);
        }

        let applied = batch.len();
        for write in batch {
            let PendingWrite::InsertCategory(category) = write;
            categories.insert(*category.id(), category);
        }

        Ok(applied)
    }

    /// Committed category by id.
    pub fn category(&self, id: &EntityId) -> PersistenceResult<Option<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|_| PersistenceError::unavailable("categories lock poisoned"))?;
        Ok(categories.get(id).cloned())
    }

    /// Every committed category, ordered by id (creation order for UUIDv7 ids).
    pub fn categories(&self) -> PersistenceResult<Vec<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|_| PersistenceError::unavailable("categories lock poisoned"))?;
        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by_key(|c| *c.id());
        Ok(all)
    }
}
