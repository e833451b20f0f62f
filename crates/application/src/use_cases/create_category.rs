//! CreateCategory: validate, construct, persist, commit, project.
//!
//! ```text
//! CreateCategoryInput
//!   ↓
//! 1. Construct Category (invariants checked; failure stops here, no IO happened)
//!   ↓
//! 2. repository.insert(category)   (cancellable)
//!   ↓
//! 3. unit_of_work.commit()          (cancellable)
//!   ↓
//! CreateCategoryOutput
//! ```
//!
//! Insert always precedes commit, and each runs at most once per call. Failures are
//! returned as produced: nothing is retried, wrapped in new context or rolled back here.
//! A missing commit is the rollback signal for the surrounding transaction boundary.

use std::future::Future;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use catalog_categories::{Category, CategoryRepository};
use catalog_core::{
    CancellationSignal, Entity, EntityId, PersistenceError, PersistenceResult, Repository,
};

use crate::error::ApplicationResult;
use crate::unit_of_work::UnitOfWork;
use crate::use_case::UseCase;

fn default_is_active() -> bool {
    true
}

/// Data accepted by [`CreateCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_active,
        }
    }

    /// Input with an empty description and an active flag.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), default_is_active())
    }
}

/// Snapshot of a category as it was persisted by [`CreateCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryOutput {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// Use case creating a category inside one unit of work.
#[derive(Debug)]
pub struct CreateCategory<R, U> {
    repository: R,
    unit_of_work: U,
}

impl<R, U> CreateCategory<R, U> {
    pub fn new(repository: R, unit_of_work: U) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    pub fn into_parts(self) -> (R, U) {
        (self.repository, self.unit_of_work)
    }
}

impl<R, U> CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    /// Create and persist a category.
    ///
    /// On success exactly one `insert` followed by exactly one `commit` has happened.
    /// A validation failure performs no persistence call; an insert failure skips the
    /// commit. Cancellation observed before or during either call stops the pipeline
    /// with `PersistenceError::Cancelled`.
    #[instrument(skip_all)]
    pub async fn handle(
        &self,
        input: CreateCategoryInput,
        signal: &CancellationSignal,
    ) -> ApplicationResult<CreateCategoryOutput> {
        let category = Category::with_status(input.name, input.description, input.is_active)
            .inspect_err(|e| warn!(error = %e, "category rejected"))?;
        let category_id = *category.id();

        debug!(%category_id, "inserting category");
        cancellable(signal, self.repository.insert(&category, signal))
            .await
            .inspect_err(|e| warn!(%category_id, error = %e, "category insert failed"))?;

        debug!(%category_id, "committing unit of work");
        cancellable(signal, self.unit_of_work.commit(signal))
            .await
            .inspect_err(|e| warn!(%category_id, error = %e, "unit of work commit failed"))?;

        info!(%category_id, "category created");
        Ok(CreateCategoryOutput::from(&category))
    }
}

#[async_trait]
impl<R, U> UseCase<CreateCategoryInput, CreateCategoryOutput> for CreateCategory<R, U>
where
    R: CategoryRepository,
    U: UnitOfWork,
{
    async fn execute(
        &self,
        input: CreateCategoryInput,
        signal: &CancellationSignal,
    ) -> ApplicationResult<CreateCategoryOutput> {
        self.handle(input, signal).await
    }
}

/// Run `operation` unless `signal` is cancelled first; cancellation wins ties.
async fn cancellable<F>(signal: &CancellationSignal, operation: F) -> PersistenceResult<()>
where
    F: Future<Output = PersistenceResult<()>>,
{
    signal.check()?;
    tokio::select! {
        biased;
        _ = signal.cancelled() => Err(PersistenceError::Cancelled),
        result = operation => result,
    }
}
