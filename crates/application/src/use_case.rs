use async_trait::async_trait;

use catalog_core::CancellationSignal;

use crate::error::ApplicationResult;

/// Uniform entry point for use cases, so adapters can hold them behind one trait.
#[async_trait]
pub trait UseCase<I, O>: Send + Sync
where
    I: Send + 'static,
{
    async fn execute(&self, input: I, signal: &CancellationSignal) -> ApplicationResult<O>;
}
