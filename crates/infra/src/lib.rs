//! Infrastructure layer: persistence adapters for the catalog.

pub mod persistence;


pub use persistence::{InMemoryCategoryRepository, InMemoryDatabase, InMemoryUnitOfWork};
