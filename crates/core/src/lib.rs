//! `catalog-core` — seedwork shared by the catalog domain and application layers.
//!
//! This crate contains **pure domain** primitives plus the capability contracts that
//! persistence adapters must satisfy. It has no storage or transport of its own.

pub mod cancellation;
pub mod entity;
pub mod error;
pub mod id;
pub mod repository;

pub use cancellation::CancellationSignal;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, PersistenceError, PersistenceResult};
pub use id::EntityId;
pub use repository::Repository;
