//! In-memory persistence adapters satisfying the repository and unit-of-work contracts.

pub mod category_repository;
pub mod database;
mod transaction;
pub mod unit_of_work;

pub use category_repository::InMemoryCategoryRepository;
pub use database::InMemoryDatabase;
pub use unit_of_work::InMemoryUnitOfWork;
