//! Categories domain module.
//!
//! This crate contains the business rules for catalog categories, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod repository;
pub mod validation;

pub use category::Category;
pub use repository::CategoryRepository;
pub use validation::validate_category;
