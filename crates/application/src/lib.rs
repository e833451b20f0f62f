//! Application layer: use cases orchestrating domain and persistence steps.
//!
//! Use cases depend only on capability traits (`Repository`, [`UnitOfWork`]); adapters
//! for HTTP, CLI or a concrete database live outside this crate.

pub mod error;
pub mod unit_of_work;
pub mod use_case;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use unit_of_work::UnitOfWork;
pub use use_case::UseCase;
pub use use_cases::create_category::{CreateCategory, CreateCategoryInput, CreateCategoryOutput};
