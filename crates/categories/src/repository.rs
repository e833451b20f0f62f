//! Category persistence capability.

use catalog_core::Repository;

use crate::category::Category;

/// Repository for [`Category`] aggregates.
///
/// Any `Repository<Category>` qualifies; production adapters and test doubles satisfy
/// the same trait.
pub trait CategoryRepository: Repository<Category> {}

impl<T> CategoryRepository for T where T: Repository<Category> + ?Sized {}
