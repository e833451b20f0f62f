//! Use cases, grouped by the aggregate they act on.

pub mod create_category;
