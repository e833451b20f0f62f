//! Category invariants, shared by construction and update.

use catalog_core::{DomainError, DomainResult};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

pub const NAME_EMPTY_MESSAGE: &str = "Name should not be empty or null";
pub const DESCRIPTION_NULL_MESSAGE: &str = "Description should not be null";
pub const NAME_TOO_SHORT_MESSAGE: &str = "Name should be at leats 3 characters long";
pub const NAME_TOO_LONG_MESSAGE: &str = "Name should be less or equal 255 characters long";
pub const DESCRIPTION_TOO_LONG_MESSAGE: &str =
    "Description should be less or equal 10.000 characters long";

/// Check a candidate `(name, description)` pair.
///
/// `None` stands for an absent (null) value. Checks run in a fixed order and the first
/// failing one wins:
///
/// 1. name absent, empty or whitespace-only
/// 2. description absent (an empty description is fine)
/// 3. name shorter than [`NAME_MIN_LENGTH`]
/// 4. name longer than [`NAME_MAX_LENGTH`]
/// 5. description longer than [`DESCRIPTION_MAX_LENGTH`]
///
/// Lengths are counted in characters on the untrimmed values.
pub fn validate_category(name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(DomainError::validation(NAME_EMPTY_MESSAGE)),
    };
    let Some(description) = description else {
        return Err(DomainError::validation(DESCRIPTION_NULL_MESSAGE));
    };

    let name_len = name.chars().count();
    if name_len < NAME_MIN_LENGTH {
        return Err(DomainError::validation(NAME_TOO_SHORT_MESSAGE));
    }
    if name_len > NAME_MAX_LENGTH {
        return Err(DomainError::validation(NAME_TOO_LONG_MESSAGE));
    }
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        return Err(DomainError::validation(DESCRIPTION_TOO_LONG_MESSAGE));
    }

    Ok(())
}
