//! Entity trait: identity + continuity across state changes.

use crate::id::EntityId;

/// Entity marker + minimal interface.
///
/// The identifier is assigned by the entity itself when it is constructed and is
/// never reassigned afterwards.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &EntityId;
}
