use chrono::{DateTime, Utc};

use catalog_core::{DomainResult, Entity, EntityId};

use crate::validation::validate_category;

/// Aggregate root: Category.
///
/// Every observable instance satisfies the invariants checked by
/// [`validate_category`]. Mutations that touch `name`/`description` are all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: EntityId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::with_status(name, description, true)
    }

    /// Create a category with an explicit activation flag.
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        Self::from_nullable(Some(name.into()), Some(description.into()), is_active)
    }

    /// Create a category from boundary data where fields may be absent.
    ///
    /// Absent values are treated as null and rejected with the matching validation
    /// message.
    pub fn from_nullable(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        validate_category(name.as_deref(), description.as_deref())?;

        Ok(Self {
            id: EntityId::new(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            is_active,
            created_at: Utc::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Replace the name and, when given, the description.
    ///
    /// The resulting pair is validated as a whole; on failure neither field changes.
    pub fn update(&mut self, name: &str, description: Option<&str>) -> DomainResult<()> {
        self.update_nullable(Some(name), description)
    }

    /// [`Self::update`] for boundary data where the name may be absent.
    ///
    /// An absent name is null and is rejected like an empty one.
    pub fn update_nullable(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> DomainResult<()> {
        let description = description.unwrap_or(&self.description);
        validate_category(name, Some(description))?;

        let description = description.to_owned();
        self.name = name.unwrap_or_default().to_owned();
        self.description = description;
        Ok(())
    }
}

impl Entity for Category {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
