//! Category entity grouping offers in the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};
use od_shared::utils::validation;

/// A catalog category. The name is a natural key and must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: Uuid,

    /// Category name (unique, non-blank)
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Timestamp when the category was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the category was last updated
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new Category instance
    pub fn new(name: impl Into<String>, description: Option<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the category
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if !validation::not_blank(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into());
    }
    Ok(())
}
