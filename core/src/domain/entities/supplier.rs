//! Supplier entity representing a vendor the business buys from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};
use od_shared::utils::validation;

/// A supplier of offered products or services. Email and phone are natural
/// keys and must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique identifier for the supplier
    pub id: Uuid,

    /// Company or contact name (non-blank)
    pub name: String,

    /// Contact email (unique)
    pub email: String,

    /// Contact phone (unique)
    pub phone: String,

    /// Timestamp when the supplier was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the supplier was last updated
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    /// Creates a new Supplier instance
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();
        validate_name(&name)?;
        validate_email(&email)?;
        validate_phone(&phone)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the supplier
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the contact email
    pub fn change_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the contact phone
    pub fn change_phone(&mut self, phone: impl Into<String>) -> DomainResult<()> {
        let phone = phone.into();
        validate_phone(&phone)?;
        self.phone = phone;
        self.updated_at = Utc::now();
        Ok(())
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

fn validate_email(email: &str) -> DomainResult<()> {
    if !validation::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    Ok(())
}

fn validate_phone(phone: &str) -> DomainResult<()> {
    if !validation::is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone.into());
    }
    Ok(())
}
