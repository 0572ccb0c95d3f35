//! User entity representing a staff member of the business.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};
use od_shared::utils::validation;

/// Role of a staff user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Regular staff member
    Staff,
}

impl UserRole {
    /// Database/string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
        }
    }

    /// Parse a role from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }
}

/// A staff user who operates the system. Email is a natural key and must be
/// unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login email (unique)
    pub email: String,

    /// Bcrypt hash of the user's password. Never serialized in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name (non-blank)
    pub full_name: String,

    /// Role of the user
    pub role: UserRole,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active User instance with an already-hashed password
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
        role: UserRole,
    ) -> DomainResult<Self> {
        let email = email.into();
        let full_name = full_name.into();
        validate_email(&email)?;
        validate_full_name(&full_name)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            email,
            password_hash: password_hash.into(),
            full_name,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the login email
    pub fn change_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Renames the user
    pub fn rename(&mut self, full_name: impl Into<String>) -> DomainResult<()> {
        let full_name = full_name.into();
        validate_full_name(&full_name)?;
        self.full_name = full_name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the password hash
    pub fn change_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.updated_at = Utc::now();
    }

    /// Changes the user's role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Re-enables the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Disables the account; deactivated users cannot authenticate
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

fn validate_email(email: &str) -> DomainResult<()> {
    if !validation::is_valid_email(email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    Ok(())
}

fn validate_full_name(full_name: &str) -> DomainResult<()> {
    if !validation::not_blank(full_name) {
        return Err(ValidationError::RequiredField {
            field: "full_name".to_string(),
        }
        .into());
    }
    Ok(())
}
