//! User use-cases: create, get, search, update, delete, password change.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{UserFilter, UserRepository};
use od_shared::types::{PaginatedResponse, Pagination};

/// Partial update for a user; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

/// Use-case service for staff users
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a user after checking the email is unused. The plaintext
    /// password is hashed here and never stored.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(DomainError::duplicate("email"));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(email, password_hash, full_name, role)?;
        let created = self.repository.create(user).await?;
        debug!(user_id = %created.id, "user created");
        Ok(created)
    }

    /// Fetch a user by id
    pub async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    /// Paginated search over users
    pub async fn search_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<User>> {
        let pagination = pagination.validate();
        let (items, total) = self.repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Apply a partial update, re-checking email uniqueness only when it
    /// actually changes
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;

        if let Some(email) = update.email {
            if email != user.email {
                if self.repository.find_by_email(&email).await?.is_some() {
                    return Err(DomainError::duplicate("email"));
                }
                user.change_email(email)?;
            }
        }
        if let Some(full_name) = update.full_name {
            user.rename(full_name)?;
        }
        if let Some(role) = update.role {
            user.set_role(role);
        }
        if let Some(is_active) = update.is_active {
            if is_active {
                user.activate();
            } else {
                user.deactivate();
            }
        }

        self.repository.update(user).await
    }

    /// Replace the user's password
    pub async fn change_password(&self, id: Uuid, new_password: &str) -> DomainResult<User> {
        let mut user = self.get_user(id).await?;
        user.change_password_hash(hash_password(new_password)?);
        self.repository.update(user).await
    }

    /// Delete a user after checking it exists
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Password hashing failed: {}", e),
    })
}
