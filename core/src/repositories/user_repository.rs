//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for users. Text fields match as substrings.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by exact login email (natural key)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of items and the total match count
    async fn search(
        &self,
        filter: &UserFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError>;
}
