//! User DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::user::{User, UserRole};
use od_core::repositories::UserFilter;
use od_core::services::UserUpdate;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(min = 1, max = 120))]
    pub full_name: String,

    pub role: UserRole,
}

/// Request body for PUT /api/v1/users/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,

    pub role: Option<UserRole>,

    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            email: request.email,
            full_name: request.full_name,
            role: request.role,
            is_active: request.is_active,
        }
    }
}

/// Request body for PUT /api/v1/users/{id}/password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Query parameters for GET /api/v1/users
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchQuery {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl UserSearchQuery {
    pub fn filter(&self) -> UserFilter {
        UserFilter {
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// User representation returned by the API. The password hash never leaves
/// the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
