//! Category DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::category::Category;
use od_core::repositories::CategoryFilter;
use od_core::services::CategoryUpdate;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/categories
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Request body for PUT /api/v1/categories/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}

/// Query parameters for GET /api/v1/categories
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySearchQuery {
    pub name: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CategorySearchQuery {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter {
            name: self.name.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// Category representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
