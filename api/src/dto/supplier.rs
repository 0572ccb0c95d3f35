//! Supplier DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::supplier::Supplier;
use od_core::repositories::SupplierFilter;
use od_core::services::SupplierUpdate;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/suppliers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 16))]
    pub phone: String,
}

/// Request body for PUT /api/v1/suppliers/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSupplierRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 16))]
    pub phone: Option<String>,
}

impl From<UpdateSupplierRequest> for SupplierUpdate {
    fn from(request: UpdateSupplierRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// Query parameters for GET /api/v1/suppliers
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SupplierSearchQuery {
    pub fn filter(&self) -> SupplierFilter {
        SupplierFilter {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// Supplier representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            email: supplier.email,
            phone: supplier.phone,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}
