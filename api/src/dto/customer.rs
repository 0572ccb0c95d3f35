//! Customer DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::customer::Customer;
use od_core::repositories::CustomerFilter;
use od_core::services::CustomerUpdate;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/customers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 16))]
    pub phone: String,

    #[validate(length(max = 255))]
    pub address: Option<String>,
}

/// Request body for PUT /api/v1/customers/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 16))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,
}

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(request: UpdateCustomerRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}

/// Query parameters for GET /api/v1/customers
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl CustomerSearchQuery {
    pub fn filter(&self) -> CustomerFilter {
        CustomerFilter {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// Customer representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}
