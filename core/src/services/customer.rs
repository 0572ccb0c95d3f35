//! Customer use-cases: create, get, search, update, delete.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CustomerFilter, CustomerRepository};
use od_shared::types::{PaginatedResponse, Pagination};

/// Partial update for a customer; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Use-case service for customers
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new customer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a customer after checking email and phone are unused
    pub async fn create_customer(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        address: Option<String>,
    ) -> DomainResult<Customer> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(DomainError::duplicate("email"));
        }
        if self.repository.find_by_phone(phone).await?.is_some() {
            return Err(DomainError::duplicate("phone"));
        }

        let customer = Customer::new(name, email, phone, address)?;
        let created = self.repository.create(customer).await?;
        debug!(customer_id = %created.id, "customer created");
        Ok(created)
    }

    /// Fetch a customer by id
    pub async fn get_customer(&self, id: Uuid) -> DomainResult<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer"))
    }

    /// Paginated search over customers
    pub async fn search_customers(
        &self,
        filter: CustomerFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Customer>> {
        let pagination = pagination.validate();
        let (items, total) = self.repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Apply a partial update, re-checking uniqueness only for natural keys
    /// that actually change
    pub async fn update_customer(
        &self,
        id: Uuid,
        update: CustomerUpdate,
    ) -> DomainResult<Customer> {
        let mut customer = self.get_customer(id).await?;

        if let Some(email) = update.email {
            if email != customer.email {
                if self.repository.find_by_email(&email).await?.is_some() {
                    return Err(DomainError::duplicate("email"));
                }
                customer.change_email(email)?;
            }
        }
        if let Some(phone) = update.phone {
            if phone != customer.phone {
                if self.repository.find_by_phone(&phone).await?.is_some() {
                    return Err(DomainError::duplicate("phone"));
                }
                customer.change_phone(phone)?;
            }
        }
        if let Some(name) = update.name {
            customer.rename(name)?;
        }
        if let Some(address) = update.address {
            customer.change_address(Some(address));
        }

        self.repository.update(customer).await
    }

    /// Delete a customer after checking it exists
    pub async fn delete_customer(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Customer"));
        }
        debug!(customer_id = %id, "customer deleted");
        Ok(())
    }
}
