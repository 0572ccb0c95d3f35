//! Supplier use-cases: create, get, search, update, delete.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::supplier::Supplier;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SupplierFilter, SupplierRepository};
use od_shared::types::{PaginatedResponse, Pagination};

/// Partial update for a supplier; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct SupplierUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Use-case service for suppliers
pub struct SupplierService<R: SupplierRepository> {
    repository: Arc<R>,
}

impl<R: SupplierRepository> SupplierService<R> {
    /// Create a new supplier service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a supplier after checking email and phone are unused
    pub async fn create_supplier(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> DomainResult<Supplier> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(DomainError::duplicate("email"));
        }
        if self.repository.find_by_phone(phone).await?.is_some() {
            return Err(DomainError::duplicate("phone"));
        }

        let supplier = Supplier::new(name, email, phone)?;
        let created = self.repository.create(supplier).await?;
        debug!(supplier_id = %created.id, "supplier created");
        Ok(created)
    }

    /// Fetch a supplier by id
    pub async fn get_supplier(&self, id: Uuid) -> DomainResult<Supplier> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Supplier"))
    }

    /// Paginated search over suppliers
    pub async fn search_suppliers(
        &self,
        filter: SupplierFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Supplier>> {
        let pagination = pagination.validate();
        let (items, total) = self.repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Apply a partial update, re-checking uniqueness only for natural keys
    /// that actually change
    pub async fn update_supplier(
        &self,
        id: Uuid,
        update: SupplierUpdate,
    ) -> DomainResult<Supplier> {
        let mut supplier = self.get_supplier(id).await?;

        if let Some(email) = update.email {
            if email != supplier.email {
                if self.repository.find_by_email(&email).await?.is_some() {
                    return Err(DomainError::duplicate("email"));
                }
                supplier.change_email(email)?;
            }
        }
        if let Some(phone) = update.phone {
            if phone != supplier.phone {
                if self.repository.find_by_phone(&phone).await?.is_some() {
                    return Err(DomainError::duplicate("phone"));
                }
                supplier.change_phone(phone)?;
            }
        }
        if let Some(name) = update.name {
            supplier.rename(name)?;
        }

        self.repository.update(supplier).await
    }

    /// Delete a supplier after checking it exists
    pub async fn delete_supplier(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Supplier"));
        }
        debug!(supplier_id = %id, "supplier deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::supplier_repository::mock::MockSupplierRepository;

    fn service() -> SupplierService<MockSupplierRepository> {
        SupplierService::new(Arc::new(MockSupplierRepository::new()))
    }

    #[tokio::test]
    async fn test_create_duplicate_email_fails() {
        let service = service();
        service
            .create_supplier("Acme", "sales@acme.example", "+61255501234")
            .await
            .unwrap();

        let result = service
            .create_supplier("Other", "sales@acme.example", "+61255509999")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_update_phone_to_own_value_succeeds() {
        let service = service();
        let supplier = service
            .create_supplier("Acme", "sales@acme.example", "+61255501234")
            .await
            .unwrap();

        let updated = service
            .update_supplier(
                supplier.id,
                SupplierUpdate {
                    phone: Some("+61255501234".to_string()),
                    name: Some("Acme Wholesale".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Acme Wholesale");
    }

    #[tokio::test]
    async fn test_update_email_to_taken_value_fails() {
        let service = service();
        service
            .create_supplier("Acme", "sales@acme.example", "+61255501234")
            .await
            .unwrap();
        let other = service
            .create_supplier("Zenith", "parts@zenith.example", "+61255505678")
            .await
            .unwrap();

        let result = service
            .update_supplier(
                other.id,
                SupplierUpdate {
                    email: Some("sales@acme.example".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_err());
    }
}
