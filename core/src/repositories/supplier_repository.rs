//! Supplier repository trait defining the interface for supplier persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::supplier::Supplier;
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for suppliers. Text fields match as substrings.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Repository trait for Supplier entity persistence operations
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Find a supplier by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError>;

    /// Find a supplier by exact email (natural key)
    async fn find_by_email(&self, email: &str) -> Result<Option<Supplier>, DomainError>;

    /// Find a supplier by exact phone (natural key)
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Supplier>, DomainError>;

    /// Persist a new supplier
    async fn create(&self, supplier: Supplier) -> Result<Supplier, DomainError>;

    /// Update an existing supplier
    async fn update(&self, supplier: Supplier) -> Result<Supplier, DomainError>;

    /// Delete a supplier; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of items and the total match count
    async fn search(
        &self,
        filter: &SupplierFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Supplier>, u64), DomainError>;
}

/// Mock implementation of SupplierRepository for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    pub struct MockSupplierRepository {
        suppliers: Arc<RwLock<HashMap<Uuid, Supplier>>>,
    }

    impl MockSupplierRepository {
        pub fn new() -> Self {
            Self {
                suppliers: Arc::new(RwLock::new(HashMap::new())),
            }
        }
    }

    fn contains(haystack: &str, needle: &Option<String>) -> bool {
        match needle {
            Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }

    #[async_trait]
    impl SupplierRepository for MockSupplierRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError> {
            let suppliers = self.suppliers.read().await;
            Ok(suppliers.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Supplier>, DomainError> {
            let suppliers = self.suppliers.read().await;
            Ok(suppliers.values().find(|s| s.email == email).cloned())
        }

        async fn find_by_phone(&self, phone: &str) -> Result<Option<Supplier>, DomainError> {
            let suppliers = self.suppliers.read().await;
            Ok(suppliers.values().find(|s| s.phone == phone).cloned())
        }

        async fn create(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
            let mut suppliers = self.suppliers.write().await;

            if suppliers.values().any(|s| s.email == supplier.email) {
                return Err(DomainError::duplicate("email"));
            }
            if suppliers.values().any(|s| s.phone == supplier.phone) {
                return Err(DomainError::duplicate("phone"));
            }

            suppliers.insert(supplier.id, supplier.clone());
            Ok(supplier)
        }

        async fn update(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
            let mut suppliers = self.suppliers.write().await;

            if !suppliers.contains_key(&supplier.id) {
                return Err(DomainError::not_found("Supplier"));
            }

            suppliers.insert(supplier.id, supplier.clone());
            Ok(supplier)
        }

        async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
            let mut suppliers = self.suppliers.write().await;
            Ok(suppliers.remove(&id).is_some())
        }

        async fn search(
            &self,
            filter: &SupplierFilter,
            pagination: &Pagination,
        ) -> Result<(Vec<Supplier>, u64), DomainError> {
            let suppliers = self.suppliers.read().await;
            let mut matches: Vec<Supplier> = suppliers
                .values()
                .filter(|s| {
                    contains(&s.name, &filter.name)
                        && contains(&s.email, &filter.email)
                        && contains(&s.phone, &filter.phone)
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

            let total = matches.len() as u64;
            let page = matches
                .into_iter()
                .skip(pagination.offset() as usize)
                .take(pagination.limit() as usize)
                .collect();
            Ok((page, total))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str, email: &str, phone: &str) -> Supplier {
        Supplier::new(name, email, phone).unwrap()
    }

    #[tokio::test]
    async fn test_mock_repository_natural_key_lookups() {
        let repo = mock::MockSupplierRepository::new();
        let acme = supplier("Acme Wholesale", "sales@acme.example", "+61255501234");
        repo.create(acme.clone()).await.unwrap();

        let by_email = repo.find_by_email("sales@acme.example").await.unwrap();
        assert_eq!(by_email.unwrap().id, acme.id);

        let by_phone = repo.find_by_phone("+61255501234").await.unwrap();
        assert_eq!(by_phone.unwrap().id, acme.id);
    }

    #[tokio::test]
    async fn test_mock_repository_duplicate_phone() {
        let repo = mock::MockSupplierRepository::new();
        repo.create(supplier("Acme", "sales@acme.example", "+61255501234"))
            .await
            .unwrap();

        let result = repo
            .create(supplier("Other", "other@example.com", "+61255501234"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_repository_search_by_name() {
        let repo = mock::MockSupplierRepository::new();
        repo.create(supplier("Acme Wholesale", "sales@acme.example", "+61255501234"))
            .await
            .unwrap();
        repo.create(supplier("Zenith Parts", "parts@zenith.example", "+61255505678"))
            .await
            .unwrap();

        let filter = SupplierFilter {
            name: Some("acme".to_string()),
            ..Default::default()
        };
        let (page, total) = repo.search(&filter, &Pagination::default()).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Acme Wholesale");
    }
}
