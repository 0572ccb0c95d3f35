//! Customer repository trait defining the interface for customer persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::customer::Customer;
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for customers. Text fields match as substrings.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Repository trait for Customer entity persistence operations
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by exact email (natural key)
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by exact phone (natural key)
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, DomainError>;

    /// Persist a new customer
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Update an existing customer
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Delete a customer; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of items and the total match count
    async fn search(
        &self,
        filter: &CustomerFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Customer>, u64), DomainError>;
}

/// Mock implementation of CustomerRepository for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    pub struct MockCustomerRepository {
        customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
    }

    impl MockCustomerRepository {
        pub fn new() -> Self {
            Self {
                customers: Arc::new(RwLock::new(HashMap::new())),
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
    impl CustomerRepository for MockCustomerRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
            let customers = self.customers.read().await;
            Ok(customers.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
            let customers = self.customers.read().await;
            Ok(customers.values().find(|c| c.email == email).cloned())
        }

        async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, DomainError> {
            let customers = self.customers.read().await;
            Ok(customers.values().find(|c| c.phone == phone).cloned())
        }

        async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
            let mut customers = self.customers.write().await;

            if customers.values().any(|c| c.email == customer.email) {
                return Err(DomainError::duplicate("email"));
            }
            if customers.values().any(|c| c.phone == customer.phone) {
                return Err(DomainError::duplicate("phone"));
            }

            customers.insert(customer.id, customer.clone());
            Ok(customer)
        }

        async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
            let mut customers = self.customers.write().await;

            if !customers.contains_key(&customer.id) {
                return Err(DomainError::not_found("Customer"));
            }

            customers.insert(customer.id, customer.clone());
            Ok(customer)
        }

        async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
            let mut customers = self.customers.write().await;
            Ok(customers.remove(&id).is_some())
        }

        async fn search(
            &self,
            filter: &CustomerFilter,
            pagination: &Pagination,
        ) -> Result<(Vec<Customer>, u64), DomainError> {
            let customers = self.customers.read().await;
            let mut matches: Vec<Customer> = customers
                .values()
                .filter(|c| {
                    contains(&c.name, &filter.name)
                        && contains(&c.email, &filter.email)
                        && contains(&c.phone, &filter.phone)
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

    fn customer(name: &str, email: &str, phone: &str) -> Customer {
        Customer::new(name, email, phone, None).unwrap()
    }

    #[tokio::test]
    async fn test_mock_repository_create_and_find() {
        let repo = mock::MockCustomerRepository::new();
        let jane = customer("Jane Cooper", "jane@example.com", "+61412345678");

        repo.create(jane.clone()).await.unwrap();

        let found = repo.find_by_id(jane.id).await.unwrap();
        assert_eq!(found.unwrap().email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_mock_repository_duplicate_email() {
        let repo = mock::MockCustomerRepository::new();
        repo.create(customer("Jane", "jane@example.com", "+61412345678"))
            .await
            .unwrap();

        let result = repo
            .create(customer("Janet", "jane@example.com", "+61412349999"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_repository_delete() {
        let repo = mock::MockCustomerRepository::new();
        let jane = customer("Jane", "jane@example.com", "+61412345678");
        repo.create(jane.clone()).await.unwrap();

        assert!(repo.delete(jane.id).await.unwrap());
        assert!(!repo.delete(jane.id).await.unwrap());
        assert!(repo.find_by_id(jane.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_repository_search_by_email_fragment() {
        let repo = mock::MockCustomerRepository::new();
        repo.create(customer("Jane", "jane@shop.example", "+61412345678"))
            .await
            .unwrap();
        repo.create(customer("Raj", "raj@home.example", "+61412340000"))
            .await
            .unwrap();

        let filter = CustomerFilter {
            email: Some("shop".to_string()),
            ..Default::default()
        };
        let (page, total) = repo.search(&filter, &Pagination::default()).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Jane");
    }
}
