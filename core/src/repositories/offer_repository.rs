//! Offer repository trait defining the interface for offer persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::offer::{Offer, OfferType};
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for offers. The name matches as a substring; the remaining
/// fields are exact.
#[derive(Debug, Clone, Default)]
pub struct OfferFilter {
    pub name: Option<String>,
    pub offer_type: Option<OfferType>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
}

/// Repository trait for Offer entity persistence operations
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Find an offer by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, DomainError>;

    /// Find an offer by its exact name (natural key)
    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, DomainError>;

    /// Persist a new offer
    async fn create(&self, offer: Offer) -> Result<Offer, DomainError>;

    /// Update an existing offer
    async fn update(&self, offer: Offer) -> Result<Offer, DomainError>;

    /// Delete an offer; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of items and the total match count
    async fn search(
        &self,
        filter: &OfferFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Offer>, u64), DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn offer(name: &str, offer_type: OfferType, category_id: Uuid) -> Offer {
        Offer::new(
            name,
            dec!(19.95),
            offer_type,
            None,
            category_id,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_repository_duplicate_name() {
        let repo = mock::MockOfferRepository::new();
        repo.create(offer("Desk Setup", OfferType::Service, Uuid::new_v4()))
            .await
            .unwrap();

        let result = repo
            .create(offer("Desk Setup", OfferType::Service, Uuid::new_v4()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_repository_search_by_type_and_category() {
        let repo = mock::MockOfferRepository::new();
        let category_id = Uuid::new_v4();
        repo.create(offer("Desk", OfferType::Product, category_id))
            .await
            .unwrap();
        repo.create(offer("Chair", OfferType::Product, Uuid::new_v4()))
            .await
            .unwrap();
        repo.create(offer("Assembly", OfferType::Service, category_id))
            .await
            .unwrap();

        let filter = OfferFilter {
            offer_type: Some(OfferType::Product),
            category_id: Some(category_id),
            ..Default::default()
        };
        let (page, total) = repo.search(&filter, &Pagination::default()).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Desk");
    }
}
