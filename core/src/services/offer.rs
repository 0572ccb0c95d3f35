//! Offer use-cases: create, get, search, update, delete.
//!
//! Creating or re-homing an offer requires the referenced category and
//! supplier to exist.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::offer::{Offer, OfferType};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CategoryRepository, OfferFilter, OfferRepository, SupplierRepository,
};
use od_shared::types::{PaginatedResponse, Pagination};

/// Partial update for an offer; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct OfferUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub offer_type: Option<OfferType>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
}

/// Use-case service for catalog offers
pub struct OfferService<O, C, S>
where
    O: OfferRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    offer_repository: Arc<O>,
    category_repository: Arc<C>,
    supplier_repository: Arc<S>,
}

impl<O, C, S> OfferService<O, C, S>
where
    O: OfferRepository,
    C: CategoryRepository,
    S: SupplierRepository,
{
    /// Create a new offer service
    pub fn new(
        offer_repository: Arc<O>,
        category_repository: Arc<C>,
        supplier_repository: Arc<S>,
    ) -> Self {
        Self {
            offer_repository,
            category_repository,
            supplier_repository,
        }
    }

    /// Create an offer after checking the name is unused and the referenced
    /// category and supplier exist
    pub async fn create_offer(
        &self,
        name: &str,
        price: Decimal,
        offer_type: OfferType,
        description: Option<String>,
        category_id: Uuid,
        supplier_id: Uuid,
    ) -> DomainResult<Offer> {
        if self.offer_repository.find_by_name(name).await?.is_some() {
            return Err(DomainError::duplicate("name"));
        }
        self.require_category(category_id).await?;
        self.require_supplier(supplier_id).await?;

        let offer = Offer::new(name, price, offer_type, description, category_id, supplier_id)?;
        let created = self.offer_repository.create(offer).await?;
        debug!(offer_id = %created.id, "offer created");
        Ok(created)
    }

    /// Fetch an offer by id
    pub async fn get_offer(&self, id: Uuid) -> DomainResult<Offer> {
        self.offer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Offer"))
    }

    /// Paginated search over offers
    pub async fn search_offers(
        &self,
        filter: OfferFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Offer>> {
        let pagination = pagination.validate();
        let (items, total) = self.offer_repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Apply a partial update. Name uniqueness is re-checked only when the
    /// name changes; a changed category or supplier must exist.
    pub async fn update_offer(&self, id: Uuid, update: OfferUpdate) -> DomainResult<Offer> {
        let mut offer = self.get_offer(id).await?;

        if let Some(name) = update.name {
            if name != offer.name {
                if self.offer_repository.find_by_name(&name).await?.is_some() {
                    return Err(DomainError::duplicate("name"));
                }
                offer.rename(name)?;
            }
        }
        if let Some(price) = update.price {
            offer.change_price(price)?;
        }
        if let Some(offer_type) = update.offer_type {
            offer.set_offer_type(offer_type);
        }
        if let Some(description) = update.description {
            offer.set_description(Some(description));
        }
        if let Some(category_id) = update.category_id {
            if category_id != offer.category_id {
                self.require_category(category_id).await?;
                offer.set_category(category_id);
            }
        }
        if let Some(supplier_id) = update.supplier_id {
            if supplier_id != offer.supplier_id {
                self.require_supplier(supplier_id).await?;
                offer.set_supplier(supplier_id);
            }
        }

        self.offer_repository.update(offer).await
    }

    /// Delete an offer after checking it exists
    pub async fn delete_offer(&self, id: Uuid) -> DomainResult<()> {
        if !self.offer_repository.delete(id).await? {
            return Err(DomainError::not_found("Offer"));
        }
        debug!(offer_id = %id, "offer deleted");
        Ok(())
    }

    async fn require_category(&self, id: Uuid) -> DomainResult<()> {
        self.category_repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Category"))
    }

    async fn require_supplier(&self, id: Uuid) -> DomainResult<()> {
        self.supplier_repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Supplier"))
    }
}
