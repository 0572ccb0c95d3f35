//! Offer DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::offer::{Offer, OfferType};
use od_core::repositories::OfferFilter;
use od_core::services::OfferUpdate;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/offers
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    pub price: Decimal,

    pub offer_type: OfferType,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub category_id: Uuid,

    pub supplier_id: Uuid,
}

/// Request body for PUT /api/v1/offers/{id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOfferRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    pub price: Option<Decimal>,

    pub offer_type: Option<OfferType>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub category_id: Option<Uuid>,

    pub supplier_id: Option<Uuid>,
}

impl From<UpdateOfferRequest> for OfferUpdate {
    fn from(request: UpdateOfferRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            offer_type: request.offer_type,
            description: request.description,
            category_id: request.category_id,
            supplier_id: request.supplier_id,
        }
    }
}

/// Query parameters for GET /api/v1/offers
#[derive(Debug, Clone, Deserialize)]
pub struct OfferSearchQuery {
    pub name: Option<String>,
    pub offer_type: Option<OfferType>,
    pub category_id: Option<Uuid>,
    pub supplier_id: Option<Uuid>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl OfferSearchQuery {
    pub fn filter(&self) -> OfferFilter {
        OfferFilter {
            name: self.name.clone(),
            offer_type: self.offer_type,
            category_id: self.category_id,
            supplier_id: self.supplier_id,
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// Offer representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub offer_type: OfferType,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub supplier_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            name: offer.name,
            price: offer.price,
            offer_type: offer.offer_type,
            description: offer.description,
            category_id: offer.category_id,
            supplier_id: offer.supplier_id,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}
