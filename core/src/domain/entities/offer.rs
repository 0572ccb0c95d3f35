//! Offer entity: a product or service the business sells.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainResult, ValidationError};
use od_shared::utils::validation;

/// Kind of offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    /// A physical product
    Product,
    /// A service performed for the customer
    Service,
}

impl OfferType {
    /// Database/string representation of the offer type
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferType::Product => "product",
            OfferType::Service => "service",
        }
    }

    /// Parse an offer type from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "product" => Some(OfferType::Product),
            "service" => Some(OfferType::Service),
            _ => None,
        }
    }
}

/// A sellable product or service. The name is a natural key and must be
/// unique. The current price is the one snapshotted into new order items;
/// changing it never touches existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique identifier for the offer
    pub id: Uuid,

    /// Offer name (unique, non-blank)
    pub name: String,

    /// Current unit price
    pub price: Decimal,

    /// Whether this is a product or a service
    pub offer_type: OfferType,

    /// Optional free-text description
    pub description: Option<String>,

    /// Category this offer belongs to
    pub category_id: Uuid,

    /// Supplier providing this offer
    pub supplier_id: Uuid,

    /// Timestamp when the offer was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the offer was last updated
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Creates a new Offer instance
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        offer_type: OfferType,
        description: Option<String>,
        category_id: Uuid,
        supplier_id: Uuid,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_price(price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            offer_type,
            description,
            category_id,
            supplier_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the offer
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the current price. Existing order items keep their snapshot.
    pub fn change_price(&mut self, price: Decimal) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replaces the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Changes whether this is a product or a service
    pub fn set_offer_type(&mut self, offer_type: OfferType) {
        self.offer_type = offer_type;
        self.updated_at = Utc::now();
    }

    /// Moves the offer to a different category
    pub fn set_category(&mut self, category_id: Uuid) {
        self.category_id = category_id;
        self.updated_at = Utc::now();
    }

    /// Moves the offer to a different supplier
    pub fn set_supplier(&mut self, supplier_id: Uuid) {
        self.supplier_id = supplier_id;
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if !validation::not_blank(name) {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() {
        return Err(ValidationError::InvalidPrice {
            price: price.to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn offer() -> Offer {
        Offer::new(
            "Standing Desk",
            dec!(349.95),
            OfferType::Product,
            None,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_offer() {
        let offer = offer();
        assert_eq!(offer.price, dec!(349.95));
        assert_eq!(offer.offer_type, OfferType::Product);
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Offer::new(
            "Standing Desk",
            dec!(-1),
            OfferType::Product,
            None,
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_change_price() {
        let mut offer = offer();
        offer.change_price(dec!(299.00)).unwrap();
        assert_eq!(offer.price, dec!(299.00));
        assert!(offer.change_price(dec!(-5)).is_err());
    }

    #[test]
    fn test_offer_type_round_trip() {
        assert_eq!(OfferType::parse("service"), Some(OfferType::Service));
        assert_eq!(OfferType::parse(OfferType::Product.as_str()), Some(OfferType::Product));
        assert_eq!(OfferType::parse("bundle"), None);
    }
}
