//! Order aggregate: an order and the line items it owns.
//!
//! The order is the consistency boundary. Items enter and leave only through
//! the order's methods, every item back-references its owning order, and the
//! total is always derived from the live item collection. An item's price is
//! snapshotted from the offer at insertion time so later price changes never
//! rewrite historical orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::errors::{DomainError, DomainResult, ValidationError};

/// Lifecycle status of an order.
///
/// Any status may replace any other; no transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Database/string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status from its string representation
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "created" => Some(OrderStatus::Created),
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// A single line of an order: an offer, a quantity, and the unit price
/// captured when the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique identifier for the item
    pub id: Uuid,

    /// Owning order. `None` once the item has been detached.
    pub order_id: Option<Uuid>,

    /// Offer this line refers to
    pub offer_id: Uuid,

    /// Ordered quantity (always positive)
    pub quantity: u32,

    /// Unit price snapshotted from the offer at insertion time
    pub price: Decimal,

    /// Timestamp when the item was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the item was last updated
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    fn new(order_id: Uuid, offer: &Offer, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity { quantity }.into());
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            order_id: Some(order_id),
            offer_id: offer.id,
            quantity,
            price: offer.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Line subtotal: snapshot price times quantity
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order placed by a customer and handled by a staff user, owning an
/// ordered collection of line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier for the order
    pub id: Uuid,

    /// Customer the order was placed for
    pub customer_id: Uuid,

    /// Staff user who registered the order
    pub user_id: Uuid,

    /// Current lifecycle status
    pub status: OrderStatus,

    /// Line items, in insertion order
    pub items: Vec<OrderItem>,

    /// Timestamp when the order was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the order was last updated
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new empty order in `Created` status
    pub fn new(customer_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            user_id,
            status: OrderStatus::Created,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a line item for the given offer, snapshotting its current price.
    ///
    /// The snapshot is fixed at insertion; later changes to the offer's
    /// price never alter the item. Fails if the quantity is zero.
    pub fn add_item(&mut self, offer: &Offer, quantity: u32) -> DomainResult<&OrderItem> {
        let item = OrderItem::new(self.id, offer, quantity)?;
        self.items.push(item);
        self.updated_at = Utc::now();
        Ok(self.items.last().expect("item was just pushed"))
    }

    /// Detaches and returns the item with the given id.
    ///
    /// The returned item's back-reference is cleared; ownership is exclusive
    /// so a detached item belongs to no order. Fails with `NotFound` if the
    /// item is not part of this order.
    pub fn remove_item(&mut self, item_id: Uuid) -> DomainResult<OrderItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| DomainError::not_found("OrderItem"))?;

        let mut item = self.items.remove(position);
        item.order_id = None;
        self.updated_at = Utc::now();
        Ok(item)
    }

    /// Replaces the quantity on an existing item.
    ///
    /// The price snapshot is untouched. Fails with `NotFound` if the item is
    /// not part of this order and with a validation error if the quantity is
    /// zero.
    pub fn update_item_quantity(&mut self, item_id: Uuid, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity { quantity }.into());
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| DomainError::not_found("OrderItem"))?;

        item.quantity = quantity;
        item.updated_at = Utc::now();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Transitions the order status. Any status may replace any other.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Looks up an item by id
    pub fn item(&self, item_id: Uuid) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Total cost, recomputed from the live item collection
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Number of line items
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::offer::OfferType;
    use rust_decimal_macros::dec;

    fn offer_priced(price: Decimal) -> Offer {
        Offer::new(
            "Ergonomic Chair",
            price,
            OfferType::Product,
            None,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_order_is_empty_and_created() {
        let order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.item_count(), 0);
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_item_snapshots_price_and_links_back() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let order_id = order.id;
        let offer = offer_priced(dec!(10.0));

        let item = order.add_item(&offer, 2).unwrap();
        assert_eq!(item.price, dec!(10.0));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.order_id, Some(order_id));
        assert_eq!(order.total(), dec!(20.0));
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let offer = offer_priced(dec!(10.0));

        let result = order.add_item(&offer, 0);
        assert!(matches!(
            result.unwrap_err(),
            DomainError::ValidationErr(ValidationError::InvalidQuantity { quantity: 0 })
        ));
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_price_snapshot_survives_offer_price_change() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let mut offer = offer_priced(dec!(10.0));

        let item_id = order.add_item(&offer, 2).unwrap().id;
        offer.change_price(dec!(99.0)).unwrap();

        let item = order.item(item_id).unwrap();
        assert_eq!(item.price, dec!(10.0));
        assert_eq!(order.total(), dec!(20.0));
    }

    #[test]
    fn test_remove_item_detaches_and_clears_backref() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let offer = offer_priced(dec!(5.5));
        let item_id = order.add_item(&offer, 1).unwrap().id;

        let removed = order.remove_item(item_id).unwrap();
        assert_eq!(removed.order_id, None);
        assert!(order.item(item_id).is_none());
        assert_eq!(order.item_count(), 0);
    }

    #[test]
    fn test_remove_unknown_item_is_not_found() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let result = order.remove_item(Uuid::new_v4());
        assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
    }

    #[test]
    fn test_update_item_quantity() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let offer = offer_priced(dec!(4.0));
        let item_id = order.add_item(&offer, 1).unwrap().id;

        order.update_item_quantity(item_id, 3).unwrap();
        assert_eq!(order.item(item_id).unwrap().quantity, 3);
        assert_eq!(order.total(), dec!(12.0));

        let result = order.update_item_quantity(item_id, 0);
        assert!(result.is_err());
        assert_eq!(order.item(item_id).unwrap().quantity, 3);
    }

    #[test]
    fn test_update_quantity_keeps_price_snapshot() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let offer = offer_priced(dec!(7.25));
        let item_id = order.add_item(&offer, 2).unwrap().id;

        order.update_item_quantity(item_id, 10).unwrap();
        assert_eq!(order.item(item_id).unwrap().price, dec!(7.25));
    }

    #[test]
    fn test_status_transitions_are_unrestricted() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());

        order.set_status(OrderStatus::Completed);
        assert_eq!(order.status, OrderStatus::Completed);

        // No transition table: moving backwards is allowed.
        order.set_status(OrderStatus::Created);
        assert_eq!(order.status, OrderStatus::Created);

        order.set_status(OrderStatus::Cancelled);
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_total_over_multiple_items() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let chair = offer_priced(dec!(100.00));
        let desk = Offer::new(
            "Standing Desk",
            dec!(349.95),
            OfferType::Product,
            None,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();

        order.add_item(&chair, 2).unwrap();
        order.add_item(&desk, 1).unwrap();
        assert_eq!(order.total(), dec!(549.95));
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(OrderStatus::parse("in_progress"), Some(OrderStatus::InProgress));
        assert_eq!(
            OrderStatus::parse(OrderStatus::Cancelled.as_str()),
            Some(OrderStatus::Cancelled)
        );
        assert_eq!(OrderStatus::parse("shipped"), None);
    }
}
