//! Order DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use od_core::domain::entities::order::{Order, OrderItem, OrderStatus};
use od_core::repositories::OrderFilter;
use od_shared::types::Pagination;

/// Request body for POST /api/v1/orders
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub user_id: Uuid,
}

/// Request body for POST /api/v1/orders/{id}/items
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddOrderItemRequest {
    pub offer_id: Uuid,

    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Request body for PATCH /api/v1/orders/{id}/items/{item_id}
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderItemRequest {
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Request body for PATCH /api/v1/orders/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeOrderStatusRequest {
    pub status: OrderStatus,
}

/// Query parameters for GET /api/v1/orders
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSearchQuery {
    pub customer_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl OrderSearchQuery {
    pub fn filter(&self) -> OrderFilter {
        OrderFilter {
            customer_id: self.customer_id,
            user_id: self.user_id,
            status: self.status,
        }
    }

    pub fn pagination(&self) -> Pagination {
        super::pagination_from(self.page, self.per_page)
    }
}

/// Order line item representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub quantity: u32,
    pub price: Decimal,
    pub subtotal: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id,
            offer_id: item.offer_id,
            quantity: item.quantity,
            price: item.price,
            subtotal: item.subtotal(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Order representation returned by the API; the total is derived from the
/// live item collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub user_id: Uuid,
    pub status: OrderStatus,
    pub items: Vec<OrderItemResponse>,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            user_id: order.user_id,
            status: order.status,
            total: order.total(),
            items: order.items.iter().map(OrderItemResponse::from).collect(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use od_core::domain::entities::offer::{Offer, OfferType};
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_item_request_rejects_zero_quantity() {
        let request = AddOrderItemRequest {
            offer_id: Uuid::new_v4(),
            quantity: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_order_response_carries_derived_total() {
        let mut order = Order::new(Uuid::new_v4(), Uuid::new_v4());
        let offer = Offer::new(
            "Chair",
            dec!(25.50),
            OfferType::Product,
            None,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();
        order.add_item(&offer, 2).unwrap();

        let response = OrderResponse::from(order);
        assert_eq!(response.total, dec!(51.00));
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].subtotal, dec!(51.00));
    }
}
