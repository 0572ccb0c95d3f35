//! Main order service implementation

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CustomerRepository, OfferRepository, OrderFilter, OrderRepository, UserRepository,
};
use od_shared::types::{PaginatedResponse, Pagination};

/// Use-case service for the order aggregate.
///
/// All item mutations load the aggregate, delegate to its methods and
/// persist the result, so the aggregate's invariants hold no matter which
/// entry point was used.
pub struct OrderService<O, F, C, U>
where
    O: OrderRepository,
    F: OfferRepository,
    C: CustomerRepository,
    U: UserRepository,
{
    order_repository: Arc<O>,
    offer_repository: Arc<F>,
    customer_repository: Arc<C>,
    user_repository: Arc<U>,
}

impl<O, F, C, U> OrderService<O, F, C, U>
where
    O: OrderRepository,
    F: OfferRepository,
    C: CustomerRepository,
    U: UserRepository,
{
    /// Create a new order service
    pub fn new(
        order_repository: Arc<O>,
        offer_repository: Arc<F>,
        customer_repository: Arc<C>,
        user_repository: Arc<U>,
    ) -> Self {
        Self {
            order_repository,
            offer_repository,
            customer_repository,
            user_repository,
        }
    }

    /// Create an empty order for an existing customer, registered by an
    /// existing staff user
    pub async fn create_order(&self, customer_id: Uuid, user_id: Uuid) -> DomainResult<Order> {
        if self
            .customer_repository
            .find_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found("Customer"));
        }
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        let order = Order::new(customer_id, user_id);
        let created = self.order_repository.create(order).await?;
        debug!(order_id = %created.id, "order created");
        Ok(created)
    }

    /// Fetch an order (with its items) by id
    pub async fn get_order(&self, id: Uuid) -> DomainResult<Order> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order"))
    }

    /// Paginated search over orders
    pub async fn search_orders(
        &self,
        filter: OrderFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Order>> {
        let pagination = pagination.validate();
        let (items, total) = self.order_repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Add a line item to an order, snapshotting the offer's current price.
    ///
    /// Returns the updated order. Fails with `NotFound` if the order or the
    /// offer does not exist and with a validation error for a zero quantity.
    pub async fn add_item(
        &self,
        order_id: Uuid,
        offer_id: Uuid,
        quantity: u32,
    ) -> DomainResult<Order> {
        let mut order = self.get_order(order_id).await?;
        let offer = self
            .offer_repository
            .find_by_id(offer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Offer"))?;

        order.add_item(&offer, quantity)?;
        let updated = self.order_repository.update(order).await?;
        debug!(order_id = %order_id, offer_id = %offer_id, quantity, "order item added");
        Ok(updated)
    }

    /// Remove a line item from an order.
    ///
    /// Fails with `NotFound` if the order does not exist or the item does
    /// not belong to it.
    pub async fn remove_item(&self, order_id: Uuid, item_id: Uuid) -> DomainResult<Order> {
        let mut order = self.get_order(order_id).await?;
        order.remove_item(item_id)?;
        let updated = self.order_repository.update(order).await?;
        debug!(order_id = %order_id, item_id = %item_id, "order item removed");
        Ok(updated)
    }

    /// Replace the quantity on an existing line item. The price snapshot is
    /// untouched.
    pub async fn update_item_quantity(
        &self,
        order_id: Uuid,
        item_id: Uuid,
        quantity: u32,
    ) -> DomainResult<Order> {
        let mut order = self.get_order(order_id).await?;
        order.update_item_quantity(item_id, quantity)?;
        self.order_repository.update(order).await
    }

    /// Transition the order status. Any status may replace any other.
    pub async fn change_status(&self, order_id: Uuid, status: OrderStatus) -> DomainResult<Order> {
        let mut order = self.get_order(order_id).await?;
        order.set_status(status);
        let updated = self.order_repository.update(order).await?;
        debug!(order_id = %order_id, status = status.as_str(), "order status changed");
        Ok(updated)
    }

    /// Delete an order and, cascading, its items
    pub async fn delete_order(&self, id: Uuid) -> DomainResult<()> {
        if !self.order_repository.delete(id).await? {
            return Err(DomainError::not_found("Order"));
        }
        debug!(order_id = %id, "order deleted");
        Ok(())
    }
}
