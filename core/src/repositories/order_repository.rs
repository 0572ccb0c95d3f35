//! Order repository trait defining the interface for order persistence.
//!
//! The repository works at the aggregate boundary: an order is loaded and
//! stored together with its items, and deleting an order removes its items.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::order::{Order, OrderStatus};
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for orders. All fields are exact matches.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub customer_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
}

/// Repository trait for the Order aggregate
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order (with its items) by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// Persist a new order and its items
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Update an existing order, replacing its item collection
    async fn update(&self, order: Order) -> Result<Order, DomainError>;

    /// Delete an order and, cascading, its items; returns whether a row was
    /// removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of orders (with items) and the
    /// total match count
    async fn search(
        &self,
        filter: &OrderFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Order>, u64), DomainError>;
}
