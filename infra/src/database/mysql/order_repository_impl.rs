//! MySQL implementation of the OrderRepository trait.
//!
//! Orders and their items are persisted as an aggregate: updates replace the
//! item rows wholesale inside a transaction, and deleting an order cascades
//! to its items.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, Row, Transaction};
use uuid::Uuid;

use od_core::domain::entities::order::{Order, OrderItem, OrderStatus};
use od_core::errors::DomainError;
use od_core::repositories::{OrderFilter, OrderRepository};
use od_shared::types::Pagination;

const ORDER_COLUMNS: &str = "id, customer_id, user_id, status, created_at, updated_at";
const ITEM_COLUMNS: &str = "id, order_id, offer_id, quantity, price, created_at, updated_at";

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    /// Create a new MySQL order repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Order entity (items loaded separately)
    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let customer_id: String = row
            .try_get("customer_id")
            .map_err(|e| DomainError::database(format!("Failed to get customer_id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;

        let status_str: String = row
            .try_get("status")
            .map_err(|e| DomainError::database(format!("Failed to get status: {}", e)))?;
        let status = OrderStatus::parse(&status_str)
            .ok_or_else(|| DomainError::database(format!("Unknown order status: {}", status_str)))?;

        Ok(Order {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            customer_id: Uuid::parse_str(&customer_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            status,
            items: Vec::new(),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Convert a database row to an OrderItem entity
    fn row_to_item(row: &sqlx::mysql::MySqlRow) -> Result<OrderItem, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let order_id: String = row
            .try_get("order_id")
            .map_err(|e| DomainError::database(format!("Failed to get order_id: {}", e)))?;
        let offer_id: String = row
            .try_get("offer_id")
            .map_err(|e| DomainError::database(format!("Failed to get offer_id: {}", e)))?;

        Ok(OrderItem {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            order_id: Some(
                Uuid::parse_str(&order_id)
                    .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            ),
            offer_id: Uuid::parse_str(&offer_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            quantity: row
                .try_get::<u32, _>("quantity")
                .map_err(|e| DomainError::database(format!("Failed to get quantity: {}", e)))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| DomainError::database(format!("Failed to get price: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Load the items belonging to an order, in insertion order
    async fn load_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>, DomainError> {
        let query = format!(
            "SELECT {} FROM order_items WHERE order_id = ? ORDER BY created_at, id",
            ITEM_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(order_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_item).collect()
    }

    /// Insert the item rows of an order within a transaction
    async fn insert_items(
        tx: &mut Transaction<'_, MySql>,
        order: &Order,
    ) -> Result<(), DomainError> {
        let query = format!(
            "INSERT INTO order_items ({}) VALUES (?, ?, ?, ?, ?, ?, ?)",
            ITEM_COLUMNS
        );

        for item in &order.items {
            sqlx::query(&query)
                .bind(item.id.to_string())
                .bind(order.id.to_string())
                .bind(item.offer_id.to_string())
                .bind(item.quantity)
                .bind(item.price)
                .bind(item.created_at)
                .bind(item.updated_at)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to insert order item: {}", e))
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let query = format!("SELECT {} FROM orders WHERE id = ? LIMIT 1", ORDER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => {
                let mut order = Self::row_to_order(&row)?;
                order.items = self.load_items(order.id).await?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let query = format!(
            "INSERT INTO orders ({}) VALUES (?, ?, ?, ?, ?, ?)",
            ORDER_COLUMNS
        );
        sqlx::query(&query)
            .bind(order.id.to_string())
            .bind(order.customer_id.to_string())
            .bind(order.user_id.to_string())
            .bind(order.status.as_str())
            .bind(order.created_at)
            .bind(order.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create order: {}", e)))?;

        Self::insert_items(&mut tx, &order).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let result = sqlx::query(
            r#"
            UPDATE orders
            SET customer_id = ?, user_id = ?, status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(order.customer_id.to_string())
        .bind(order.user_id.to_string())
        .bind(order.status.as_str())
        .bind(order.updated_at)
        .bind(order.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update order: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Order"));
        }

        // Replace the item rows wholesale; the aggregate in memory is the
        // source of truth for the collection.
        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(order.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to clear order items: {}", e)))?;

        Self::insert_items(&mut tx, &order).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(order)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete order items: {}", e)))?;

        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete order: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit transaction: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &OrderFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Order>, u64), DomainError> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.customer_id.is_some() {
            conditions.push("customer_id = ?");
        }
        if filter.user_id.is_some() {
            conditions.push("user_id = ?");
        }
        if filter.status.is_some() {
            conditions.push("status = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS total FROM orders{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(customer_id) = filter.customer_id {
            count_query = count_query.bind(customer_id.to_string());
        }
        if let Some(user_id) = filter.user_id {
            count_query = count_query.bind(user_id.to_string());
        }
        if let Some(status) = filter.status {
            count_query = count_query.bind(status.as_str());
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?
            .try_get("total")
            .map_err(|e| DomainError::database(format!("Failed to get total: {}", e)))?;

        let page_sql = format!(
            "SELECT {} FROM orders{} ORDER BY created_at, id LIMIT ? OFFSET ?",
            ORDER_COLUMNS, where_clause
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(customer_id) = filter.customer_id {
            page_query = page_query.bind(customer_id.to_string());
        }
        if let Some(user_id) = filter.user_id {
            page_query = page_query.bind(user_id.to_string());
        }
        if let Some(status) = filter.status {
            page_query = page_query.bind(status.as_str());
        }
        let rows = page_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut order = Self::row_to_order(row)?;
            order.items = self.load_items(order.id).await?;
            orders.push(order);
        }

        Ok((orders, total as u64))
    }
}
