//! MySQL implementation of the OfferRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use od_core::domain::entities::offer::{Offer, OfferType};
use od_core::errors::DomainError;
use od_core::repositories::{OfferFilter, OfferRepository};
use od_shared::types::Pagination;

use super::like_pattern;

const SELECT_COLUMNS: &str =
    "id, name, price, offer_type, description, category_id, supplier_id, created_at, updated_at";

/// MySQL implementation of OfferRepository
pub struct MySqlOfferRepository {
    pool: MySqlPool,
}

impl MySqlOfferRepository {
    /// Create a new MySQL offer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Offer entity
    fn row_to_offer(row: &sqlx::mysql::MySqlRow) -> Result<Offer, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let category_id: String = row
            .try_get("category_id")
            .map_err(|e| DomainError::database(format!("Failed to get category_id: {}", e)))?;
        let supplier_id: String = row
            .try_get("supplier_id")
            .map_err(|e| DomainError::database(format!("Failed to get supplier_id: {}", e)))?;

        let offer_type_str: String = row
            .try_get("offer_type")
            .map_err(|e| DomainError::database(format!("Failed to get offer_type: {}", e)))?;
        let offer_type = OfferType::parse(&offer_type_str).ok_or_else(|| {
            DomainError::database(format!("Unknown offer type: {}", offer_type_str))
        })?;

        Ok(Offer {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| DomainError::database(format!("Failed to get price: {}", e)))?,
            offer_type,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?,
            category_id: Uuid::parse_str(&category_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            supplier_id: Uuid::parse_str(&supplier_id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl OfferRepository for MySqlOfferRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Offer>, DomainError> {
        let query = format!("SELECT {} FROM offers WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_offer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, DomainError> {
        let query = format!(
            "SELECT {} FROM offers WHERE name = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_offer(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, offer: Offer) -> Result<Offer, DomainError> {
        let query = r#"
            INSERT INTO offers (
                id, name, price, offer_type, description, category_id,
                supplier_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(offer.id.to_string())
            .bind(&offer.name)
            .bind(offer.price)
            .bind(offer.offer_type.as_str())
            .bind(&offer.description)
            .bind(offer.category_id.to_string())
            .bind(offer.supplier_id.to_string())
            .bind(offer.created_at)
            .bind(offer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create offer: {}", e)))?;

        Ok(offer)
    }

    async fn update(&self, offer: Offer) -> Result<Offer, DomainError> {
        let query = r#"
            UPDATE offers
            SET name = ?, price = ?, offer_type = ?, description = ?,
                category_id = ?, supplier_id = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&offer.name)
            .bind(offer.price)
            .bind(offer.offer_type.as_str())
            .bind(&offer.description)
            .bind(offer.category_id.to_string())
            .bind(offer.supplier_id.to_string())
            .bind(offer.updated_at)
            .bind(offer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update offer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Offer"));
        }

        Ok(offer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete offer: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &OfferFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Offer>, u64), DomainError> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.name.is_some() {
            conditions.push("name LIKE ?");
        }
        if filter.offer_type.is_some() {
            conditions.push("offer_type = ?");
        }
        if filter.category_id.is_some() {
            conditions.push("category_id = ?");
        }
        if filter.supplier_id.is_some() {
            conditions.push("supplier_id = ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS total FROM offers{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(name) = &filter.name {
            count_query = count_query.bind(like_pattern(name));
        }
        if let Some(offer_type) = filter.offer_type {
            count_query = count_query.bind(offer_type.as_str());
        }
        if let Some(category_id) = filter.category_id {
            count_query = count_query.bind(category_id.to_string());
        }
        if let Some(supplier_id) = filter.supplier_id {
            count_query = count_query.bind(supplier_id.to_string());
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?
            .try_get("total")
            .map_err(|e| DomainError::database(format!("Failed to get total: {}", e)))?;

        let page_sql = format!(
            "SELECT {} FROM offers{} ORDER BY created_at, id LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_clause
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(name) = &filter.name {
            page_query = page_query.bind(like_pattern(name));
        }
        if let Some(offer_type) = filter.offer_type {
            page_query = page_query.bind(offer_type.as_str());
        }
        if let Some(category_id) = filter.category_id {
            page_query = page_query.bind(category_id.to_string());
        }
        if let Some(supplier_id) = filter.supplier_id {
            page_query = page_query.bind(supplier_id.to_string());
        }
        let rows = page_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let offers = rows
            .iter()
            .map(Self::row_to_offer)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((offers, total as u64))
    }
}
