//! MySQL implementation of the SupplierRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use od_core::domain::entities::supplier::Supplier;
use od_core::errors::DomainError;
use od_core::repositories::{SupplierFilter, SupplierRepository};
use od_shared::types::Pagination;

use super::like_pattern;

const SELECT_COLUMNS: &str = "id, name, email, phone, created_at, updated_at";

/// MySQL implementation of SupplierRepository
pub struct MySqlSupplierRepository {
    pool: MySqlPool,
}

impl MySqlSupplierRepository {
    /// Create a new MySQL supplier repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Supplier entity
    fn row_to_supplier(row: &sqlx::mysql::MySqlRow) -> Result<Supplier, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Supplier {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::database(format!("Failed to get phone: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn find_by_column(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Option<Supplier>, DomainError> {
        let query = format!(
            "SELECT {} FROM suppliers WHERE {} = ? LIMIT 1",
            SELECT_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_supplier(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl SupplierRepository for MySqlSupplierRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError> {
        self.find_by_column("id", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Supplier>, DomainError> {
        self.find_by_column("email", email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Supplier>, DomainError> {
        self.find_by_column("phone", phone).await
    }

    async fn create(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
        let query = r#"
            INSERT INTO suppliers (id, name, email, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(supplier.id.to_string())
            .bind(&supplier.name)
            .bind(&supplier.email)
            .bind(&supplier.phone)
            .bind(supplier.created_at)
            .bind(supplier.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create supplier: {}", e)))?;

        Ok(supplier)
    }

    async fn update(&self, supplier: Supplier) -> Result<Supplier, DomainError> {
        let query = r#"
            UPDATE suppliers
            SET name = ?, email = ?, phone = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&supplier.name)
            .bind(&supplier.email)
            .bind(&supplier.phone)
            .bind(supplier.updated_at)
            .bind(supplier.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update supplier: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Supplier"));
        }

        Ok(supplier)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete supplier: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &SupplierFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Supplier>, u64), DomainError> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.name.is_some() {
            conditions.push("name LIKE ?");
        }
        if filter.email.is_some() {
            conditions.push("email LIKE ?");
        }
        if filter.phone.is_some() {
            conditions.push("phone LIKE ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS total FROM suppliers{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(name) = &filter.name {
            count_query = count_query.bind(like_pattern(name));
        }
        if let Some(email) = &filter.email {
            count_query = count_query.bind(like_pattern(email));
        }
        if let Some(phone) = &filter.phone {
            count_query = count_query.bind(like_pattern(phone));
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?
            .try_get("total")
            .map_err(|e| DomainError::database(format!("Failed to get total: {}", e)))?;

        let page_sql = format!(
            "SELECT {} FROM suppliers{} ORDER BY created_at, id LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_clause
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(name) = &filter.name {
            page_query = page_query.bind(like_pattern(name));
        }
        if let Some(email) = &filter.email {
            page_query = page_query.bind(like_pattern(email));
        }
        if let Some(phone) = &filter.phone {
            page_query = page_query.bind(like_pattern(phone));
        }
        let rows = page_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let suppliers = rows
            .iter()
            .map(Self::row_to_supplier)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((suppliers, total as u64))
    }
}
