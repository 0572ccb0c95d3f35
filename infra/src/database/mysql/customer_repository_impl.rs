//! MySQL implementation of the CustomerRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use od_core::domain::entities::customer::Customer;
use od_core::errors::DomainError;
use od_core::repositories::{CustomerFilter, CustomerRepository};
use od_shared::types::Pagination;

use super::like_pattern;

const SELECT_COLUMNS: &str = "id, name, email, phone, address, created_at, updated_at";

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Customer {
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
            address: row
                .try_get("address")
                .map_err(|e| DomainError::database(format!("Failed to get address: {}", e)))?,
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
    ) -> Result<Option<Customer>, DomainError> {
        let query = format!(
            "SELECT {} FROM customers WHERE {} = ? LIMIT 1",
            SELECT_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        self.find_by_column("id", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        self.find_by_column("email", email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, DomainError> {
        self.find_by_column("phone", phone).await
    }

    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customers (id, name, email, phone, address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(customer.id.to_string())
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.address)
            .bind(customer.created_at)
            .bind(customer.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create customer: {}", e)))?;

        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            UPDATE customers
            SET name = ?, email = ?, phone = ?, address = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(&customer.address)
            .bind(customer.updated_at)
            .bind(customer.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update customer: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Customer"));
        }

        Ok(customer)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete customer: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &CustomerFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Customer>, u64), DomainError> {
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

        let count_sql = format!("SELECT COUNT(*) AS total FROM customers{}", where_clause);
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
            "SELECT {} FROM customers{} ORDER BY created_at, id LIMIT ? OFFSET ?",
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

        let customers = rows
            .iter()
            .map(Self::row_to_customer)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customers, total as u64))
    }
}
