//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use od_core::domain::entities::user::{User, UserRole};
use od_core::errors::DomainError;
use od_core::repositories::{UserFilter, UserRepository};
use od_shared::types::Pagination;

use super::like_pattern;

const SELECT_COLUMNS: &str =
    "id, email, password_hash, full_name, role, is_active, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        let role_str: String = row
            .try_get("role")
            .map_err(|e| DomainError::database(format!("Failed to get role: {}", e)))?;
        let role = UserRole::parse(&role_str)
            .ok_or_else(|| DomainError::database(format!("Unknown user role: {}", role_str)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::database(format!("Failed to get password_hash: {}", e))
            })?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::database(format!("Failed to get full_name: {}", e)))?,
            role,
            is_active: row
                .try_get("is_active")
                .map_err(|e| DomainError::database(format!("Failed to get is_active: {}", e)))?,
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
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE email = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, full_name, role, is_active,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create user: {}", e)))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, password_hash = ?, full_name = ?, role = ?,
                is_active = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(user.role.as_str())
            .bind(user.is_active)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &UserFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.email.is_some() {
            conditions.push("email LIKE ?");
        }
        if filter.full_name.is_some() {
            conditions.push("full_name LIKE ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS total FROM users{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(email) = &filter.email {
            count_query = count_query.bind(like_pattern(email));
        }
        if let Some(full_name) = &filter.full_name {
            count_query = count_query.bind(like_pattern(full_name));
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?
            .try_get("total")
            .map_err(|e| DomainError::database(format!("Failed to get total: {}", e)))?;

        let page_sql = format!(
            "SELECT {} FROM users{} ORDER BY created_at, id LIMIT ? OFFSET ?",
            SELECT_COLUMNS, where_clause
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(email) = &filter.email {
            page_query = page_query.bind(like_pattern(email));
        }
        if let Some(full_name) = &filter.full_name {
            page_query = page_query.bind(like_pattern(full_name));
        }
        let rows = page_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let users = rows
            .iter()
            .map(Self::row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total as u64))
    }
}
