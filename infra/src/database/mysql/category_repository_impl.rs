//! MySQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use od_core::domain::entities::category::Category;
use od_core::errors::DomainError;
use od_core::repositories::{CategoryFilter, CategoryRepository};
use od_shared::types::Pagination;

use super::like_pattern;

/// MySQL implementation of CategoryRepository
pub struct MySqlCategoryRepository {
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Category entity
    fn row_to_category(row: &sqlx::mysql::MySqlRow) -> Result<Category, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Category {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::database(format!("Failed to get description: {}", e)))?,
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
impl CategoryRepository for MySqlCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories
            WHERE name = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            INSERT INTO categories (id, name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.created_at)
            .bind(category.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create category: {}", e)))?;

        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, DomainError> {
        let query = r#"
            UPDATE categories
            SET name = ?, description = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.updated_at)
            .bind(category.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update category: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Category"));
        }

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete category: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        filter: &CategoryFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Category>, u64), DomainError> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.name.is_some() {
            conditions.push("name LIKE ?");
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) AS total FROM categories{}", where_clause);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(name) = &filter.name {
            count_query = count_query.bind(like_pattern(name));
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?
            .try_get("total")
            .map_err(|e| DomainError::database(format!("Failed to get total: {}", e)))?;

        let page_sql = format!(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM categories{}
            ORDER BY created_at, id
            LIMIT ? OFFSET ?
            "#,
            where_clause
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(name) = &filter.name {
            page_query = page_query.bind(like_pattern(name));
        }
        let rows = page_query
            .bind(pagination.limit_i64())
            .bind(pagination.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        let categories = rows
            .iter()
            .map(Self::row_to_category)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((categories, total as u64))
    }
}
