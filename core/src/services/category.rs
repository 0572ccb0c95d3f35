//! Category use-cases: create, get, search, update, delete.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CategoryFilter, CategoryRepository};
use od_shared::types::{PaginatedResponse, Pagination};

/// Partial update for a category; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Use-case service for catalog categories
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new category service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a category after checking the name is unused
    pub async fn create_category(
        &self,
        name: &str,
        description: Option<String>,
    ) -> DomainResult<Category> {
        if self.repository.find_by_name(name).await?.is_some() {
            return Err(DomainError::duplicate("name"));
        }

        let category = Category::new(name, description)?;
        let created = self.repository.create(category).await?;
        debug!(category_id = %created.id, "category created");
        Ok(created)
    }

    /// Fetch a category by id
    pub async fn get_category(&self, id: Uuid) -> DomainResult<Category> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category"))
    }

    /// Paginated search over categories
    pub async fn search_categories(
        &self,
        filter: CategoryFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Category>> {
        let pagination = pagination.validate();
        let (items, total) = self.repository.search(&filter, &pagination).await?;
        Ok(PaginatedResponse::new(items, pagination, total))
    }

    /// Apply a partial update, re-checking uniqueness only when the name
    /// actually changes
    pub async fn update_category(
        &self,
        id: Uuid,
        update: CategoryUpdate,
    ) -> DomainResult<Category> {
        let mut category = self.get_category(id).await?;

        if let Some(name) = update.name {
            if name != category.name {
                if self.repository.find_by_name(&name).await?.is_some() {
                    return Err(DomainError::duplicate("name"));
                }
                category.rename(name)?;
            }
        }
        if let Some(description) = update.description {
            category.set_description(Some(description));
        }

        self.repository.update(category).await
    }

    /// Delete a category after checking it exists
    pub async fn delete_category(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Category"));
        }
        debug!(category_id = %id, "category deleted");
        Ok(())
    }
}
