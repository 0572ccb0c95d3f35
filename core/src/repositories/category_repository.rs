//! Category repository trait defining the interface for category persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::category::Category;
use crate::errors::DomainError;
use od_shared::types::Pagination;

/// Search filter for categories. Text fields match as substrings; an empty
/// filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Substring match on the category name
    pub name: Option<String>,
}

/// Repository trait for Category entity persistence operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError>;

    /// Find a category by its exact name (natural key)
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;

    /// Persist a new category
    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    /// Update an existing category
    async fn update(&self, category: Category) -> Result<Category, DomainError>;

    /// Delete a category; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Paginated search; returns the page of items and the total match count
    async fn search(
        &self,
        filter: &CategoryFilter,
        pagination: &Pagination,
    ) -> Result<(Vec<Category>, u64), DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_repository_create_and_find() {
        let repo = mock::MockCategoryRepository::new();
        let category = Category::new("Office Supplies", None).unwrap();

        let created = repo.create(category.clone()).await.unwrap();
        assert_eq!(created.id, category.id);

        let found = repo.find_by_name("Office Supplies").await.unwrap();
        assert_eq!(found.unwrap().id, category.id);
    }

    #[tokio::test]
    async fn test_mock_repository_duplicate_name() {
        let repo = mock::MockCategoryRepository::new();
        repo.create(Category::new("Hardware", None).unwrap())
            .await
            .unwrap();

        let result = repo.create(Category::new("Hardware", None).unwrap()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_repository_search_substring() {
        let repo = mock::MockCategoryRepository::new();
        repo.create(Category::new("Office Supplies", None).unwrap())
            .await
            .unwrap();
        repo.create(Category::new("Office Furniture", None).unwrap())
            .await
            .unwrap();
        repo.create(Category::new("Cleaning", None).unwrap())
            .await
            .unwrap();

        let filter = CategoryFilter {
            name: Some("office".to_string()),
        };
        let (page, total) = repo.search(&filter, &Pagination::default()).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(page.len(), 2);

        let (all, total) = repo
            .search(&CategoryFilter::default(), &Pagination::default())
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_repository_pagination() {
        let repo = mock::MockCategoryRepository::new();
        for i in 0..5 {
            repo.create(Category::new(format!("Category {}", i), None).unwrap())
                .await
                .unwrap();
        }

        let (page, total) = repo
            .search(&CategoryFilter::default(), &Pagination::new(2, 2))
            .await
            .unwrap();
        assert_eq!(total, 5);
        assert_eq!(page.len(), 2);
    }
}
