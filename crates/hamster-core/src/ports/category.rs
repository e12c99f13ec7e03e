//! Category port trait.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{Category, NewCategory};

/// Backend operations on categories.
///
/// The implementation lives in `hamster-http`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryPort: Send + Sync {
    /// List every category.
    async fn list(&self) -> ApiResult<Vec<Category>>;

    /// Get a category by ID.
    ///
    /// Returns `Err(ApiError::NotFound)` if it doesn't exist.
    async fn get(&self, id: i64) -> ApiResult<Category>;

    /// Create a category. Returns it with its server-assigned ID.
    async fn create(&self, category: &NewCategory) -> ApiResult<Category>;

    /// Rename an existing category.
    async fn update(&self, id: i64, category: &NewCategory) -> ApiResult<Category>;

    async fn delete(&self, id: i64) -> ApiResult<()>;
}
