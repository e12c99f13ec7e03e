//! Component image port trait.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::ImageUpload;

/// Binary image storage addressed by component ID.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImagePort: Send + Sync {
    /// Upload an image for a saved component, replacing any previous one.
    async fn upload(&self, component_id: i64, image: &ImageUpload) -> ApiResult<()>;

    /// Download a component's image.
    ///
    /// Returns `Ok(None)` when the component has no image.
    async fn fetch(&self, component_id: i64) -> ApiResult<Option<Vec<u8>>>;

    /// Displayable URL for a component's image, with a cache-busting
    /// timestamp so a freshly uploaded image is not served stale.
    fn image_url(&self, component_id: i64) -> String;
}
