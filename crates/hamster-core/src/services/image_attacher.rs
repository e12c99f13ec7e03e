//! Image attacher - uploads a pending image for a saved component.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ImageUpload;
use crate::ports::{ImagePort, Notice, Notifier};

/// What happened to the image part of a save.
///
/// Never an error: a failed upload leaves the component saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The draft held no local file.
    NotRequested,
    Uploaded,
    Failed { reason: String },
}

impl ImageOutcome {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

pub struct ImageAttacher {
    images: Arc<dyn ImagePort>,
    notifier: Arc<dyn Notifier>,
}

impl ImageAttacher {
    pub fn new(images: Arc<dyn ImagePort>, notifier: Arc<dyn Notifier>) -> Self {
        Self { images, notifier }
    }

    /// Upload `image` for `component_id`. One attempt, no retry.
    pub async fn attach(&self, component_id: i64, image: &ImageUpload) -> ImageOutcome {
        debug!(component_id, file = %image.file_name, size = image.bytes.len(), "Uploading image");
        match self.images.upload(component_id, image).await {
            Ok(()) => ImageOutcome::Uploaded,
            Err(e) => {
                warn!(component_id, error = %e, "Image upload failed");
                self.notifier.notify(Notice::error("Image upload failed"));
                ImageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ApiError, MockImagePort};
    use crate::testing::RecordingNotifier;

    #[tokio::test]
    async fn test_upload_success() {
        let mut port = MockImagePort::new();
        port.expect_upload()
            .withf(|id, img| *id == 3 && img.file_name == "r.png")
            .times(1)
            .returning(|_, _| Ok(()));
        let notifier = Arc::new(RecordingNotifier::new());
        let attacher = ImageAttacher::new(Arc::new(port), notifier.clone());

        let outcome = attacher
            .attach(3, &ImageUpload::new("r.png", vec![0x89, 0x50]))
            .await;

        assert_eq!(outcome, ImageOutcome::Uploaded);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_is_not_fatal() {
        let mut port = MockImagePort::new();
        port.expect_upload()
            .times(1)
            .returning(|_, _| Err(ApiError::Timeout));
        let notifier = Arc::new(RecordingNotifier::new());
        let attacher = ImageAttacher::new(Arc::new(port), notifier.clone());

        let outcome = attacher.attach(3, &ImageUpload::new("r.png", vec![1])).await;

        assert!(outcome.is_failed());
        assert_eq!(notifier.errors(), vec!["Image upload failed"]);
    }
}
