//! Component image endpoints.

use chrono::Utc;
use hamster_core::ImageUpload;
use tracing::debug;
use url::Url;

use crate::error::HttpResult;
use crate::http::{ApiRequest, HttpBackend, Method, RequestBody};
use crate::models::UploadResponse;
use crate::url::{cache_busted_image_url, component_image_url};

use super::InventoryClient;

/// Multipart field the backend reads the file from.
const IMAGE_FIELD: &str = "image";

impl<B: HttpBackend> InventoryClient<B> {
    /// Upload an image, replacing the component's previous one.
    pub(crate) async fn upload_image(&self, id: i64, image: &ImageUpload) -> HttpResult<()> {
        let request = ApiRequest {
            method: Method::Post,
            url: component_image_url(&self.base_url, id),
            body: RequestBody::Multipart {
                field: IMAGE_FIELD,
                file_name: image.file_name.clone(),
                content_type: image.content_type.clone(),
                bytes: image.bytes.clone(),
            },
        };
        let response = self.send(request).await?;
        // Any 2xx means the image is stored; the body is informational.
        match response.json::<UploadResponse>() {
            Ok(uploaded) if !uploaded.url.is_empty() => {
                debug!(id, url = %uploaded.url, message = %uploaded.message, "Image stored");
            }
            _ => debug!(id, status = response.status, "Image stored"),
        }
        Ok(())
    }

    /// Download the image bytes; `None` when the backend has no image.
    pub(crate) async fn fetch_image(&self, id: i64) -> HttpResult<Option<Vec<u8>>> {
        let url = component_image_url(&self.base_url, id);
        match self.send(ApiRequest::get(url)).await {
            Ok(response) => Ok(Some(response.body)),
            Err(e) if e.status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Displayable image URL stamped with the current time.
    pub(crate) fn image_url_now(&self, id: i64) -> Url {
        cache_busted_image_url(&self.base_url, id, Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client;
    use crate::error::HttpError;
    use crate::http::testing::FakeBackend;
    use crate::http::{Method, RequestBody};
    use hamster_core::ImageUpload;
    use serde_json::json;

    #[tokio::test]
    async fn test_upload_image_multipart() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/components/5/image",
            200,
            &json!({"message": "uploaded", "url": "/api/v1/components/5/image"}),
        );

        client(&backend)
            .upload_image(5, &ImageUpload::new("part.png", vec![0x89, 0x50, 0x4E, 0x47]))
            .await
            .unwrap();

        match &backend.requests()[0].body {
            RequestBody::Multipart {
                field,
                file_name,
                content_type,
                bytes,
            } => {
                assert_eq!(*field, "image");
                assert_eq!(file_name, "part.png");
                assert_eq!(content_type, "image/png");
                assert_eq!(bytes.len(), 4);
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_rejected() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/image",
            400,
            &json!({"error": "unsupported image format"}),
        );

        let err = client(&backend)
            .upload_image(5, &ImageUpload::new("part.bmp", vec![0]))
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Status { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_upload_accepts_any_success_body() {
        let backend = FakeBackend::new()
            .with_json(Method::Post, "/components/5/image", 200, &json!({"message": "uploaded"}))
            .with_bytes(Method::Post, "/components/6/image", 204, Vec::new());
        let client = client(&backend);

        client
            .upload_image(5, &ImageUpload::new("part.png", vec![1]))
            .await
            .unwrap();
        client
            .upload_image(6, &ImageUpload::new("part.png", vec![1]))
            .await
            .unwrap();

        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_image_missing_is_none() {
        let backend = FakeBackend::new()
            .with_bytes(Method::Get, "/components/1/image", 200, vec![1, 2, 3])
            .with_bytes(Method::Get, "/components/2/image", 404, Vec::new());
        let client = client(&backend);

        assert_eq!(client.fetch_image(1).await.unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(client.fetch_image(2).await.unwrap(), None);
    }

    #[test]
    fn test_image_url_is_cache_busted() {
        let backend = FakeBackend::new();
        let url = client(&backend).image_url_now(8);

        assert_eq!(url.path(), "/api/v1/components/8/image");
        assert!(url.query().unwrap().starts_with("t="));
    }
}
