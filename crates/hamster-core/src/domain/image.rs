//! Component image inputs.
//!
//! A component's image slot takes either an external URL or a locally
//! selected file, never both.

use std::path::Path;

/// A binary image selected locally, waiting to be uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    /// MIME type sent with the multipart part.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Create an upload from in-memory bytes, guessing the content type
    /// from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an image file from disk.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// Guess a MIME type from a file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// What currently fills a draft's image slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageSource {
    /// No image.
    #[default]
    None,
    /// External image URL stored on the component record.
    Url(String),
    /// Local file uploaded after the component is saved.
    Upload(ImageUpload),
}

impl ImageSource {
    /// The URL to store on the component record.
    ///
    /// A pending upload clears the stored URL so the uploaded file is what
    /// the image endpoint serves.
    pub fn record_url(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Upload(_) | Self::None => "",
        }
    }

    pub const fn pending_upload(&self) -> Option<&ImageUpload> {
        match self {
            Self::Upload(upload) => Some(upload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_type_guessing() {
        assert_eq!(content_type_for("photo.JPG"), "image/jpeg");
        assert_eq!(content_type_for("part.png"), "image/png");
        assert_eq!(content_type_for("part.avif"), "image/avif");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }

    #[test]
    fn test_record_url_for_each_source() {
        assert_eq!(ImageSource::None.record_url(), "");
        assert_eq!(
            ImageSource::Url("https://x/y.png".into()).record_url(),
            "https://x/y.png"
        );
        let upload = ImageSource::Upload(ImageUpload::new("a.png", vec![1, 2]));
        assert_eq!(upload.record_url(), "");
        assert!(upload.pending_upload().is_some());
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

        let upload = ImageUpload::from_path(file.path()).await.unwrap();
        assert_eq!(upload.content_type, "image/png");
        assert_eq!(upload.bytes.len(), 4);
        assert!(upload.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = ImageUpload::from_path(Path::new("/definitely/not/here.png")).await;
        assert!(result.is_err());
    }
}
