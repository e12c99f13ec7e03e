//! Wire-level request and response shapes.
//!
//! The backend wraps every payload: lists as `{data, pagination}`, single
//! records as `{data}`, failures as `{error}`. These types exist only to
//! peel those envelopes; the records themselves are core domain types.

use hamster_core::{Page, Pagination};
use serde::{Deserialize, Serialize};

/// `{ "data": T }`, optionally with a `message`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// `{ "data": [T], "pagination": {...} }`.
///
/// The backend may send `"data": null` for an empty result and may omit
/// the pagination block.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ListEnvelope<T> {
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.data.unwrap_or_default(),
            pagination: self.pagination.unwrap_or_default(),
        }
    }
}

/// `{ "error": "..." }` body of a failed request.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Answer of the image upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: String,
}

/// `{ "data": ["LCSC", ...], "count": n }`.
#[derive(Debug, Deserialize)]
pub struct PlatformsResponse {
    #[serde(default)]
    pub data: Vec<String>,
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ParseCodeBody<'a> {
    pub code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ParseQrCodeBody<'a> {
    pub qrcode_data: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamster_core::Component;
    use serde_json::json;

    #[test]
    fn test_list_envelope_with_pagination() {
        let envelope: ListEnvelope<Component> = serde_json::from_value(json!({
            "data": [{"id": 1, "category_id": 2, "name": "10k", "stock_quantity": 5}],
            "pagination": {"page": 1, "page_size": 20, "total": 1, "total_page": 1}
        }))
        .unwrap();

        let page = envelope.into_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn test_list_envelope_null_data() {
        let envelope: ListEnvelope<Component> =
            serde_json::from_value(json!({"data": null})).unwrap();

        let page = envelope.into_page();
        assert!(page.is_empty());
        assert_eq!(page.pagination, Pagination::default());
    }

    #[test]
    fn test_request_bodies() {
        assert_eq!(
            serde_json::to_value(ParseQrCodeBody { qrcode_data: "{a:1}" }).unwrap(),
            json!({"qrcode_data": "{a:1}"})
        );
        assert_eq!(
            serde_json::to_value(ParseCodeBody { code: "C1234" }).unwrap(),
            json!({"code": "C1234"})
        );
    }
}
