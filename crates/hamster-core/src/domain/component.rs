//! Component domain types.
//!
//! These types mirror the backend's component records. The editable,
//! partially-filled form state lives in [`super::draft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Default number of components per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Component
// ─────────────────────────────────────────────────────────────────────────────

/// A component that exists in the backend with a server-assigned ID.
///
/// The backend omits empty text fields, so every string defaults to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Backend ID of the component.
    pub id: i64,
    /// Category the component belongs to.
    pub category_id: i64,
    /// Embedded category, present on list and get responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Name or part number (e.g., "ESP32-WROOM-32E").
    pub name: String,
    /// Electrical value (e.g., "10k", "100nF").
    #[serde(default)]
    pub value: String,
    /// Package / footprint (e.g., "0603", "SOT-23").
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub description: String,
    /// Units in stock. Never negative.
    #[serde(default)]
    pub stock_quantity: i64,
    /// Physical storage location (drawer, box, shelf).
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub datasheet_url: String,
    /// External image URL. Uploaded images are served from the image endpoint instead.
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Component {
    /// Name of the embedded category, if the backend included it.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Write Request
// ─────────────────────────────────────────────────────────────────────────────

/// A validated component write, ready to be sent to the backend.
///
/// Only produced by [`super::ComponentDraft::into_write`], which guarantees
/// numeric fields are normalized and `category_id` comes from a resolved
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentWrite {
    pub category_id: i64,
    pub name: String,
    pub value: String,
    pub package: String,
    pub description: String,
    pub stock_quantity: i64,
    pub location: String,
    pub datasheet_url: String,
    pub image_url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// List Query
// ─────────────────────────────────────────────────────────────────────────────

/// Filter and paging options for listing components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentQuery {
    /// Page number (1-indexed).
    pub page: u32,
    pub page_size: u32,
    /// Free-text search over name, value, package and description.
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
}

impl Default for ComponentQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            keyword: None,
            category_id: None,
        }
    }
}

impl ComponentQuery {
    /// Create a query for the first page with default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number. Pages below 1 are clamped to 1.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the search keyword. Blank keywords clear the filter.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "category_id": 2,
            "category": {"id": 2, "name": "Resistor"},
            "name": "RC0603FR-0710KL",
            "value": "10k",
            "stock_quantity": 150,
            "created_at": "2024-05-01T10:00:00.123456+08:00",
            "updated_at": "2024-05-02T10:00:00Z"
        }"#;
        let c: Component = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 7);
        assert_eq!(c.category_name(), Some("Resistor"));
        assert_eq!(c.package, "");
        assert_eq!(c.stock_quantity, 150);
        assert!(c.created_at.is_some());
    }

    #[test]
    fn test_query_builder() {
        let q = ComponentQuery::new()
            .with_page(0)
            .with_page_size(50)
            .with_keyword(Some("  esp32 ".to_string()))
            .with_category(Some(3));
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 50);
        assert_eq!(q.keyword.as_deref(), Some("esp32"));
        assert_eq!(q.category_id, Some(3));
    }

    #[test]
    fn test_blank_keyword_clears_filter() {
        let q = ComponentQuery::new().with_keyword(Some("   ".to_string()));
        assert!(q.keyword.is_none());
    }
}
