//! Category domain types.

use serde::{Deserialize, Serialize};

/// A component category as stored by the backend.
///
/// Ids are always server-assigned. Use `NewCategory` for categories that
/// haven't been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Backend ID of the category.
    pub id: i64,
    /// Display name. Unique per backend, matched case-insensitively here.
    pub name: String,
    /// Parent category for tree layouts. Never set by this client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl Category {
    /// Whether this category's name equals `name`, ignoring case.
    ///
    /// Exact match only; `"res"` does not match `"Resistor"`.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Request body for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    /// Create a request with the given name, trimmed.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
        }
    }
}

/// Find the first category whose name matches `name` case-insensitively.
pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name_matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            parent_id: None,
        }
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let c = category(1, "Resistor");
        assert!(c.name_matches("resistor"));
        assert!(c.name_matches("RESISTOR"));
        assert!(!c.name_matches("Resist"));
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let categories = vec![category(1, "LED"), category(2, "led"), category(3, "Diode")];
        assert_eq!(find_by_name(&categories, "Led").map(|c| c.id), Some(1));
        assert!(find_by_name(&categories, "Capacitor").is_none());
    }

    #[test]
    fn test_new_category_trims() {
        assert_eq!(NewCategory::new("  Crystal ").name, "Crystal");
    }

    #[test]
    fn test_category_deserializes_without_parent() {
        let c: Category = serde_json::from_str(r#"{"id":4,"name":"MCU"}"#).unwrap();
        assert_eq!(c, category(4, "MCU"));
    }
}
