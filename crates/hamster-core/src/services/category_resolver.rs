//! Category resolver - maps free-text category input to a backend ID.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Category, NewCategory, find_by_name};
use crate::ports::{ApiError, CategoryPort, Notice, Notifier, SaveError};

/// Result of resolving a category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The ID to write into the component.
    pub category_id: i64,
    /// Set when the category did not exist and was created on the fly.
    /// Callers holding a category cache should refresh it.
    pub created: Option<Category>,
}

impl Resolution {
    pub const fn was_created(&self) -> bool {
        self.created.is_some()
    }
}

/// Resolves a category by case-insensitive name, creating it if missing.
pub struct CategoryResolver {
    categories: Arc<dyn CategoryPort>,
    notifier: Arc<dyn Notifier>,
}

impl CategoryResolver {
    pub fn new(categories: Arc<dyn CategoryPort>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            categories,
            notifier,
        }
    }

    /// Resolve `input` against the `known` categories.
    ///
    /// The first case-insensitive exact match wins and issues no request.
    /// Otherwise exactly one create request is sent with the trimmed name.
    pub async fn resolve(&self, known: &[Category], input: &str) -> Result<Resolution, SaveError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(SaveError::MissingCategory);
        }

        if let Some(existing) = find_by_name(known, name) {
            debug!(category_id = existing.id, name, "Category matched");
            return Ok(Resolution {
                category_id: existing.id,
                created: None,
            });
        }

        debug!(name, "No matching category, creating it");
        let created = match self.categories.create(&NewCategory::new(name)).await {
            Ok(category) if category.id > 0 => category,
            Ok(_) => {
                return Err(self.creation_failed(
                    name,
                    ApiError::InvalidResponse {
                        message: "created category has no id".to_string(),
                    },
                ));
            }
            Err(e) => return Err(self.creation_failed(name, e)),
        };

        info!(category_id = created.id, name, "Auto-created category");
        self.notifier
            .notify(Notice::success(format!("Auto-created category: {name}")));
        Ok(Resolution {
            category_id: created.id,
            created: Some(created),
        })
    }

    fn creation_failed(&self, name: &str, source: ApiError) -> SaveError {
        warn!(name, error = %source, "Category auto-creation failed");
        self.notifier
            .notify(Notice::error("Failed to auto-create category"));
        SaveError::CategoryCreateFailed {
            name: name.to_string(),
            source,
        }
    }
}
