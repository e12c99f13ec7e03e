//! Component drafts and save requests.
//!
//! A draft is the editable, partially-filled form state for one component.
//! Fields are set freely; validation happens exactly once, in
//! [`ComponentDraft::into_write`], when the draft becomes a write request.

use thiserror::Error;

use super::component::{Component, ComponentWrite};
use super::image::{ImageSource, ImageUpload};
use super::parse::{ParsedPart, QrScan};

/// Reasons a draft cannot become a write request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Stock quantity cannot be negative (got {quantity})")]
    NegativeStock { quantity: i64 },

    #[error("Category id must be a backend id (got {category_id})")]
    InvalidCategory { category_id: i64 },
}

/// Editable component fields with nothing required up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentDraft {
    pub name: Option<String>,
    pub value: Option<String>,
    pub package: Option<String>,
    pub description: Option<String>,
    pub stock_quantity: Option<i64>,
    pub location: Option<String>,
    pub datasheet_url: Option<String>,
    /// Image slot: external URL or a pending upload.
    pub image: ImageSource,
}

impl ComponentDraft {
    /// Empty draft for a new component, with stock starting at zero.
    pub fn new() -> Self {
        Self {
            stock_quantity: Some(0),
            ..Self::default()
        }
    }

    /// Draft pre-filled from a persisted component.
    pub fn from_component(component: &Component) -> Self {
        let image = if component.image_url.is_empty() {
            ImageSource::None
        } else {
            ImageSource::Url(component.image_url.clone())
        };
        Self {
            name: Some(component.name.clone()),
            value: Some(component.value.clone()),
            package: Some(component.package.clone()),
            description: Some(component.description.clone()),
            stock_quantity: Some(component.stock_quantity),
            location: Some(component.location.clone()),
            datasheet_url: Some(component.datasheet_url.clone()),
            image,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_stock_quantity(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_datasheet_url(mut self, url: impl Into<String>) -> Self {
        self.datasheet_url = Some(url.into());
        self
    }

    /// Use an external image URL, dropping any pending upload.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.image = if url.is_empty() {
            ImageSource::None
        } else {
            ImageSource::Url(url)
        };
    }

    /// Use a local file, clearing the external URL.
    pub fn select_image(&mut self, upload: ImageUpload) {
        self.image = ImageSource::Upload(upload);
    }

    /// Merge fields resolved from a vendor code.
    pub fn apply_parsed(&mut self, part: &ParsedPart) {
        self.name = Some(part.display_name().to_string());
        self.value = Some(part.value.clone());
        self.package = Some(part.package.clone());
        self.description = Some(part.description_with_manufacturer());
        self.datasheet_url = Some(part.datasheet_url.clone());
        self.set_image_url(part.image_url.clone());
    }

    /// Merge fields from a scanned reel label.
    ///
    /// The label quantity replaces the stock only when it is positive.
    pub fn apply_scan(&mut self, scan: &QrScan) {
        let part = &scan.component;
        self.name = Some(part.display_name().to_string());
        self.value = Some(part.value.clone());
        self.package = Some(part.package.clone());
        self.description = Some(part.description.clone());
        self.datasheet_url = Some(part.datasheet_url.clone());
        self.set_image_url(part.image_url.clone());
        if scan.quantity > 0 {
            self.stock_quantity = Some(scan.quantity);
        }
    }

    /// Check the fields that do not depend on the category.
    pub fn validate(&self) -> Result<(), DraftError> {
        match self.stock_quantity {
            Some(quantity) if quantity < 0 => Err(DraftError::NegativeStock { quantity }),
            _ => Ok(()),
        }
    }

    /// Convert into a write request for the given resolved category.
    ///
    /// Missing text becomes `""` and missing stock becomes 0.
    pub fn into_write(&self, category_id: i64) -> Result<ComponentWrite, DraftError> {
        if category_id <= 0 {
            return Err(DraftError::InvalidCategory { category_id });
        }
        self.validate()?;
        let stock_quantity = self.stock_quantity.unwrap_or(0);

        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        Ok(ComponentWrite {
            category_id,
            name: text(&self.name),
            value: text(&self.value),
            package: text(&self.package),
            description: text(&self.description),
            stock_quantity,
            location: text(&self.location),
            datasheet_url: text(&self.datasheet_url),
            image_url: self.image.record_url().to_string(),
        })
    }
}

/// Whether a save creates a new component or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update { id: i64 },
}

impl SaveMode {
    pub const fn is_update(self) -> bool {
        matches!(self, Self::Update { .. })
    }
}

/// Everything one form submission needs: the free-text category, the
/// draft, and the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Free-text category as typed; trimmed and resolved during the save.
    pub category_input: String,
    pub draft: ComponentDraft,
    pub mode: SaveMode,
}

impl SaveRequest {
    pub fn create(category_input: impl Into<String>, draft: ComponentDraft) -> Self {
        Self {
            category_input: category_input.into(),
            draft,
            mode: SaveMode::Create,
        }
    }

    pub fn update(id: i64, category_input: impl Into<String>, draft: ComponentDraft) -> Self {
        Self {
            category_input: category_input.into(),
            draft,
            mode: SaveMode::Update { id },
        }
    }
}
