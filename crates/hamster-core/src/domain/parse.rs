//! Results of vendor-code and QR payload parsing.
//!
//! Parsing itself happens in the backend; these types carry its answers.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Component information resolved from a vendor platform code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedPart {
    pub name: String,
    /// Manufacturer part number; used as the name when `name` is empty.
    pub model: String,
    pub value: String,
    pub package: String,
    pub description: String,
    pub manufacturer: String,
    /// Unit price on the vendor platform.
    pub price: f64,
    pub image_url: String,
    pub datasheet_url: String,
    pub platform_code: String,
    pub platform_name: String,
    pub platform_url: String,
    /// Suggested category, when the backend can infer one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ParsedPart {
    /// Name to put on the draft: `name`, or `model` when the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.model
        } else {
            &self.name
        }
    }

    /// Description with the manufacturer appended on its own line.
    pub fn description_with_manufacturer(&self) -> String {
        if self.manufacturer.is_empty() {
            self.description.clone()
        } else {
            format!("{}\nManufacturer: {}", self.description, self.manufacturer)
        }
    }
}

/// Fields the backend extracted from a raw QR payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCodeInfo {
    /// Vendor part code (e.g., an LCSC `C`-number).
    pub code: String,
    pub quantity: i64,
    pub raw_data: String,
    /// Platform the payload was recognized as.
    pub platform: String,
}

/// Result of `POST /components/parse-qrcode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrScan {
    pub component: ParsedPart,
    /// Quantity printed on the reel label; 0 when absent.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub qrcode_info: QrCodeInfo,
}
