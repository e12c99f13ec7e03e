//! Vendor-code and QR payload parsing port trait.

use async_trait::async_trait;

use super::ApiResult;
use crate::domain::{ParsedPart, QrScan};

/// Backend-side parsing of vendor codes and reel-label QR payloads.
#[async_trait]
pub trait PartParserPort: Send + Sync {
    /// Resolve a vendor platform code (e.g., an LCSC `C`-number).
    async fn parse_code(&self, code: &str) -> ApiResult<ParsedPart>;

    /// Resolve a raw QR payload to component fields and a quantity.
    async fn parse_qrcode(&self, payload: &str) -> ApiResult<QrScan>;

    /// Names of the vendor platforms the backend can parse.
    async fn platforms(&self) -> ApiResult<Vec<String>>;
}
