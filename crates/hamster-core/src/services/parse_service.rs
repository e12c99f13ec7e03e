//! Vendor code and reel label lookup.

use std::sync::Arc;

use crate::domain::{ParsedPart, QrScan};
use crate::ports::{CoreError, PartParserPort};

pub struct ParseService {
    parser: Arc<dyn PartParserPort>,
}

impl ParseService {
    pub fn new(parser: Arc<dyn PartParserPort>) -> Self {
        Self { parser }
    }

    /// Resolve a vendor product code such as `C2040`.
    pub async fn parse_code(&self, code: &str) -> Result<ParsedPart, CoreError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CoreError::Validation("Please enter a part code".to_string()));
        }
        Ok(self.parser.parse_code(code).await?)
    }

    /// Decode the text payload read from a reel QR label.
    pub async fn parse_qrcode(&self, payload: &str) -> Result<QrScan, CoreError> {
        if payload.trim().is_empty() {
            return Err(CoreError::Validation("QR payload is empty".to_string()));
        }
        Ok(self.parser.parse_qrcode(payload).await?)
    }

    /// Names of the vendor platforms the backend can parse.
    pub async fn platforms(&self) -> Result<Vec<String>, CoreError> {
        Ok(self.parser.platforms().await?)
    }
}
