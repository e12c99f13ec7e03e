//! Vendor code and QR label parsing endpoints.

use hamster_core::{ParsedPart, QrScan};

use crate::error::HttpResult;
use crate::http::{ApiRequest, HttpBackend};
use crate::models::{ParseCodeBody, ParseQrCodeBody, PlatformsResponse};
use crate::url::{parse_qrcode_url, parse_url, platforms_url};

use super::InventoryClient;

impl<B: HttpBackend> InventoryClient<B> {
    pub(crate) async fn parse_code(&self, code: &str) -> HttpResult<ParsedPart> {
        self.post_data(parse_url(&self.base_url), &ParseCodeBody { code })
            .await
    }

    pub(crate) async fn parse_qrcode(&self, payload: &str) -> HttpResult<QrScan> {
        self.post_data(
            parse_qrcode_url(&self.base_url),
            &ParseQrCodeBody {
                qrcode_data: payload,
            },
        )
        .await
    }

    pub(crate) async fn platforms(&self) -> HttpResult<Vec<String>> {
        let response = self
            .send(ApiRequest::get(platforms_url(&self.base_url)))
            .await?;
        Ok(response.json::<PlatformsResponse>()?.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::client;
    use crate::http::testing::FakeBackend;
    use crate::http::{Method, RequestBody};
    use serde_json::json;

    #[tokio::test]
    async fn test_parse_code() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/components/parse",
            200,
            &json!({"data": {
                "model": "AMS1117-3.3",
                "package": "SOT-223",
                "manufacturer": "AMS",
                "price": 0.12,
                "platform_code": "C6186",
                "platform_name": "LCSC"
            }, "message": "ok"}),
        );

        let part = client(&backend).parse_code("C6186").await.unwrap();

        assert_eq!(part.display_name(), "AMS1117-3.3");
        assert_eq!(part.platform_name, "LCSC");
        assert_eq!(
            backend.requests()[0].body,
            RequestBody::Json(json!({"code": "C6186"}))
        );
    }

    #[tokio::test]
    async fn test_parse_qrcode() {
        let backend = FakeBackend::new().with_json(
            Method::Post,
            "/components/parse-qrcode",
            200,
            &json!({"data": {
                "component": {"name": "0603 10k", "platform_code": "C25804"},
                "quantity": 5000,
                "qrcode_info": {"code": "C25804", "quantity": 5000, "raw_data": "{...}", "platform": "LCSC"}
            }}),
        );

        let scan = client(&backend).parse_qrcode("{...}").await.unwrap();

        assert_eq!(scan.quantity, 5000);
        assert_eq!(scan.qrcode_info.code, "C25804");
        assert_eq!(
            backend.requests()[0].body,
            RequestBody::Json(json!({"qrcode_data": "{...}"}))
        );
    }

    #[tokio::test]
    async fn test_platforms() {
        let backend = FakeBackend::new().with_json(
            Method::Get,
            "/platforms",
            200,
            &json!({"data": ["LCSC"], "count": 1}),
        );

        assert_eq!(client(&backend).platforms().await.unwrap(), vec!["LCSC"]);
    }
}
