//! QR scan handler.
//!
//! Takes a payload already decoded from a reel label, lets the backend
//! recognize it, shows the pre-filled form and optionally saves it.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::handlers::components::submit;
use crate::presentation::display_draft;
use crate::utils::input;

/// Payload argument that means "read from stdin".
const STDIN_PAYLOAD: &str = "-";

pub async fn execute(
    ctx: &CliContext,
    payload: &str,
    category: Option<&str>,
    save: bool,
) -> Result<Option<i64>> {
    let payload = if payload == STDIN_PAYLOAD {
        input::read_stdin_payload()?
    } else {
        payload.to_string()
    };

    let mut screen = ctx.app().components_screen();
    screen.refresh_categories().await;
    screen.open_scanner();
    screen.handle_scan(&payload).await?;

    if let (Some(category), Some(form)) = (category, screen.form_mut()) {
        form.category_input = category.to_string();
    }
    if let Some(form) = screen.form() {
        println!("Recognized component:");
        display_draft(form);
    }

    if !save {
        println!();
        println!("Run again with --save to add it to the inventory.");
        return Ok(None);
    }

    submit(&mut screen).await.map(Some)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hamster_core::testing::{Call, InMemoryInventory};
    use hamster_core::{Category, ParsedPart, QrCodeInfo, QrScan};

    use super::*;
    use crate::handlers::test_support::context;

    const PAYLOAD: &str = "{pbn:PICK2405,on:SO123,pc:C25804,pm:0603WAF1002T5E,qty:5000}";

    fn scan(category: Option<&str>) -> QrScan {
        QrScan {
            component: ParsedPart {
                model: "0603WAF1002T5E".to_string(),
                value: "10k".to_string(),
                package: "0603".to_string(),
                category: category.map(|name| Category {
                    id: 0,
                    name: name.to_string(),
                    parent_id: None,
                }),
                ..ParsedPart::default()
            },
            quantity: 5000,
            qrcode_info: QrCodeInfo {
                code: "C25804".to_string(),
                quantity: 5000,
                raw_data: PAYLOAD.to_string(),
                platform: "LCSC".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_scan_without_save_writes_nothing() {
        let inventory = Arc::new(InMemoryInventory::new().with_scan(PAYLOAD, scan(Some("Resistor"))));
        let ctx = context(&inventory);

        let saved = execute(&ctx, PAYLOAD, None, false).await.unwrap();

        assert_eq!(saved, None);
        assert!(inventory.components().is_empty());
    }

    #[tokio::test]
    async fn test_scan_save_uses_recognized_category() {
        let inventory = Arc::new(
            InMemoryInventory::new()
                .with_category(1, "Resistor")
                .with_scan(PAYLOAD, scan(Some("resistor"))),
        );
        let ctx = context(&inventory);

        let id = execute(&ctx, PAYLOAD, None, true).await.unwrap().unwrap();

        let saved = inventory.components();
        assert_eq!(saved[0].id, id);
        assert_eq!(saved[0].name, "0603WAF1002T5E");
        assert_eq!(saved[0].stock_quantity, 5000);
        assert_eq!(saved[0].category_id, 1);
        assert_eq!(inventory.count(|c| matches!(c, Call::CreateCategory(_))), 0);
    }

    #[tokio::test]
    async fn test_scan_category_override() {
        let inventory = Arc::new(InMemoryInventory::new().with_scan(PAYLOAD, scan(None)));
        let ctx = context(&inventory);

        execute(&ctx, PAYLOAD, Some("SMD Resistor"), true).await.unwrap();

        assert_eq!(inventory.categories()[0].name, "SMD Resistor");
    }

    #[tokio::test]
    async fn test_scan_save_reports_created_category() {
        let inventory = Arc::new(InMemoryInventory::new().with_scan(PAYLOAD, scan(Some("Resistor"))));
        let ctx = context(&inventory);

        let id = execute(&ctx, PAYLOAD, None, true).await.unwrap().unwrap();

        let categories = inventory.categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Resistor");
        assert_eq!(inventory.components()[0].id, id);
        assert_eq!(inventory.components()[0].category_id, categories[0].id);
    }

    #[tokio::test]
    async fn test_scan_without_category_cannot_save() {
        let inventory = Arc::new(InMemoryInventory::new().with_scan(PAYLOAD, scan(None)));
        let ctx = context(&inventory);

        assert!(execute(&ctx, PAYLOAD, None, true).await.is_err());
        assert!(inventory.components().is_empty());
    }
}
