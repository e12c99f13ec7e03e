//! Dashboard handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let stats = ctx.app().dashboard().stats().await?;

    println!("Inventory overview");
    println!("  Components:  {}", stats.component_count);
    println!("  Categories:  {}", stats.category_count);
    println!("  Total stock: {}", stats.total_stock);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hamster_core::testing::InMemoryInventory;

    use super::*;
    use crate::handlers::test_support::context;

    #[tokio::test]
    async fn test_dashboard_runs() {
        let inventory = Arc::new(
            InMemoryInventory::new()
                .with_category(1, "Resistor")
                .with_component(1, 1, "10k", 100)
                .with_component(2, 1, "4k7", 50),
        );

        assert!(execute(&context(&inventory)).await.is_ok());
    }
}
