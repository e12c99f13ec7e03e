//! Global stock history handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_log_table, print_pagination};

pub async fn execute(ctx: &CliContext, page: u32, page_size: u32) -> Result<()> {
    let history = ctx.app().stock().history(page, page_size).await?;
    if history.is_empty() {
        println!("No stock changes recorded.");
        return Ok(());
    }

    print_log_table(&history.items);
    print_pagination(&history.pagination);
    Ok(())
}
