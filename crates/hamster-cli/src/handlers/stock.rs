//! Stock command handlers.

use anyhow::Result;
use hamster_core::{ComponentsView, StockDirection};

use crate::bootstrap::CliContext;
use crate::presentation::print_log_table;
use crate::stock_commands::StockCommand;

pub async fn execute(ctx: &CliContext, command: StockCommand) -> Result<()> {
    match command {
        StockCommand::In { id, amount, reason } => {
            adjust(ctx, id, StockDirection::In, amount, reason).await
        }
        StockCommand::Out { id, amount, reason } => {
            adjust(ctx, id, StockDirection::Out, amount, reason).await
        }
        StockCommand::Logs { id, limit } => logs(ctx, id, limit).await,
    }
}

/// Move `amount` units in or out of a component's stock.
///
/// The backend refuses to take out more than is in stock.
pub async fn adjust(
    ctx: &CliContext,
    id: i64,
    direction: StockDirection,
    amount: u32,
    reason: String,
) -> Result<()> {
    let mut screen = ctx.app().components_screen();
    let component = screen.find(id).await?;
    let before = component.stock_quantity;

    screen.open_stock(component);
    if let Some(form) = screen.stock_form_mut() {
        form.direction = direction;
        form.amount = amount;
        form.reason = reason;
    }
    let updated = screen.submit_stock().await?;

    println!(
        "{}: {before} -> {} ({direction} {amount})",
        updated.name, updated.stock_quantity
    );
    Ok(())
}

/// Print a component's stock history.
///
/// Without a limit the full history is shown.
pub async fn logs(ctx: &CliContext, id: i64, limit: Option<u32>) -> Result<()> {
    let mut screen = ctx.app().components_screen();
    let component = screen.find(id).await?;

    let (name, logs) = if limit.is_some() {
        let logs = ctx.app().stock().component_logs(id, limit).await?;
        (component.name, logs)
    } else {
        screen.open_logs(component).await?;
        match screen.view() {
            ComponentsView::Logs { component, logs } => (component.name.clone(), logs.clone()),
            _ => return Ok(()),
        }
    };

    if logs.is_empty() {
        println!("No stock changes recorded for {name}.");
        return Ok(());
    }
    println!("Stock history of {name}:\n");
    print_log_table(&logs);
    Ok(())
}
