//! Vendor code lookup and platform listing.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::display_parsed_part;

/// Look up a vendor part code and print what the backend found.
pub async fn execute(ctx: &CliContext, code: &str) -> Result<()> {
    let part = ctx.app().parse().parse_code(code).await?;
    display_parsed_part(&part);
    println!();
    println!("Use 'hamster components add --code {}' to save it.", code.trim());
    Ok(())
}

pub async fn platforms(ctx: &CliContext) -> Result<()> {
    let platforms = ctx.app().parse().platforms().await?;
    if platforms.is_empty() {
        println!("The backend reports no supported platforms.");
        return Ok(());
    }
    println!("Supported platforms:");
    for platform in platforms {
        println!("  {platform}");
    }
    Ok(())
}
