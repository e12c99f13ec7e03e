//! Category command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::category_commands::CategoryCommand;
use crate::presentation::print_separator;
use crate::utils::input;

pub async fn execute(ctx: &CliContext, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => list(ctx).await,
        CategoryCommand::Add { name } => add(ctx, &name).await,
        CategoryCommand::Rename { identifier, name } => rename(ctx, &identifier, &name).await,
        CategoryCommand::Delete { identifier, force } => delete(ctx, &identifier, force).await,
    }
}

pub async fn list(ctx: &CliContext) -> Result<()> {
    let categories = ctx.app().categories().list().await?;
    if categories.is_empty() {
        println!("No categories yet.");
        println!("Categories are created with 'hamster categories add <name>' or automatically when saving a component.");
        return Ok(());
    }

    println!("{:<6} Name", "ID");
    print_separator(40);
    for category in &categories {
        println!("{:<6} {}", category.id, category.name);
    }
    Ok(())
}

pub async fn add(ctx: &CliContext, name: &str) -> Result<()> {
    let category = ctx.app().categories().create(name).await?;
    println!("✅ Category '{}' created (ID {}).", category.name, category.id);
    Ok(())
}

pub async fn rename(ctx: &CliContext, identifier: &str, name: &str) -> Result<()> {
    let categories = ctx.app().categories();
    let existing = categories.find(identifier).await?;
    let renamed = categories.rename(existing.id, name).await?;
    println!("✅ Category '{}' renamed to '{}'.", existing.name, renamed.name);
    Ok(())
}

pub async fn delete(ctx: &CliContext, identifier: &str, force: bool) -> Result<()> {
    let categories = ctx.app().categories();
    let category = categories.find(identifier).await?;

    if !force {
        let confirm = input::prompt_confirmation(&format!(
            "Delete category '{}' (ID {})?",
            category.name, category.id
        ))?;
        if !confirm {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    categories.delete(category.id).await?;
    println!("✅ Category '{}' deleted.", category.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hamster_core::CoreError;
    use hamster_core::testing::{Call, InMemoryInventory};

    use super::*;
    use crate::handlers::test_support::context;

    #[tokio::test]
    async fn test_blank_name_rejected_locally() {
        let inventory = Arc::new(InMemoryInventory::new());
        let ctx = context(&inventory);

        let err = add(&ctx, "   ").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Validation(_))
        ));
        assert!(inventory.calls().is_empty());
    }

    #[tokio::test]
    async fn test_rename_by_name() {
        let inventory = Arc::new(InMemoryInventory::new().with_category(3, "Caps"));
        let ctx = context(&inventory);

        rename(&ctx, "caps", "Capacitor").await.unwrap();

        assert_eq!(inventory.categories()[0].name, "Capacitor");
        assert_eq!(
            inventory.count(|c| matches!(c, Call::UpdateCategory(3, _))),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_by_id_forced() {
        let inventory = Arc::new(
            InMemoryInventory::new()
                .with_category(1, "Resistor")
                .with_category(2, "LED"),
        );
        let ctx = context(&inventory);

        delete(&ctx, "2", true).await.unwrap();

        let names: Vec<_> = inventory.categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Resistor"]);
    }
}
