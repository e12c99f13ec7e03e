//! Component command handlers.
//!
//! `add` and `edit` drive a components screen the same way the form
//! dialog does: open the form, fill it in, submit. Category resolution,
//! auto-creation and the image upload all happen inside the save workflow.

use std::path::Path;

use anyhow::{Context, Result};
use hamster_core::{
    ComponentsScreen, ComponentsView, ImageOutcome, ImageUpload, SaveMode, SaveOutcome,
};

use crate::bootstrap::CliContext;
use crate::component_commands::{ComponentCommand, ComponentFields};
use crate::presentation::{display_component, print_component_table, print_pagination};
use crate::utils::input;

/// Dispatch a `components` subcommand.
pub async fn execute(ctx: &CliContext, command: ComponentCommand) -> Result<()> {
    match command {
        ComponentCommand::List {
            keyword,
            category,
            page,
        } => list(ctx, keyword, category.as_deref(), page).await,
        ComponentCommand::Show { id } => show(ctx, id).await,
        ComponentCommand::Add { fields } => add(ctx, &fields).await.map(drop),
        ComponentCommand::Edit { id, fields } => edit(ctx, id, &fields).await.map(drop),
        ComponentCommand::Delete { id, force } => delete(ctx, id, force).await,
        ComponentCommand::Image { id, output } => save_image(ctx, id, &output).await,
    }
}

/// Show one page of components, optionally filtered.
pub async fn list(
    ctx: &CliContext,
    keyword: Option<String>,
    category: Option<&str>,
    page: u32,
) -> Result<()> {
    let category_id = match category {
        Some(identifier) => Some(ctx.app().categories().find(identifier).await?.id),
        None => None,
    };

    let mut screen = ctx.app().components_screen();
    screen.search_page(keyword, category_id, page).await?;

    let listing = screen.page();
    if listing.is_empty() {
        println!("No components found.");
        println!("Use 'hamster components add --category <name> --name <name>' to add one.");
        return Ok(());
    }

    print_component_table(&listing.items);
    print_pagination(&listing.pagination);
    Ok(())
}

pub async fn show(ctx: &CliContext, id: i64) -> Result<()> {
    let mut screen = ctx.app().components_screen();
    let component = screen.find(id).await?;
    screen.open_image_preview(id);
    let image_url = match screen.view() {
        ComponentsView::ImagePreview { url } => Some(url.as_str()),
        _ => None,
    };
    display_component(&component, image_url);
    Ok(())
}

/// Create a component. Returns the new ID.
pub async fn add(ctx: &CliContext, fields: &ComponentFields) -> Result<i64> {
    let mut screen = ctx.app().components_screen();
    screen.refresh_categories().await;
    screen.open_form(None);
    fill_form(&mut screen, fields).await?;
    submit(&mut screen).await
}

/// Update the given fields of an existing component.
pub async fn edit(ctx: &CliContext, id: i64, fields: &ComponentFields) -> Result<i64> {
    let mut screen = ctx.app().components_screen();
    screen.refresh_categories().await;
    let component = screen.find(id).await?;
    screen.open_form(Some(&component));
    fill_form(&mut screen, fields).await?;
    submit(&mut screen).await
}

/// Apply command-line fields to the open form.
///
/// A vendor code is applied first so explicit fields override what the
/// lookup filled in.
async fn fill_form(screen: &mut ComponentsScreen, fields: &ComponentFields) -> Result<()> {
    if let Some(code) = &fields.code {
        screen.apply_parsed_code(code).await?;
    }

    if let Some(form) = screen.form_mut() {
        if let Some(category) = &fields.category {
            form.category_input.clone_from(category);
        }
        let draft = &mut form.draft;
        let text_fields = [
            (&mut draft.name, &fields.name),
            (&mut draft.value, &fields.value),
            (&mut draft.package, &fields.package),
            (&mut draft.description, &fields.description),
            (&mut draft.location, &fields.location),
            (&mut draft.datasheet_url, &fields.datasheet),
        ];
        for (slot, value) in text_fields {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }
        if let Some(stock) = fields.stock {
            draft.stock_quantity = Some(stock);
        }
    }

    if let Some(url) = &fields.image_url {
        screen.set_image_url(url)?;
    }
    if let Some(path) = &fields.image {
        let upload = ImageUpload::from_path(path)
            .await
            .with_context(|| format!("Failed to read image '{}'", path.display()))?;
        screen.select_image(upload)?;
    }
    Ok(())
}

/// Submit the open form and report what the save did.
pub(crate) async fn submit(screen: &mut ComponentsScreen) -> Result<i64> {
    let outcome = screen.submit_form().await?;
    for line in outcome_lines(&outcome) {
        println!("{line}");
    }
    Ok(outcome.component_id)
}

fn outcome_lines(outcome: &SaveOutcome) -> Vec<String> {
    let verb = match outcome.mode {
        SaveMode::Create => "Added",
        SaveMode::Update { .. } => "Updated",
    };
    let mut lines = vec![format!("{verb} component #{}.", outcome.component_id)];
    if let Some(category) = &outcome.created_category {
        lines.push(format!(
            "New category '{}' (ID {}) was created.",
            category.name, category.id
        ));
    }
    if let ImageOutcome::Failed { reason } = &outcome.image {
        lines.push(format!("The component was saved without its image: {reason}"));
    }
    lines
}

pub async fn delete(ctx: &CliContext, id: i64, force: bool) -> Result<()> {
    let mut screen = ctx.app().components_screen();
    let component = screen.find(id).await?;

    if !force {
        display_component(&component, None);
        println!();
        let confirm = input::prompt_confirmation("Are you sure you want to delete this component?")?;
        if !confirm {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    screen.delete(id).await?;
    println!("Component '{}' (ID {id}) deleted.", component.name);
    Ok(())
}

/// Download a component's image to `output`.
pub async fn save_image(ctx: &CliContext, id: i64, output: &Path) -> Result<()> {
    let screen = ctx.app().components_screen();
    let Some(bytes) = screen.fetch_image(id).await? else {
        println!("Component #{id} has no image.");
        return Ok(());
    };

    tokio::fs::write(output, &bytes)
        .await
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    println!("Saved {} bytes to {}", bytes.len(), output.display());
    Ok(())
}
