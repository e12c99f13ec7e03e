//! Display helpers for components, drafts, parse results and stock logs.

use hamster_core::{
    Component, ComponentDraft, FormState, ImageSource, Pagination, ParsedPart, StockLog,
};

use super::tables::{format_or_dash, format_timestamp, print_separator, truncate_string};

/// Print a page of components as a table.
pub fn print_component_table(components: &[Component]) {
    println!(
        "{:<6} {:<24} {:<10} {:<10} {:<14} {:>8}  Location",
        "ID", "Name", "Value", "Package", "Category", "Stock"
    );
    print_separator(90);
    for c in components {
        println!(
            "{:<6} {:<24} {:<10} {:<10} {:<14} {:>8}  {}",
            c.id,
            truncate_string(&c.name, 23),
            truncate_string(format_or_dash(&c.value), 9),
            truncate_string(format_or_dash(&c.package), 9),
            truncate_string(c.category_name().unwrap_or("--"), 13),
            c.stock_quantity,
            format_or_dash(&c.location),
        );
    }
}

/// Print the "page x of y" footer of a listing.
pub fn print_pagination(pagination: &Pagination) {
    println!();
    println!(
        "Page {} of {} ({} total)",
        pagination.page,
        pagination.page_count().max(1),
        pagination.total
    );
    if pagination.has_next() {
        println!("Use --page {} to see more.", pagination.page + 1);
    }
}

/// Print all fields of one component.
pub fn display_component(component: &Component, image_url: Option<&str>) {
    println!("Component #{}: {}", component.id, component.name);
    println!("  Category:    {}", component.category_name().unwrap_or("--"));
    println!("  Value:       {}", format_or_dash(&component.value));
    println!("  Package:     {}", format_or_dash(&component.package));
    println!("  Stock:       {}", component.stock_quantity);
    println!("  Location:    {}", format_or_dash(&component.location));
    println!("  Datasheet:   {}", format_or_dash(&component.datasheet_url));
    if !component.description.is_empty() {
        println!("  Description: {}", component.description);
    }
    if let Some(url) = image_url {
        println!("  Image:       {url}");
    }
    if let Some(updated) = &component.updated_at {
        println!("  Updated:     {}", format_timestamp(updated));
    }
}

fn draft_field(value: Option<&String>) -> &str {
    value.map_or("--", |v| format_or_dash(v))
}

/// Print the contents of a filled-in component form.
pub fn display_draft(form: &FormState) {
    let draft: &ComponentDraft = &form.draft;
    println!("  Category:    {}", format_or_dash(&form.category_input));
    println!("  Name:        {}", draft_field(draft.name.as_ref()));
    println!("  Value:       {}", draft_field(draft.value.as_ref()));
    println!("  Package:     {}", draft_field(draft.package.as_ref()));
    println!("  Stock:       {}", draft.stock_quantity.unwrap_or(0));
    println!("  Datasheet:   {}", draft_field(draft.datasheet_url.as_ref()));
    match &draft.image {
        ImageSource::None => {}
        ImageSource::Url(url) => println!("  Image:       {url}"),
        ImageSource::Upload(upload) => println!("  Image:       {} (pending upload)", upload.file_name),
    }
    if let Some(description) = draft.description.as_ref().filter(|d| !d.is_empty()) {
        println!("  Description: {}", description.replace('\n', "\n               "));
    }
}

/// Print what a vendor code resolved to.
pub fn display_parsed_part(part: &ParsedPart) {
    println!("{} ({})", part.display_name(), format_or_dash(&part.platform_code));
    println!("  Manufacturer: {}", format_or_dash(&part.manufacturer));
    println!("  Value:        {}", format_or_dash(&part.value));
    println!("  Package:      {}", format_or_dash(&part.package));
    if part.price > 0.0 {
        println!("  Price:        {:.4}", part.price);
    }
    println!("  Platform:     {}", format_or_dash(&part.platform_name));
    println!("  Datasheet:    {}", format_or_dash(&part.datasheet_url));
    if !part.description.is_empty() {
        println!("  Description:  {}", part.description);
    }
}

/// Print stock log entries, newest first as the backend returns them.
///
/// The component column is filled from the embedded component when
/// present (global history only).
pub fn print_log_table(logs: &[StockLog]) {
    println!(
        "{:<20} {:<24} {:>8}  Reason",
        "Time", "Component", "Change"
    );
    print_separator(70);
    for log in logs {
        let component = log
            .component
            .as_ref()
            .map_or_else(|| format!("#{}", log.component_id), |c| c.name.clone());
        println!(
            "{:<20} {:<24} {:>+8}  {}",
            format_timestamp(&log.created_at),
            truncate_string(&component, 23),
            log.change_amount,
            log.reason,
        );
    }
}
