//! Terminal output helpers for the command-line interface.
//!
//! Colored headers, artwork tables and detail boxes. JSON output does not
//! go through here.

use comfy_table::{presets, Attribute, Cell, Table};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::models::{ArtworkDetailItem, ArtworkSummary, DimensionInfo, DimensionValue, ExtractedInfo};

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Print a styled status message.
pub fn print_status(status: Status, msg: &str) {
    let icon = status_icon(status);
    match status {
        Status::Success => println!("{} {}", icon.green().bold(), msg),
        Status::Error => println!("{} {}", icon.red().bold(), msg),
        Status::Warning => println!("{} {}", icon.yellow().bold(), msg),
        Status::Info => println!("{} {}", icon.cyan().bold(), msg),
        Status::Search => println!("{} {}", icon.yellow(), msg),
    }
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
}

/// Print the header of a result page.
pub fn print_search_header(total: u64, shown: usize, next_page_token: Option<&str>) {
    println!();
    println!(
        "{} {} artworks in the collection, {} on this page",
        status_icon(Status::Search).yellow().bold(),
        format_number(total).green().bold(),
        shown.to_string().cyan()
    );
    if let Some(token) = next_page_token {
        println!("  Next page token: {}", token.yellow());
    }
    println!();
}

/// Print search summaries as a table.
pub fn print_artwork_table(artworks: &[ArtworkSummary]) {
    let id_width = terminal_width().saturating_sub(30).clamp(20, 70);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["#", "Object", "Identifier"]);

    for (index, artwork) in artworks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&artwork.object_number).add_attribute(Attribute::Bold),
            Cell::new(truncate_with_ellipsis(&artwork.id, id_width)),
        ]);
    }
    println!("{table}");
}

/// Print hydrated artworks as a table.
pub fn print_detail_table(items: &[ArtworkDetailItem]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Object", "Title", "Creator", "Date", "Images"]);

    for item in items {
        table.add_row(vec![
            Cell::new(&item.object_id),
            Cell::new(truncate_with_ellipsis(&item.info.title, 40)).add_attribute(Attribute::Bold),
            Cell::new(truncate_with_ellipsis(&item.info.creator, 30)),
            Cell::new(&item.info.date),
            Cell::new(item.info.images.len()),
        ]);
    }
    println!("{table}");
}

/// Print extracted artwork information.
pub fn print_artwork_info(info: &ExtractedInfo) {
    println!();
    println!("{}", info.title.blue().bold());
    println!("  Creator:    {}", info.creator.green());
    println!("  Date:       {}", info.date.yellow());
    if !info.id.is_empty() {
        println!("  Identifier: {}", info.id);
    }
    if !info.materials.is_empty() {
        println!("  Materials:  {}", info.materials.join(", "));
    }
    for dimension in &info.dimensions {
        println!("  Dimension:  {}", format_dimension(dimension));
    }
    for image in &info.images {
        println!(
            "  Image:      {} {}",
            image.url.as_deref().unwrap_or("-").cyan(),
            image
                .format
                .as_deref()
                .map(|f| format!("({})", f))
                .unwrap_or_default()
                .dimmed()
        );
    }
}

/// Render a dimension as "type: value unit".
pub fn format_dimension(dimension: &DimensionInfo) -> String {
    let value = match &dimension.value {
        Some(DimensionValue::Number(n)) => n.to_string(),
        Some(DimensionValue::Text(s)) => s.clone(),
        None => "?".to_string(),
    };
    format!(
        "{}: {} {}",
        dimension.kind.as_deref().unwrap_or("Dimension"),
        value,
        dimension.unit
    )
}

/// Format a number with commas.
pub fn format_number(n: u64) -> String {
    n.to_string()
        .chars()
        .rev()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect()
}

/// Truncate text to at most `max_chars` characters, appending an ellipsis.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return "...".to_string();
    }

    let truncated: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(837), "837");
        assert_eq!(format_number(837012), "837,012");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Hi", 8), "Hi");
        assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
        assert_eq!(truncate_with_ellipsis("Nachtwacht", 3), "...");
    }

    #[test]
    fn test_format_dimension() {
        let dim = DimensionInfo {
            kind: Some("height".to_string()),
            value: Some(DimensionValue::Number(379.5)),
            unit: "centimetres".to_string(),
        };
        assert_eq!(format_dimension(&dim), "height: 379.5 centimetres");

        let bare = DimensionInfo {
            kind: None,
            value: None,
            unit: "unknown".to_string(),
        };
        assert_eq!(format_dimension(&bare), "Dimension: ? unknown");
    }
}
