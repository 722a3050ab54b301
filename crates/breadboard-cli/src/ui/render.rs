//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Header line for a command.
///
/// Pretty mode: "Bread Board · money (overview)"
/// Plain mode: "breadboard money"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Bread Board", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("breadboard {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Section title inside a command's output (one per dashboard panel).
pub fn section(ctx: &UiContext, title: &str) -> String {
    if ctx.mode.is_pretty() {
        let rule = if ctx.unicode { "\u{2500}" } else { "-" };
        let width = ctx.width.min(60).saturating_sub(title.chars().count() + 4);
        format!(
            "{} {} {}",
            rule.repeat(2),
            styled(title, styles::bold(), ctx.color),
            rule.repeat(width)
        )
    } else {
        format!("[{}]", title.to_lowercase().replace(' ', "_"))
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let marker = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        marker
    } else {
        format!("{} {}", marker, message)
    }
}

/// Key-value pair.
///
/// Pretty mode: "Key: value" with a dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", plain_key(key), value)
    }
}

fn plain_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary block after a state change.
///
/// Pretty mode: badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        lines.extend(items.iter().map(|(k, v)| format!("  {}", kv(ctx, k, v))));
    } else {
        lines.push("status=ok".to_string());
        lines.extend(items.iter().map(|(k, v)| kv(ctx, k, v)));
    }
    lines.join("\n")
}

/// Table column header.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// Right-align the column (amounts, counts)
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Bordered table in pretty mode; tab-separated rows without a header in plain mode.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = Table::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width as u16);
    table.set_header(header_cells(ctx, columns, false));
    for row in rows {
        table.add_row(row);
    }
    align_numeric(&mut table, columns);
    table.to_string()
}

/// Borderless table with a dim header, for short lists.
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header_cells(ctx, columns, true));
    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    align_numeric(&mut table, columns);
    table.to_string()
}

fn header_cells(ctx: &UiContext, columns: &[Column], dim: bool) -> Vec<Cell> {
    columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            match (ctx.color, dim) {
                (true, true) => cell.add_attribute(Attribute::Dim),
                (true, false) => cell.add_attribute(Attribute::Bold),
                _ => cell,
            }
        })
        .collect()
}

fn align_numeric(table: &mut Table, columns: &[Column]) {
    for (i, column) in columns.iter().enumerate() {
        if column.numeric {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(comfy_table::CellAlignment::Right);
            }
        }
    }
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print to stdout unless the mode is JSON (JSON output is written separately).
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Empty line, pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Error message with an optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header() {
        assert_eq!(header(&plain_ctx(), "money", None), "breadboard money");
        let pretty = header(&pretty_ctx(), "money", Some("overview"));
        assert!(pretty.contains("Bread Board"));
        assert!(pretty.contains("money (overview)"));
    }

    #[test]
    fn test_kv_plain_key_is_snake_case() {
        assert_eq!(kv(&plain_ctx(), "Profit YTD", "$1,200"), "profit_ytd=$1,200");
        assert_eq!(kv(&plain_ctx(), "Open items", "4"), "open_items=4");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Next filing", "W-9");
        assert_eq!(line, "Next filing: W-9");
    }

    #[test]
    fn test_section() {
        assert_eq!(section(&plain_ctx(), "Cash flow"), "[cash_flow]");
        assert!(section(&pretty_ctx(), "Money").contains("Money"));
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::numeric("Amount")];
        let rows = vec![vec!["inv_001".to_string(), "$1,200".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "inv_001\t$1,200");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let columns = [Column::new("ID"), Column::numeric("Amount")];
        let rows = vec![vec!["inv_001".to_string(), "$1,200".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("ID"));
        assert!(t.contains("Amount"));
        assert!(t.contains("inv_001"));
    }

    #[test]
    fn test_simple_table_empty_rows_keeps_header() {
        let columns = [Column::new("Name")];
        let t = simple_table(&pretty_ctx(), &columns, &[]);
        assert!(t.contains("Name"));
    }

    #[test]
    fn test_receipt() {
        let items = [("Widget", "cash_flow"), ("Position", "5")];
        let pretty = receipt(&pretty_ctx(), "Layout updated", &items);
        assert!(pretty.contains("Layout updated"));
        assert!(pretty.contains("Widget: cash_flow"));

        let plain = receipt(&plain_ctx(), "Layout updated", &items);
        assert_eq!(plain, "status=ok\nwidget=cash_flow\nposition=5");
    }

    #[test]
    fn test_error_message() {
        let plain = error_message(&plain_ctx(), "Unknown widget", Some("See `breadboard layout show`"));
        assert_eq!(plain, "error=Unknown widget\nhint=See `breadboard layout show`");
        let pretty = error_message(&pretty_ctx(), "Unknown widget", None);
        assert!(pretty.contains("[\u{2717}]"));
    }
}
