//! Text output for widget panels.

use breadboard_core::Panel;

use crate::ui::{kv, section, UiContext};

/// A panel as a section title followed by one key-value line per row.
pub fn panel_lines(ctx: &UiContext, panel: &Panel) -> Vec<String> {
    let mut lines = Vec::with_capacity(panel.lines.len() + 1);
    lines.push(section(ctx, &panel.title));
    for line in &panel.lines {
        let rendered = kv(ctx, &line.label, &line.value);
        if ctx.mode.is_pretty() {
            lines.push(format!("  {}", rendered));
        } else {
            lines.push(rendered);
        }
    }
    lines
}

pub fn print_panel(ctx: &UiContext, panel: &Panel) {
    for line in panel_lines(ctx, panel) {
        println!("{}", line);
    }
}
