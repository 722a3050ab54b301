use breadboard_core::widgets::render;
use breadboard_core::{Density, WidgetKind};

use crate::app::AppContext;
use crate::cli::WidgetArgs;
use crate::errors::CliError;
use crate::output::{panel_json, print_json, print_panel};

pub fn handle_widget(ctx: &AppContext, args: &WidgetArgs) -> anyhow::Result<()> {
    let kind = parse_widget(&args.kind)?;
    let density = if args.compact {
        Density::Compact
    } else {
        Density::Full
    };

    let panel = ctx.fetch("Loading widget", |api| render(kind, api, density))?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&panel_json(&panel));
    }
    print_panel(ui, &panel);
    Ok(())
}

/// Parse a widget name, hinting at the known kinds on failure.
pub fn parse_widget(value: &str) -> Result<WidgetKind, CliError> {
    value.parse::<WidgetKind>().map_err(|err| {
        let err = CliError::from(err);
        CliError::invalid_input_with_hint(err.message(), format!("Known widgets: {}", known_widgets()))
    })
}

fn known_widgets() -> String {
    WidgetKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_widget_hint_lists_kinds() {
        let err = parse_widget("weather").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.hint().unwrap_or_default().contains("cash_flow"));
        assert_eq!(parse_widget("revenue-trend").unwrap(), WidgetKind::RevenueTrend);
    }
}
