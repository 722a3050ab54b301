use breadboard_core::layout::reduce;
use breadboard_core::{Density, Layout, LayoutAction, WidgetKind};

use crate::app::AppContext;
use crate::cli::{LayoutArgs, LayoutCommand};
use crate::commands::widget::parse_widget;
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{blank_line, header, hint, kv, print, receipt, simple_table, Column};

pub fn handle_layout(ctx: &AppContext, args: &LayoutArgs) -> anyhow::Result<()> {
    let command = args.command.clone().unwrap_or(LayoutCommand::Show);
    let action = match command {
        LayoutCommand::Show => return handle_show(ctx),
        LayoutCommand::Add { widget } => LayoutAction::Add(parse_widget(&widget)?),
        LayoutCommand::Remove { widget } => LayoutAction::Remove(parse_widget(&widget)?),
        LayoutCommand::Move { from, to } => LayoutAction::Move {
            from: zero_based(from)?,
            to: zero_based(to)?,
        },
        LayoutCommand::Density { density } => {
            LayoutAction::SetDensity(density.parse::<Density>().map_err(CliError::from)?)
        }
        LayoutCommand::Reset => LayoutAction::Reset,
    };

    let current = ctx.layout()?;
    let next = reduce(&current, action).map_err(CliError::from)?;
    let path = ctx.save_layout(&next)?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&next);
    }
    if !ctx.quiet() {
        let widgets = widget_list(&next);
        let saved = path.display().to_string();
        print(
            ui,
            &receipt(
                ui,
                "Layout updated",
                &[
                    ("Widgets", widgets.as_str()),
                    ("Density", next.density.as_str()),
                    ("Config", saved.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let layout = ctx.layout()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&layout);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "layout", None));
        blank_line(ui);
    }
    let cells: Vec<Vec<String>> = layout
        .widgets
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            vec![
                (i + 1).to_string(),
                kind.as_str().to_string(),
                kind.spec().title.to_string(),
            ]
        })
        .collect();
    let columns = [
        Column::numeric("#"),
        Column::new("Widget"),
        Column::new("Title"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    blank_line(ui);
    print(ui, &kv(ui, "Density", layout.density.as_str()));

    if !ctx.quiet() {
        let available: Vec<&str> = WidgetKind::ALL
            .iter()
            .filter(|kind| !layout.widgets.contains(kind))
            .map(|kind| kind.as_str())
            .collect();
        if let Some(first) = available.first() {
            blank_line(ui);
            print(ui, &hint(ui, &format!("breadboard layout add {}", first)));
        }
    }
    Ok(())
}

/// Positions on the command line count from 1.
fn zero_based(position: usize) -> Result<usize, CliError> {
    position
        .checked_sub(1)
        .ok_or_else(|| CliError::invalid_input("Positions start at 1"))
}

fn widget_list(layout: &Layout) -> String {
    layout
        .widgets
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_based() {
        assert_eq!(zero_based(1).unwrap(), 0);
        assert_eq!(zero_based(0).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn test_widget_list() {
        assert_eq!(
            widget_list(&Layout::default()),
            "money,compliance,work,insights"
        );
    }
}
