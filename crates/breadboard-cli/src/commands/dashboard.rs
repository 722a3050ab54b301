use breadboard_core::{DashboardApi, Density};

use crate::app::AppContext;
use crate::cli::DashboardArgs;
use crate::output::{panel_json, print_json, print_panel};
use crate::ui::{blank_line, format_datetime, header, hint, kv, print};

pub fn handle_dashboard(ctx: &AppContext, args: &DashboardArgs) -> anyhow::Result<()> {
    let layout = ctx.layout()?;
    let density = match (args.compact, args.full) {
        (true, _) => Density::Compact,
        (_, true) => Density::Full,
        _ => layout.density,
    };

    let panels = ctx.fetch("Loading dashboard", |api| layout.render_with(api, density))?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        let values: Vec<serde_json::Value> = panels.iter().map(panel_json).collect();
        return print_json(&values);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "dashboard", Some(density.as_str())));
        let anchor = ctx.api()?.dataset().generated_at;
        print(
            ui,
            &kv(ui, "As of", &format_datetime(&anchor, ctx.timezone()?, ui.mode.is_pretty())),
        );
        blank_line(ui);
    }
    for (i, panel) in panels.iter().enumerate() {
        if i > 0 {
            blank_line(ui);
        }
        print_panel(ui, panel);
    }
    if panels.is_empty() && !ctx.quiet() {
        print(ui, &hint(ui, "breadboard layout add money"));
    }
    Ok(())
}
