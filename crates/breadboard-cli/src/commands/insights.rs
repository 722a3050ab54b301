use crate::app::AppContext;
use crate::cli::InsightsArgs;
use crate::output::print_json;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, format_currency, header, kv, print, table, Column};

pub fn handle_insights(ctx: &AppContext, args: &InsightsArgs) -> anyhow::Result<()> {
    if args.trend {
        handle_trend(ctx)
    } else {
        handle_overview(ctx)
    }
}

fn handle_overview(ctx: &AppContext) -> anyhow::Result<()> {
    let overview = ctx.fetch("Loading insights", |api| api.get_insights_overview())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&overview);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "insights", None));
        blank_line(ui);
    }
    print(
        ui,
        &kv(ui, "Profitability", &format!("{}/100", overview.profitability_score)),
    );
    print(
        ui,
        &kv(ui, "Efficiency", &format!("{}/100", overview.efficiency_score)),
    );
    print(ui, &kv(ui, "Revenue trend", overview.revenue_trend.as_str()));
    print(ui, &kv(ui, "Unfinished tasks", &overview.unfinished_tasks.to_string()));
    print(ui, &kv(ui, "Blocked tasks", &overview.blocked_tasks.to_string()));

    if ui.mode.is_pretty() {
        blank_line(ui);
        let bullet = if ui.unicode { "\u{2022}" } else { "*" };
        for suggestion in &overview.suggestions {
            print(
                ui,
                &format!(
                    "{} {}",
                    bullet,
                    styled(&suggestion.title, styles::bold(), ui.color)
                ),
            );
            print(
                ui,
                &format!("  {}", styled(&suggestion.detail, styles::dim(), ui.color)),
            );
        }
    } else {
        for suggestion in &overview.suggestions {
            print(ui, &kv(ui, "suggestion", &suggestion.title));
        }
    }
    Ok(())
}

fn handle_trend(ctx: &AppContext) -> anyhow::Result<()> {
    let points = ctx.fetch("Loading revenue trend", |api| api.get_revenue_trend())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&points);
    }

    let peak = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let bar = if ui.unicode { "\u{2588}" } else { "#" };
    let cells: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            let mut row = vec![p.label.clone(), format_currency(p.value)];
            if ui.mode.is_pretty() {
                let width = if peak > 0.0 {
                    (p.value / peak * 20.0).round() as usize
                } else {
                    0
                };
                row.push(bar.repeat(width));
            }
            row
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "insights", Some("revenue trend")));
        blank_line(ui);
    }
    let columns = [
        Column::new("Month"),
        Column::numeric("Revenue"),
        Column::new(""),
    ];
    print(ui, &table(ui, &columns, &cells));
    Ok(())
}
