use crate::app::AppContext;
use crate::cli::ClientsArgs;
use crate::output::print_json;
use crate::ui::format::truncate;
use crate::ui::theme::{styled, StatusTone};
use crate::ui::{blank_line, format_currency, format_date, header, print, simple_table, table, Column};

const REASON_MAX: usize = 40;

pub fn handle_clients(ctx: &AppContext, args: &ClientsArgs) -> anyhow::Result<()> {
    if args.proposals {
        handle_proposals(ctx)
    } else if args.pipeline {
        handle_pipeline(ctx)
    } else {
        handle_list(ctx)
    }
}

fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let clients = ctx.fetch("Loading clients", |api| api.get_clients())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&clients);
    }

    let cells: Vec<Vec<String>> = clients
        .iter()
        .map(|c| {
            let reason = if ui.mode.is_pretty() {
                truncate(&c.risk_reason, REASON_MAX)
            } else {
                c.risk_reason.clone()
            };
            vec![
                c.id.clone(),
                c.name.clone(),
                styled(c.status.as_str(), c.status.tone(), ui.color),
                styled(c.risk_level.as_str(), c.risk_level.tone(), ui.color),
                format!("{}d", c.last_touch_days_ago),
                format_currency(c.outstanding_amount),
                c.open_proposals.to_string(),
                reason,
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "clients", None));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Client"),
        Column::new("Status"),
        Column::new("Risk"),
        Column::numeric("Touched"),
        Column::numeric("Outstanding"),
        Column::numeric("Proposals"),
        Column::new("Reason"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_proposals(ctx: &AppContext) -> anyhow::Result<()> {
    let proposals = ctx.fetch("Loading proposals", |api| api.get_proposals())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&proposals);
    }

    let cells: Vec<Vec<String>> = proposals
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.client_name.clone(),
                p.status.as_str().to_string(),
                format_currency(p.value),
                format_date(&p.created_at, tz),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "clients", Some("proposals")));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Proposal"),
        Column::new("Client"),
        Column::new("Status"),
        Column::numeric("Value"),
        Column::new("Created"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_pipeline(ctx: &AppContext) -> anyhow::Result<()> {
    let stages = ctx.fetch("Loading pipeline", |api| api.get_pipeline())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&stages);
    }

    let cells: Vec<Vec<String>> = stages
        .iter()
        .map(|s| {
            vec![
                s.status.as_str().to_string(),
                s.count.to_string(),
                format_currency(s.value),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "clients", Some("pipeline")));
        blank_line(ui);
    }
    let columns = [
        Column::new("Stage"),
        Column::numeric("Count"),
        Column::numeric("Value"),
    ];
    print(ui, &table(ui, &columns, &cells));
    Ok(())
}
