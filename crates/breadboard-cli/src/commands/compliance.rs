use crate::app::AppContext;
use crate::cli::{ComplianceArgs, ComplianceView};
use crate::output::print_json;
use crate::ui::theme::{styled, StatusTone};
use crate::ui::{
    blank_line, format_currency, format_date, format_datetime, format_days, header, kv, print,
    simple_table, Column,
};

pub fn handle_compliance(ctx: &AppContext, args: &ComplianceArgs) -> anyhow::Result<()> {
    match args.view.clone().unwrap_or(ComplianceView::Overview) {
        ComplianceView::Overview => handle_overview(ctx),
        ComplianceView::Forms => handle_forms(ctx),
        ComplianceView::Audit => handle_audit(ctx),
    }
}

fn handle_overview(ctx: &AppContext) -> anyhow::Result<()> {
    let overview = ctx.fetch("Loading compliance", |api| api.get_compliance_overview())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&overview);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "compliance", Some("overview")));
        blank_line(ui);
    }
    print(ui, &kv(ui, "Next filing", &overview.next_filing_label));
    print(ui, &kv(ui, "Due", &format_date(&overview.next_filing_due, tz)));
    print(ui, &kv(ui, "Days remaining", &overview.days_remaining.to_string()));
    print(ui, &kv(ui, "Open items", &overview.open_items.to_string()));
    print(
        ui,
        &kv(ui, "Estimated tax due", &format_currency(overview.estimated_tax_due)),
    );
    print(
        ui,
        &kv(ui, "Estimated tax paid", &format_currency(overview.estimated_tax_paid)),
    );
    Ok(())
}

fn handle_forms(ctx: &AppContext) -> anyhow::Result<()> {
    let forms = ctx.fetch("Loading filings", |api| api.get_compliance_forms())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&forms);
    }

    let cells: Vec<Vec<String>> = forms
        .iter()
        .map(|f| {
            vec![
                f.id.clone(),
                f.name.clone(),
                styled(f.status.as_str(), f.status.tone(), ui.color),
                format_date(&f.due_at, tz),
                format_days(f.days_remaining),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "compliance", Some("forms")));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Form"),
        Column::new("Status"),
        Column::new("Due"),
        Column::new("In"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_audit(ctx: &AppContext) -> anyhow::Result<()> {
    let entries = ctx.fetch("Loading audit log", |api| api.get_audit_log())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&entries);
    }

    let cells: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                format_datetime(&e.at, tz, ui.mode.is_pretty()),
                e.action.clone(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "compliance", Some("audit")));
        blank_line(ui);
    }
    let columns = [Column::new("ID"), Column::new("When"), Column::new("Action")];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}
