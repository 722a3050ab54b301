use breadboard_core::model::InvoiceStatus;

use crate::app::AppContext;
use crate::cli::{MoneyArgs, MoneyView};
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::output::print_json;
use crate::ui::theme::{styled, StatusTone};
use crate::ui::{
    blank_line, format_currency, format_date, format_percent, header, hint, kv, print,
    simple_table, table, Column,
};

pub fn handle_money(ctx: &AppContext, args: &MoneyArgs) -> anyhow::Result<()> {
    match args.view.clone().unwrap_or(MoneyView::Overview) {
        MoneyView::Overview => handle_overview(ctx),
        MoneyView::Income => handle_income(ctx),
        MoneyView::Expenses => handle_expenses(ctx),
        MoneyView::Invoices { status } => handle_invoices(ctx, status.map(InvoiceStatus::from)),
        MoneyView::Budgets => handle_budgets(ctx),
        MoneyView::CashFlow => handle_cash_flow(ctx),
    }
}

fn handle_overview(ctx: &AppContext) -> anyhow::Result<()> {
    let overview = ctx.fetch("Loading money", |api| api.get_money_overview())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&overview);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "money", Some("overview")));
        blank_line(ui);
    }
    print(ui, &kv(ui, "Income YTD", &format_currency(overview.income_ytd)));
    print(ui, &kv(ui, "Expenses YTD", &format_currency(overview.expenses_ytd)));
    print(ui, &kv(ui, "Profit YTD", &format_currency(overview.profit_ytd)));
    print(ui, &kv(ui, "Tax reserve", &format_currency(overview.tax_reserve)));
    print(
        ui,
        &kv(
            ui,
            "Outstanding",
            &format!(
                "{} invoices, {}",
                overview.outstanding_invoices,
                format_currency(overview.outstanding_amount)
            ),
        ),
    );
    print(ui, &kv(ui, "Overdue", &overview.overdue_invoices.to_string()));
    if !ctx.quiet() && overview.overdue_invoices > 0 {
        blank_line(ui);
        print(ui, &hint(ui, "breadboard money invoices --status overdue"));
    }
    Ok(())
}

fn handle_income(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading income", |api| api.get_income_transactions())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let total: f64 = rows.iter().map(|r| r.amount).sum();
    let limit = if ui.mode.is_pretty() {
        DEFAULT_LIST_LIMIT
    } else {
        rows.len()
    };
    let mut newest = rows;
    newest.sort_by(|a, b| b.date.cmp(&a.date));
    let shown = newest.len().min(limit);
    let cells: Vec<Vec<String>> = newest
        .iter()
        .take(limit)
        .map(|r| {
            vec![
                r.id.clone(),
                format_date(&r.date, tz),
                r.client_name.clone(),
                format_currency(r.amount),
                r.invoice_id.clone().unwrap_or_default(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "money", Some("income")));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Client"),
        Column::numeric("Amount"),
        Column::new("Invoice"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    if !ctx.quiet() && ui.mode.is_pretty() {
        blank_line(ui);
        print(
            ui,
            &kv(
                ui,
                "Total",
                &format!("{} ({} of {} shown)", format_currency(total), shown, newest.len()),
            ),
        );
    }
    Ok(())
}

fn handle_expenses(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading expenses", |api| api.get_expense_transactions())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                format_date(&r.date, tz),
                r.vendor.clone(),
                r.category.clone(),
                format_currency(r.amount),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "money", Some("expenses")));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Vendor"),
        Column::new("Category"),
        Column::numeric("Amount"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_invoices(ctx: &AppContext, status: Option<InvoiceStatus>) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading invoices", |api| api.get_invoices(status))?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.client_name.clone(),
                format_currency(r.amount),
                styled(r.status.as_str(), r.status.tone(), ui.color),
                format_date(&r.due_at, tz),
                r.paid_at
                    .map(|paid| format_date(&paid, tz))
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "money", status.map(|s| s.as_str()).or(Some("invoices"))));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Client"),
        Column::numeric("Amount"),
        Column::new("Status"),
        Column::new("Due"),
        Column::new("Paid"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_budgets(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading budgets", |api| api.get_budgets())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.category.clone(),
                format_currency(r.limit),
                format_currency(r.spent),
                format_currency(r.remaining),
                format_percent(r.utilization),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "money", Some("budgets")));
        blank_line(ui);
    }
    let columns = [
        Column::new("Category"),
        Column::numeric("Limit"),
        Column::numeric("Spent"),
        Column::numeric("Remaining"),
        Column::numeric("Used"),
    ];
    print(ui, &table(ui, &columns, &cells));
    Ok(())
}

fn handle_cash_flow(ctx: &AppContext) -> anyhow::Result<()> {
    let points = ctx.fetch("Loading cash flow", |api| api.get_cash_flow())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&points);
    }

    let cells: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                format_currency(p.inflow),
                format_currency(p.outflow),
                format_currency(p.inflow - p.outflow),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "money", Some("cash flow")));
        blank_line(ui);
    }
    let columns = [
        Column::new("Month"),
        Column::numeric("In"),
        Column::numeric("Out"),
        Column::numeric("Net"),
    ];
    print(ui, &table(ui, &columns, &cells));
    Ok(())
}
