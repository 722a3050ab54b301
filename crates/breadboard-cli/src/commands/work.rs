use breadboard_core::model::TaskStatus;

use crate::app::AppContext;
use crate::cli::{WorkArgs, WorkView};
use crate::output::print_json;
use crate::ui::theme::{styled, StatusTone};
use crate::ui::{
    blank_line, format_date, format_datetime, format_days, format_percent, header, kv, print,
    simple_table, Column,
};

pub fn handle_work(ctx: &AppContext, args: &WorkArgs) -> anyhow::Result<()> {
    match args.view.clone().unwrap_or(WorkView::Overview) {
        WorkView::Overview => handle_overview(ctx),
        WorkView::Projects => handle_projects(ctx),
        WorkView::Tasks { status } => handle_tasks(ctx, status.map(TaskStatus::from)),
        WorkView::Calendar => handle_calendar(ctx),
    }
}

fn handle_overview(ctx: &AppContext) -> anyhow::Result<()> {
    let overview = ctx.fetch("Loading work", |api| api.get_work_overview())?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&overview);
    }

    if !ctx.quiet() {
        print(ui, &header(ui, "work", Some("overview")));
        blank_line(ui);
    }
    print(ui, &kv(ui, "Open tasks", &overview.open_tasks.to_string()));
    print(ui, &kv(ui, "Blocked", &overview.blocked_tasks.to_string()));
    print(ui, &kv(ui, "Done", &overview.done_tasks.to_string()));
    print(ui, &kv(ui, "Due this week", &overview.due_this_week.to_string()));
    print(ui, &kv(ui, "Active projects", &overview.active_projects.to_string()));
    print(ui, &kv(ui, "Average progress", &format_percent(overview.average_progress)));
    Ok(())
}

fn handle_projects(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading projects", |api| api.get_projects())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.client_name.clone(),
                p.status.as_str().to_string(),
                format_percent(p.progress),
                format_date(&p.deadline, tz),
                format_days(p.days_left),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "work", Some("projects")));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Project"),
        Column::new("Client"),
        Column::new("Status"),
        Column::numeric("Progress"),
        Column::new("Deadline"),
        Column::new("Left"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_tasks(ctx: &AppContext, status: Option<TaskStatus>) -> anyhow::Result<()> {
    let rows = ctx.fetch("Loading tasks", |api| api.get_tasks(status))?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&rows);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.title.clone(),
                styled(t.status.as_str(), t.status.tone(), ui.color),
                format_date(&t.due, tz),
                t.client_name.clone(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "work", status.map(|s| s.as_str()).or(Some("tasks"))));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Task"),
        Column::new("Status"),
        Column::new("Due"),
        Column::new("Client"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}

fn handle_calendar(ctx: &AppContext) -> anyhow::Result<()> {
    let events = ctx.fetch("Loading calendar", |api| api.get_calendar())?;
    let tz = ctx.timezone()?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&events);
    }

    let cells: Vec<Vec<String>> = events
        .iter()
        .map(|e| {
            vec![
                format_datetime(&e.start, tz, ui.mode.is_pretty()),
                e.title.clone(),
                e.task_id.clone(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "work", Some("calendar")));
        blank_line(ui);
    }
    let columns = [Column::new("Start"), Column::new("Event"), Column::new("Task")];
    print(ui, &simple_table(ui, &columns, &cells));
    Ok(())
}
