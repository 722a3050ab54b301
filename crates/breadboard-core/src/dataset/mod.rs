//! Deterministic synthetic dataset.
//!
//! [`build`] turns a single reference time into a coherent relational dataset.
//! There is no randomness: every value is derived from the entity index with
//! modulo arithmetic over the fixed tables in [`sources`], so the same anchor
//! always yields the same dataset.

pub mod sources;

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::model::{
    AuditLogEntry, Budget, CalendarEvent, CashFlowPoint, Client, ClientStatus, ComplianceForm,
    Invoice, InvoiceStatus, MarketplacePack, MoneyTransaction, Project, ProjectStatus, Proposal,
    RiskLevel, Task, TaskStatus, TransactionKind,
};

use sources::*;

/// The complete in-memory dataset behind every dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Anchor the dataset was built from
    pub generated_at: DateTime<Utc>,
    pub clients: Vec<Client>,
    pub proposals: Vec<Proposal>,
    pub invoices: Vec<Invoice>,
    pub transactions: Vec<MoneyTransaction>,
    pub budgets: Vec<Budget>,
    pub cash_flow: Vec<CashFlowPoint>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub calendar: Vec<CalendarEvent>,
    pub compliance_forms: Vec<ComplianceForm>,
    pub audit_log: Vec<AuditLogEntry>,
    pub marketplace: Vec<MarketplacePack>,
}

impl Dataset {
    /// Look up a client by id.
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    /// Serialize the whole dataset as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pick an element by index, wrapping around the end of the list.
///
/// Returns `None` only for an empty list.
pub fn pick<T>(items: &[T], index: usize) -> Option<&T> {
    if items.is_empty() {
        None
    } else {
        items.get(index % items.len())
    }
}

/// Same as [`pick`] for the fixed, non-empty source tables.
fn cycle<T: Copy, const N: usize>(table: &[T; N], index: usize) -> T {
    table[index % N]
}

/// Clamp a value into `[0, 1]`.
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Build the dataset anchored on `now`.
pub fn build(now: DateTime<Utc>) -> Dataset {
    let year_start = start_of_year(now);

    let clients = build_clients();
    let proposals = build_proposals(&clients, now);
    let invoices = build_invoices(&clients, year_start);
    let mut transactions = income_transactions(&invoices);
    transactions.extend(expense_transactions(year_start));

    let mut budgets = build_budgets();
    recompute_budget_spent(&mut budgets, &transactions);
    let cash_flow = build_cash_flow(&transactions, now.year());

    let projects = build_projects(&clients, now);
    let tasks = build_tasks(&projects, now);
    let calendar = build_calendar(&tasks);

    let compliance_forms = build_compliance_forms(now);
    let audit_log = build_audit_log(now);
    let marketplace = build_marketplace();

    debug!(
        anchor = %now,
        clients = clients.len(),
        invoices = invoices.len(),
        transactions = transactions.len(),
        projects = projects.len(),
        tasks = tasks.len(),
        "Built synthetic dataset"
    );

    Dataset {
        generated_at: now,
        clients,
        proposals,
        invoices,
        transactions,
        budgets,
        cash_flow,
        projects,
        tasks,
        calendar,
        compliance_forms,
        audit_log,
        marketplace,
    }
}

/// Recompute every budget's `spent` from the expense transactions of its category.
///
/// Must be called again after any change to the transaction list.
pub fn recompute_budget_spent(budgets: &mut [Budget], transactions: &[MoneyTransaction]) {
    let mut spent_by_category: HashMap<&str, f64> = HashMap::new();
    for txn in transactions {
        if txn.kind != TransactionKind::Expense {
            continue;
        }
        if let Some(category) = txn.category.as_deref() {
            *spent_by_category.entry(category).or_insert(0.0) += txn.amount;
        }
    }
    for budget in budgets.iter_mut() {
        budget.spent = spent_by_category
            .get(budget.category.as_str())
            .copied()
            .unwrap_or(0.0);
    }
}

fn start_of_year(now: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(now)
}

fn client_status(index: usize) -> ClientStatus {
    let position = index + 1;
    if position % 7 == 0 {
        ClientStatus::Inactive
    } else if position % 5 == 0 {
        ClientStatus::AtRisk
    } else {
        ClientStatus::Active
    }
}

fn risk_level(status: ClientStatus, index: usize) -> RiskLevel {
    match status {
        ClientStatus::Active if index % 4 == 0 => RiskLevel::Medium,
        ClientStatus::Active => RiskLevel::Low,
        ClientStatus::Inactive => RiskLevel::Medium,
        ClientStatus::AtRisk => RiskLevel::High,
    }
}

fn risk_reason(status: ClientStatus, level: RiskLevel, index: usize) -> &'static str {
    let even = index % 2 == 0;
    match (status, level) {
        (ClientStatus::AtRisk, _) if even => REASON_LATE,
        (ClientStatus::AtRisk, _) => REASON_DISPUTE,
        (ClientStatus::Inactive, _) => REASON_INACTIVE,
        (ClientStatus::Active, RiskLevel::Medium) => REASON_MEDIUM,
        (ClientStatus::Active, _) if even => REASON_LOW_EVEN,
        (ClientStatus::Active, _) => REASON_LOW_ODD,
    }
}

fn build_clients() -> Vec<Client> {
    (0..CLIENT_COUNT)
        .map(|i| {
            let status = client_status(i);
            let level = risk_level(status, i);
            let last_touch_days_ago = match status {
                ClientStatus::Inactive => 90 + (i as u32) * 3,
                _ => ((i as u32) * 4) % 30 + 1,
            };
            Client {
                id: format!("cli_{:02}", i + 1),
                name: cycle(&CLIENT_NAMES, i).to_string(),
                status,
                risk_level: level,
                risk_reason: risk_reason(status, level, i).to_string(),
                last_touch_days_ago,
            }
        })
        .collect()
}

fn build_proposals(clients: &[Client], now: DateTime<Utc>) -> Vec<Proposal> {
    (0..PROPOSAL_COUNT)
        .filter_map(|i| {
            let client = pick(clients, i)?;
            Some(Proposal {
                id: format!("prp_{:02}", i + 1),
                client_id: client.id.clone(),
                title: cycle(&PROPOSAL_TITLES, i).to_string(),
                status: cycle(&PROPOSAL_STATUSES, i),
                value: 2500.0 + 750.0 * (i % 6) as f64,
                created_at: now - Duration::days(3 + 6 * i as i64),
            })
        })
        .collect()
}

fn invoice_status(index: usize) -> InvoiceStatus {
    if index % 4 != 0 {
        InvoiceStatus::Paid
    } else if index % 8 == 0 {
        InvoiceStatus::Overdue
    } else {
        InvoiceStatus::Due
    }
}

fn build_invoices(clients: &[Client], year_start: DateTime<Utc>) -> Vec<Invoice> {
    (0..INVOICE_COUNT)
        .filter_map(|i| {
            let client = pick(clients, i)?;
            let offset_days = (i * 365 / INVOICE_COUNT) as i64;
            let issued_at = year_start + Duration::days(offset_days);
            let status = invoice_status(i);
            let paid_at = (status == InvoiceStatus::Paid)
                .then(|| issued_at + Duration::days(3 + (i % 10) as i64));
            Some(Invoice {
                id: format!("inv_{:03}", i + 1),
                client_id: client.id.clone(),
                amount: 1200.0 + 350.0 * (i % 9) as f64 + 75.0 * (i % 4) as f64,
                status,
                issued_at,
                due_at: issued_at + Duration::days(INVOICE_TERMS_DAYS),
                paid_at,
            })
        })
        .collect()
}

fn income_transactions(invoices: &[Invoice]) -> Vec<MoneyTransaction> {
    invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Paid)
        .enumerate()
        .map(|(n, invoice)| MoneyTransaction {
            id: format!("txn_inc_{:03}", n + 1),
            kind: TransactionKind::Income,
            amount: invoice.amount,
            date: invoice.paid_at.unwrap_or(invoice.issued_at),
            client_id: Some(invoice.client_id.clone()),
            vendor: None,
            category: None,
            memo: Some(format!("Payment for {}", invoice.id)),
            invoice_id: Some(invoice.id.clone()),
        })
        .collect()
}

fn expense_transactions(year_start: DateTime<Utc>) -> Vec<MoneyTransaction> {
    (0..EXPENSE_COUNT)
        .map(|i| {
            let (vendor, category, base) = cycle(&EXPENSE_SOURCES, i);
            MoneyTransaction {
                id: format!("txn_exp_{:03}", i + 1),
                kind: TransactionKind::Expense,
                amount: base + 15.0 * (i % 6) as f64,
                date: year_start + Duration::days(3 + 10 * i as i64),
                client_id: None,
                vendor: Some(vendor.to_string()),
                category: Some(category.to_string()),
                memo: None,
                invoice_id: None,
            }
        })
        .collect()
}

fn build_budgets() -> Vec<Budget> {
    BUDGET_LIMITS
        .iter()
        .enumerate()
        .map(|(i, (category, limit))| Budget {
            id: format!("bud_{:02}", i + 1),
            category: category.to_string(),
            limit: *limit,
            spent: 0.0,
        })
        .collect()
}

fn build_cash_flow(transactions: &[MoneyTransaction], year: i32) -> Vec<CashFlowPoint> {
    let mut points: Vec<CashFlowPoint> = MONTH_LABELS
        .iter()
        .map(|label| CashFlowPoint {
            label: label.to_string(),
            inflow: 0.0,
            outflow: 0.0,
        })
        .collect();

    for txn in transactions.iter().filter(|txn| txn.date.year() == year) {
        let month = txn.date.month0() as usize;
        if let Some(point) = points.get_mut(month) {
            match txn.kind {
                TransactionKind::Income => point.inflow += txn.amount,
                TransactionKind::Expense => point.outflow += txn.amount,
            }
        }
    }
    points
}

fn project_progress(status: ProjectStatus, index: usize) -> f64 {
    match status {
        ProjectStatus::Done => 1.0,
        ProjectStatus::Doing => clamp01(0.35 + 0.12 * (index % 5) as f64),
        ProjectStatus::Todo => clamp01(0.05 + 0.1 * (index % 4) as f64),
    }
}

fn build_projects(clients: &[Client], now: DateTime<Utc>) -> Vec<Project> {
    const STATUSES: [ProjectStatus; 3] =
        [ProjectStatus::Doing, ProjectStatus::Todo, ProjectStatus::Done];

    (0..PROJECT_COUNT)
        .filter_map(|i| {
            let client = pick(clients, i)?;
            let status = cycle(&STATUSES, i);
            Some(Project {
                id: format!("prj_{:02}", i + 1),
                client_id: client.id.clone(),
                title: cycle(&PROJECT_TITLES, i).to_string(),
                status,
                progress: project_progress(status, i),
                deadline: now + Duration::days(10 + 9 * i as i64),
            })
        })
        .collect()
}

fn task_status(index: usize) -> TaskStatus {
    match index % 6 {
        2 => TaskStatus::Blocked,
        4 | 5 => TaskStatus::Done,
        _ => TaskStatus::Open,
    }
}

fn build_tasks(projects: &[Project], now: DateTime<Utc>) -> Vec<Task> {
    (0..TASK_COUNT)
        .map(|i| {
            let project = pick(projects, i);
            let base_title = cycle(&TASK_TITLES, i);
            let title = match project {
                Some(project) => format!("{}: {}", base_title, project.title),
                None => base_title.to_string(),
            };
            Task {
                id: format!("tsk_{:02}", i + 1),
                title,
                status: task_status(i),
                due: now + Duration::days(2 * i as i64 - 3),
                client_id: project.map(|project| project.client_id.clone()),
                project_id: project.map(|project| project.id.clone()),
            }
        })
        .collect()
}

fn build_calendar(tasks: &[Task]) -> Vec<CalendarEvent> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.status != TaskStatus::Done)
        .map(|(i, task)| {
            let hour = 9 + (i % 6) as u32;
            let start = task
                .due
                .date_naive()
                .and_hms_opt(hour, 0, 0)
                .map(|naive| naive.and_utc())
                .unwrap_or(task.due);
            CalendarEvent {
                id: format!("evt_{}", task.id),
                title: task.title.clone(),
                start,
                task_id: task.id.clone(),
            }
        })
        .collect()
}

fn build_compliance_forms(now: DateTime<Utc>) -> Vec<ComplianceForm> {
    COMPLIANCE_FORMS
        .iter()
        .enumerate()
        .map(|(i, (name, status, days))| ComplianceForm {
            id: format!("frm_{:02}", i + 1),
            name: name.to_string(),
            status: *status,
            due_at: now + Duration::days(*days),
        })
        .collect()
}

fn build_audit_log(now: DateTime<Utc>) -> Vec<AuditLogEntry> {
    AUDIT_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| AuditLogEntry {
            id: format!("log_{:02}", i + 1),
            at: now - Duration::hours(1 + 7 * i as i64),
            action: action.to_string(),
        })
        .collect()
}

fn build_marketplace() -> Vec<MarketplacePack> {
    MARKETPLACE_PACKS
        .iter()
        .enumerate()
        .map(|(i, (kind, name, price, description))| MarketplacePack {
            id: format!("pack_{:02}", i + 1),
            kind: *kind,
            name: name.to_string(),
            price_label: price.to_string(),
            description: description.to_string(),
        })
        .collect()
}
