//! Compliance: filing countdown, estimated tax and the audit log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::money::{tax_estimate, totals};
use crate::dataset::Dataset;
use crate::model::{AuditLogEntry, ComplianceForm, FormStatus};

/// Label used when there is no form to count down to.
pub const DEFAULT_FILING_LABEL: &str = "Quarterly Estimated Tax";

/// Fixed share of the estimated tax assumed already paid.
pub const TAX_PAID_RATIO: f64 = 0.65;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceOverview {
    pub open_items: usize,
    pub next_filing_label: String,
    pub next_filing_due: DateTime<Utc>,
    pub days_remaining: i64,
    pub estimated_tax_due: f64,
    pub estimated_tax_paid: f64,
}

/// The form with the earliest due date; ties keep the earlier form.
pub fn next_filing(forms: &[ComplianceForm]) -> Option<&ComplianceForm> {
    forms.iter().min_by_key(|form| form.due_at)
}

/// Whole days from `now` until `due`, rounded up and never negative.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let days = ((due - now).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil();
    days.max(0.0) as i64
}

pub fn overview(data: &Dataset, now: DateTime<Utc>) -> ComplianceOverview {
    let open_items = data
        .compliance_forms
        .iter()
        .filter(|form| form.status != FormStatus::Complete)
        .count();

    let next = next_filing(&data.compliance_forms);
    let next_filing_label = next
        .map(|form| form.name.clone())
        .unwrap_or_else(|| DEFAULT_FILING_LABEL.to_string());
    let next_filing_due = next.map(|form| form.due_at).unwrap_or(now);

    let estimated_tax_due = tax_estimate(totals(&data.transactions).profit());

    ComplianceOverview {
        open_items,
        next_filing_label,
        next_filing_due,
        days_remaining: days_until(next_filing_due, now),
        estimated_tax_due,
        estimated_tax_paid: (estimated_tax_due * TAX_PAID_RATIO).round(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormRow {
    pub id: String,
    pub name: String,
    pub status: FormStatus,
    pub due_at: DateTime<Utc>,
    pub days_remaining: i64,
}

/// Compliance forms ordered by due date.
pub fn forms(data: &Dataset, now: DateTime<Utc>) -> Vec<FormRow> {
    let mut rows: Vec<FormRow> = data
        .compliance_forms
        .iter()
        .map(|form| FormRow {
            id: form.id.clone(),
            name: form.name.clone(),
            status: form.status,
            due_at: form.due_at,
            days_remaining: days_until(form.due_at, now),
        })
        .collect();
    rows.sort_by_key(|row| row.due_at);
    rows
}

/// Audit log, newest first.
pub fn audit_log(data: &Dataset) -> Vec<AuditLogEntry> {
    let mut entries = data.audit_log.clone();
    entries.sort_by(|a, b| b.at.cmp(&a.at));
    entries
}
