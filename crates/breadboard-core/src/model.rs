//! Core data types for the Bread Board dataset.
//!
//! Every record is an immutable value produced once by the dataset builder.
//! Cross-references are by string id (`client_id`, `invoice_id`, ...).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BreadboardError;

/// Relationship state of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    AtRisk,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::AtRisk => "at_risk",
            Self::Inactive => "inactive",
        }
    }
}

/// Risk classification derived from [`ClientStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A client of the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub status: ClientStatus,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    pub last_touch_days_ago: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the proposal is still in play.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Draft | Self::Sent)
    }
}

/// A proposal sent (or about to be sent) to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub status: ProposalStatus,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Due,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Due => "due",
            Self::Overdue => "overdue",
        }
    }

    /// Whether money is still expected for this invoice.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Self::Due | Self::Overdue)
    }
}

/// An invoice issued to a client.
///
/// `paid_at` is set if and only if `status` is [`InvoiceStatus::Paid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub client_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A money movement. Income always carries the invoice it settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub client_id: Option<String>,
    pub vendor: Option<String>,
    pub category: Option<String>,
    pub memo: Option<String>,
    pub invoice_id: Option<String>,
}

/// Spending limit for an expense category.
///
/// `spent` is always derived from the transaction list, see
/// [`crate::dataset::recompute_budget_spent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

/// One period of the cash-flow chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub label: String,
    pub inflow: f64,
    pub outflow: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Todo,
    Doing,
    Done,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

/// A client project. `progress` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub progress: f64,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    Blocked,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub due: DateTime<Utc>,
    pub client_id: Option<String>,
    pub project_id: Option<String>,
}

/// Calendar slot derived from a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub task_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }
}

/// A filing or compliance obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceForm {
    pub id: String,
    pub name: String,
    pub status: FormStatus,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub at: DateTime<Utc>,
    pub action: String,
}

/// Kind of marketplace catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackKind {
    Theme,
    Preset,
    Widget,
}

impl PackKind {
    pub const ALL: [PackKind; 3] = [PackKind::Theme, PackKind::Preset, PackKind::Widget];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Preset => "preset",
            Self::Widget => "widget",
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackKind {
    type Err = BreadboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PackKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                BreadboardError::Parse(format!(
                    "Unknown pack kind \"{}\" (use theme, preset or widget)",
                    s
                ))
            })
    }
}

/// A catalog entry in the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplacePack {
    pub id: String,
    pub kind: PackKind,
    pub name: String,
    pub price_label: String,
    pub description: String,
}
