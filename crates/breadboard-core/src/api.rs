//! Query surface consumed by state containers.
//!
//! The `DashboardApi` trait mirrors what a remote backend would expose: one
//! `get_*` call per overview or list. `MockApi` answers from the in-memory
//! dataset after an optional artificial delay, so consumers can exercise their
//! loading states without a server.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::dataset::{build, Dataset};
use crate::model::{
    AuditLogEntry, CalendarEvent, CashFlowPoint, InvoiceStatus, MarketplacePack, PackKind,
    TaskStatus,
};
use crate::services::compliance::{self, ComplianceOverview, FormRow};
use crate::services::crm::{self, ClientSummary, PipelineStage, ProposalRow};
use crate::services::insights::{self, InsightsOverview, TrendPoint};
use crate::services::marketplace::{self, KindCount};
use crate::services::money::{self, BudgetRow, ExpenseRow, IncomeRow, InvoiceRow, MoneyOverview};
use crate::services::work::{self, ProjectRow, TaskRow, WorkOverview};

/// Read-only dashboard queries.
///
/// All implementations must ensure:
/// - Calls never mutate the underlying dataset
/// - The same call on the same dataset returns the same value
pub trait DashboardApi {
    /// The dataset every answer is derived from.
    fn dataset(&self) -> &Dataset;

    /// Reference time used for countdowns and "this week" windows.
    fn now(&self) -> DateTime<Utc>;

    // --- Money ---

    fn get_money_overview(&self) -> MoneyOverview;
    fn get_income_transactions(&self) -> Vec<IncomeRow>;
    fn get_expense_transactions(&self) -> Vec<ExpenseRow>;
    fn get_invoices(&self, status: Option<InvoiceStatus>) -> Vec<InvoiceRow>;
    fn get_budgets(&self) -> Vec<BudgetRow>;
    fn get_cash_flow(&self) -> Vec<CashFlowPoint>;

    // --- Clients ---

    fn get_clients(&self) -> Vec<ClientSummary>;
    fn get_proposals(&self) -> Vec<ProposalRow>;
    fn get_pipeline(&self) -> Vec<PipelineStage>;

    // --- Work ---

    fn get_work_overview(&self) -> WorkOverview;
    fn get_projects(&self) -> Vec<ProjectRow>;
    fn get_tasks(&self, status: Option<TaskStatus>) -> Vec<TaskRow>;
    fn get_calendar(&self) -> Vec<CalendarEvent>;

    // --- Compliance ---

    fn get_compliance_overview(&self) -> ComplianceOverview;
    fn get_compliance_forms(&self) -> Vec<FormRow>;
    fn get_audit_log(&self) -> Vec<AuditLogEntry>;

    // --- Insights ---

    fn get_insights_overview(&self) -> InsightsOverview;
    fn get_revenue_trend(&self) -> Vec<TrendPoint>;

    // --- Marketplace ---

    /// Catalog entries, filtered by kind when one is given.
    fn get_marketplace_packs(&self, kind: Option<PackKind>) -> Vec<MarketplacePack>;
    fn get_marketplace_counts(&self) -> Vec<KindCount>;
}

/// In-memory API over a dataset built once at construction.
#[derive(Debug, Clone)]
pub struct MockApi {
    dataset: Dataset,
    latency: Duration,
}

impl MockApi {
    /// Build the dataset anchored on `now` and serve it without delay.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::from_dataset(build(now))
    }

    /// Serve an existing dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            latency: Duration::ZERO,
        }
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn respond<T>(&self, call: &str, answer: impl FnOnce(&Dataset) -> T) -> T {
        trace!(call, latency_ms = self.latency.as_millis() as u64, "API call");
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        answer(&self.dataset)
    }
}

impl DashboardApi for MockApi {
    fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn now(&self) -> DateTime<Utc> {
        self.dataset.generated_at
    }

    fn get_money_overview(&self) -> MoneyOverview {
        self.respond("money_overview", money::overview)
    }

    fn get_income_transactions(&self) -> Vec<IncomeRow> {
        self.respond("income_transactions", money::income_transactions)
    }

    fn get_expense_transactions(&self) -> Vec<ExpenseRow> {
        self.respond("expense_transactions", money::expense_transactions)
    }

    fn get_invoices(&self, status: Option<InvoiceStatus>) -> Vec<InvoiceRow> {
        self.respond("invoices", |data| money::invoices(data, status))
    }

    fn get_budgets(&self) -> Vec<BudgetRow> {
        self.respond("budgets", money::budgets)
    }

    fn get_cash_flow(&self) -> Vec<CashFlowPoint> {
        self.respond("cash_flow", money::cash_flow)
    }

    fn get_clients(&self) -> Vec<ClientSummary> {
        self.respond("clients", crm::clients)
    }

    fn get_proposals(&self) -> Vec<ProposalRow> {
        self.respond("proposals", crm::proposals)
    }

    fn get_pipeline(&self) -> Vec<PipelineStage> {
        self.respond("pipeline", crm::pipeline)
    }

    fn get_work_overview(&self) -> WorkOverview {
        let now = self.now();
        self.respond("work_overview", |data| work::overview(data, now))
    }

    fn get_projects(&self) -> Vec<ProjectRow> {
        let now = self.now();
        self.respond("projects", |data| work::projects(data, now))
    }

    fn get_tasks(&self, status: Option<TaskStatus>) -> Vec<TaskRow> {
        self.respond("tasks", |data| work::tasks(data, status))
    }

    fn get_calendar(&self) -> Vec<CalendarEvent> {
        self.respond("calendar", work::calendar)
    }

    fn get_compliance_overview(&self) -> ComplianceOverview {
        let now = self.now();
        self.respond("compliance_overview", |data| compliance::overview(data, now))
    }

    fn get_compliance_forms(&self) -> Vec<FormRow> {
        let now = self.now();
        self.respond("compliance_forms", |data| compliance::forms(data, now))
    }

    fn get_audit_log(&self) -> Vec<AuditLogEntry> {
        self.respond("audit_log", compliance::audit_log)
    }

    fn get_insights_overview(&self) -> InsightsOverview {
        self.respond("insights_overview", insights::overview)
    }

    fn get_revenue_trend(&self) -> Vec<TrendPoint> {
        self.respond("revenue_trend", insights::revenue_trend)
    }

    fn get_marketplace_packs(&self, kind: Option<PackKind>) -> Vec<MarketplacePack> {
        self.respond("marketplace_packs", |data| marketplace::packs(data, kind))
    }

    fn get_marketplace_counts(&self) -> Vec<KindCount> {
        self.respond("marketplace_counts", marketplace::counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Instant;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_trait_is_object_safe() {
        let api = MockApi::new(anchor());
        let dynamic: &dyn DashboardApi = &api;
        assert_eq!(dynamic.now(), anchor());
    }

    #[test]
    fn test_calls_are_idempotent() {
        let api = MockApi::new(anchor());
        assert_eq!(api.get_money_overview(), api.get_money_overview());
        assert_eq!(api.get_insights_overview(), api.get_insights_overview());
        assert_eq!(api.get_clients(), api.get_clients());
    }

    #[test]
    fn test_latency_is_applied() {
        let api = MockApi::new(anchor()).with_latency(Duration::from_millis(20));
        let started = Instant::now();
        let _ = api.get_budgets();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_marketplace_filter_passthrough() {
        let api = MockApi::new(anchor());
        let widgets = api.get_marketplace_packs(Some(PackKind::Widget));
        assert!(widgets.iter().all(|p| p.kind == PackKind::Widget));
    }
}
