//! Dashboard widget catalog.
//!
//! Each [`WidgetKind`] maps to one entry in [`CATALOG`]: a title and a
//! renderer that turns API answers into a [`Panel`]. The host picks a
//! [`Density`]: compact panels carry the headline numbers only, full panels
//! add the supporting rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::DashboardApi;
use crate::error::BreadboardError;
use crate::model::{ClientStatus, InvoiceStatus, TaskStatus};
use crate::services::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Money,
    CashFlow,
    Invoices,
    Clients,
    Work,
    Compliance,
    Insights,
    RevenueTrend,
    Marketplace,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 9] = [
        WidgetKind::Money,
        WidgetKind::CashFlow,
        WidgetKind::Invoices,
        WidgetKind::Clients,
        WidgetKind::Work,
        WidgetKind::Compliance,
        WidgetKind::Insights,
        WidgetKind::RevenueTrend,
        WidgetKind::Marketplace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::CashFlow => "cash_flow",
            Self::Invoices => "invoices",
            Self::Clients => "clients",
            Self::Work => "work",
            Self::Compliance => "compliance",
            Self::Insights => "insights",
            Self::RevenueTrend => "revenue_trend",
            Self::Marketplace => "marketplace",
        }
    }

    /// Catalog entry for this kind.
    pub fn spec(&self) -> &'static WidgetSpec {
        // Every kind has exactly one entry.
        CATALOG
            .iter()
            .find(|spec| spec.kind == *self)
            .unwrap_or(&CATALOG[0])
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = BreadboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| BreadboardError::Parse(format!("Unknown widget \"{}\"", s)))
    }
}

/// How much room the host gives a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
    #[default]
    Full,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact)
    }
}

impl FromStr for Density {
    type Err = BreadboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            _ => Err(BreadboardError::Parse(format!(
                "Unknown density \"{}\" (use compact or full)",
                s
            ))),
        }
    }
}

/// One label/value row of a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLine {
    pub label: String,
    pub value: String,
}

/// Rendered widget, ready for a host to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub kind: WidgetKind,
    pub title: String,
    pub density: Density,
    pub lines: Vec<PanelLine>,
}

impl Panel {
    fn new(kind: WidgetKind, density: Density) -> Self {
        Self {
            kind,
            title: kind.spec().title.to_string(),
            density,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.lines.push(PanelLine {
            label: label.into(),
            value: value.into(),
        });
    }
}

type Renderer = fn(&dyn DashboardApi, Density) -> Panel;

/// Catalog entry: display title and renderer for one widget kind.
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub title: &'static str,
    pub render: Renderer,
}

pub static CATALOG: [WidgetSpec; 9] = [
    WidgetSpec {
        kind: WidgetKind::Money,
        title: "Money",
        render: render_money,
    },
    WidgetSpec {
        kind: WidgetKind::CashFlow,
        title: "Cash flow",
        render: render_cash_flow,
    },
    WidgetSpec {
        kind: WidgetKind::Invoices,
        title: "Invoices",
        render: render_invoices,
    },
    WidgetSpec {
        kind: WidgetKind::Clients,
        title: "Clients",
        render: render_clients,
    },
    WidgetSpec {
        kind: WidgetKind::Work,
        title: "Work",
        render: render_work,
    },
    WidgetSpec {
        kind: WidgetKind::Compliance,
        title: "Compliance",
        render: render_compliance,
    },
    WidgetSpec {
        kind: WidgetKind::Insights,
        title: "Insights",
        render: render_insights,
    },
    WidgetSpec {
        kind: WidgetKind::RevenueTrend,
        title: "Revenue trend",
        render: render_revenue_trend,
    },
    WidgetSpec {
        kind: WidgetKind::Marketplace,
        title: "Marketplace",
        render: render_marketplace,
    },
];

/// Render one widget through its catalog entry.
pub fn render(kind: WidgetKind, api: &dyn DashboardApi, density: Density) -> Panel {
    (kind.spec().render)(api, density)
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn render_money(api: &dyn DashboardApi, density: Density) -> Panel {
    let money = api.get_money_overview();
    let mut panel = Panel::new(WidgetKind::Money, density);
    panel.line("Profit YTD", format_currency(money.profit_ytd));
    panel.line("Tax reserve", format_currency(money.tax_reserve));
    if !density.is_compact() {
        panel.line("Income YTD", format_currency(money.income_ytd));
        panel.line("Expenses YTD", format_currency(money.expenses_ytd));
        panel.line(
            "Outstanding",
            format!(
                "{} invoices ({})",
                money.outstanding_invoices,
                format_currency(money.outstanding_amount)
            ),
        );
    }
    panel
}

fn render_cash_flow(api: &dyn DashboardApi, density: Density) -> Panel {
    let points = api.get_cash_flow();
    let mut panel = Panel::new(WidgetKind::CashFlow, density);
    let net: f64 = points.iter().map(|p| p.inflow - p.outflow).sum();
    panel.line("Net", format_currency(net));
    if !density.is_compact() {
        for point in &points {
            panel.line(
                point.label.clone(),
                format!(
                    "in {} / out {}",
                    format_currency(point.inflow),
                    format_currency(point.outflow)
                ),
            );
        }
    }
    panel
}

fn render_invoices(api: &dyn DashboardApi, density: Density) -> Panel {
    let overdue = api.get_invoices(Some(InvoiceStatus::Overdue));
    let mut panel = Panel::new(WidgetKind::Invoices, density);
    let total: f64 = overdue.iter().map(|i| i.amount).sum();
    panel.line("Overdue", format!("{} ({})", overdue.len(), format_currency(total)));
    if !density.is_compact() {
        for invoice in overdue.iter().take(5) {
            panel.line(
                invoice.id.clone(),
                format!("{} {}", invoice.client_name, format_currency(invoice.amount)),
            );
        }
    }
    panel
}

fn render_clients(api: &dyn DashboardApi, density: Density) -> Panel {
    let clients = api.get_clients();
    let mut panel = Panel::new(WidgetKind::Clients, density);
    let at_risk: Vec<_> = clients
        .iter()
        .filter(|c| c.status == ClientStatus::AtRisk)
        .collect();
    panel.line("Clients", clients.len().to_string());
    panel.line("At risk", at_risk.len().to_string());
    if !density.is_compact() {
        for client in at_risk {
            panel.line(client.name.clone(), client.risk_reason.clone());
        }
    }
    panel
}

fn render_work(api: &dyn DashboardApi, density: Density) -> Panel {
    let work = api.get_work_overview();
    let mut panel = Panel::new(WidgetKind::Work, density);
    panel.line("Open tasks", work.open_tasks.to_string());
    panel.line("Due this week", work.due_this_week.to_string());
    if !density.is_compact() {
        panel.line("Blocked", work.blocked_tasks.to_string());
        panel.line("Active projects", work.active_projects.to_string());
        panel.line("Average progress", percent(work.average_progress));
        for task in api.get_tasks(Some(TaskStatus::Blocked)) {
            panel.line("Blocked task", task.title);
        }
    }
    panel
}

fn render_compliance(api: &dyn DashboardApi, density: Density) -> Panel {
    let compliance = api.get_compliance_overview();
    let mut panel = Panel::new(WidgetKind::Compliance, density);
    panel.line(
        "Next filing",
        format!(
            "{} in {} days",
            compliance.next_filing_label, compliance.days_remaining
        ),
    );
    panel.line("Open items", compliance.open_items.to_string());
    if !density.is_compact() {
        panel.line(
            "Estimated tax due",
            format_currency(compliance.estimated_tax_due),
        );
        panel.line(
            "Estimated tax paid",
            format_currency(compliance.estimated_tax_paid),
        );
    }
    panel
}

fn render_insights(api: &dyn DashboardApi, density: Density) -> Panel {
    let insights = api.get_insights_overview();
    let mut panel = Panel::new(WidgetKind::Insights, density);
    panel.line("Profitability", format!("{}/100", insights.profitability_score));
    panel.line("Efficiency", format!("{}/100", insights.efficiency_score));
    if !density.is_compact() {
        panel.line("Revenue trend", insights.revenue_trend.as_str());
        for suggestion in insights.suggestions {
            panel.line("Suggestion", suggestion.title);
        }
    }
    panel
}

fn render_revenue_trend(api: &dyn DashboardApi, density: Density) -> Panel {
    let trend = api.get_revenue_trend();
    let mut panel = Panel::new(WidgetKind::RevenueTrend, density);
    if density.is_compact() {
        if let Some(last) = trend.last() {
            panel.line(last.label.clone(), format_currency(last.value));
        }
    } else {
        for point in trend {
            panel.line(point.label, format_currency(point.value));
        }
    }
    panel
}

fn render_marketplace(api: &dyn DashboardApi, density: Density) -> Panel {
    let mut panel = Panel::new(WidgetKind::Marketplace, density);
    for count in api.get_marketplace_counts() {
        panel.line(
            format!("{} packs", count.kind),
            format!("{} ({} free)", count.count, count.free),
        );
    }
    if !density.is_compact() {
        for pack in api.get_marketplace_packs(None) {
            panel.line(pack.name, pack.price_label);
        }
    }
    panel
}
