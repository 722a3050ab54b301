//! Insights: profitability and efficiency scores, revenue trend and suggestions.

use chrono::Datelike;
use serde::Serialize;

use super::format_currency;
use super::money::{tax_estimate, totals};
use crate::dataset::sources::MONTH_LABELS;
use crate::dataset::{clamp01, Dataset};
use crate::model::{Client, ClientStatus, InvoiceStatus, TaskStatus};

const EFFICIENCY_BASE: i64 = 65;
const EFFICIENCY_MIN: i64 = 40;
const EFFICIENCY_MAX: i64 = 95;

/// Months shown in the revenue trend series.
pub const TREND_POINTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A data-driven recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub title: String,
    pub detail: String,
    /// Client the suggestion is about, when it names one
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsOverview {
    pub profitability_score: u8,
    pub efficiency_score: u8,
    pub revenue_trend: Trend,
    /// Tasks not yet done (blocked included)
    pub unfinished_tasks: usize,
    pub blocked_tasks: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Profit as a share of income, scaled to `0..=100`.
pub fn profitability_score(profit: f64, income: f64) -> u8 {
    (clamp01(profit / income.max(1.0)) * 100.0).round() as u8
}

/// Workload score in `40..=95`.
pub fn efficiency_score(open_tasks: usize, blocked_tasks: usize) -> u8 {
    let delta = ((open_tasks as f64 - blocked_tasks as f64) / 2.0).round() as i64;
    (EFFICIENCY_BASE + delta).clamp(EFFICIENCY_MIN, EFFICIENCY_MAX) as u8
}

/// At-risk client whose reason mentions `keyword`, else the one at `fallback`.
///
/// Returns `None` when nothing matches and the fallback index is out of range.
pub fn at_risk_client<'a>(
    at_risk: &[&'a Client],
    keyword: &str,
    fallback: usize,
) -> Option<&'a Client> {
    at_risk
        .iter()
        .find(|client| client.risk_reason.to_lowercase().contains(keyword))
        .or_else(|| at_risk.get(fallback))
        .copied()
}

pub fn overview(data: &Dataset) -> InsightsOverview {
    let totals = totals(&data.transactions);
    let profit = totals.profit();

    let unfinished_tasks = data
        .tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Done)
        .count();
    let blocked_tasks = data
        .tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Blocked)
        .count();

    InsightsOverview {
        profitability_score: profitability_score(profit, totals.income),
        efficiency_score: efficiency_score(unfinished_tasks, blocked_tasks),
        revenue_trend: if profit >= 0.0 { Trend::Up } else { Trend::Down },
        unfinished_tasks,
        blocked_tasks,
        suggestions: suggestions(data, profit, blocked_tasks),
    }
}

fn suggestions(data: &Dataset, profit: f64, blocked_tasks: usize) -> Vec<Suggestion> {
    let at_risk: Vec<&Client> = data
        .clients
        .iter()
        .filter(|client| client.status == ClientStatus::AtRisk)
        .collect();

    let mut out = Vec::new();

    if let Some(client) = at_risk_client(&at_risk, "late", 0) {
        out.push(Suggestion {
            title: format!("Tighten payment terms with {}", client.name),
            detail: format!(
                "{}. Ask for a deposit on the next invoice.",
                client.risk_reason
            ),
            client_id: Some(client.id.clone()),
        });
    }

    if let Some(client) = at_risk_client(&at_risk, "dispute", 1) {
        out.push(Suggestion {
            title: format!("Schedule a scope review with {}", client.name),
            detail: format!(
                "{}. Agree on deliverables before more work ships.",
                client.risk_reason
            ),
            client_id: Some(client.id.clone()),
        });
    }

    out.push(Suggestion {
        title: format!(
            "Set aside {} for taxes",
            format_currency(tax_estimate(profit))
        ),
        detail: format!(
            "That is 25% of {} year-to-date profit.",
            format_currency(profit)
        ),
        client_id: None,
    });

    let overdue: Vec<f64> = data
        .invoices
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Overdue)
        .map(|invoice| invoice.amount)
        .collect();
    if !overdue.is_empty() {
        out.push(Suggestion {
            title: format!("Chase {} overdue invoices", overdue.len()),
            detail: format!(
                "{} is past its due date.",
                format_currency(overdue.iter().sum())
            ),
            client_id: None,
        });
    }

    if blocked_tasks > 0 {
        out.push(Suggestion {
            title: format!("Unblock {} tasks", blocked_tasks),
            detail: "Blocked work drags the efficiency score down.".to_string(),
            client_id: None,
        });
    }

    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// Illustrative monthly revenue series ending at the dataset's anchor month.
///
/// Each point is `income / 12` scaled by `0.82 + i * 0.06`.
pub fn revenue_trend(data: &Dataset) -> Vec<TrendPoint> {
    let monthly = totals(&data.transactions).income / 12.0;
    let anchor_month = data.generated_at.month0() as usize;

    (0..TREND_POINTS)
        .map(|i| {
            let month = (anchor_month + 12 + i + 1 - TREND_POINTS) % 12;
            TrendPoint {
                label: MONTH_LABELS[month].to_string(),
                value: (monthly * (0.82 + i as f64 * 0.06)).round(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::build;
    use crate::model::RiskLevel;
    use chrono::{TimeZone, Utc};

    fn client(id: &str, reason: &str) -> Client {
        Client {
            id: id.to_string(),
            name: format!("Client {}", id),
            status: ClientStatus::AtRisk,
            risk_level: RiskLevel::High,
            risk_reason: reason.to_string(),
            last_touch_days_ago: 5,
        }
    }

    #[test]
    fn test_profitability_bounds() {
        assert_eq!(profitability_score(20_000.0, 50_000.0), 40);
        assert_eq!(profitability_score(-5_000.0, 50_000.0), 0);
        assert_eq!(profitability_score(0.5, 0.0), 50);
        assert_eq!(profitability_score(10.0, 0.0), 100);
    }

    #[test]
    fn test_efficiency_bounds() {
        assert_eq!(efficiency_score(12, 3), 70);
        assert_eq!(efficiency_score(0, 0), 65);
        assert_eq!(efficiency_score(200, 0), 95);
        assert_eq!(efficiency_score(0, 200), 40);
    }

    #[test]
    fn test_at_risk_lookup_prefers_keyword() {
        let a = client("a", "Open dispute over milestone scope");
        let b = client("b", "Paid the last two invoices late");
        let at_risk = vec![&a, &b];
        assert_eq!(at_risk_client(&at_risk, "late", 0).unwrap().id, "b");
        assert_eq!(at_risk_client(&at_risk, "dispute", 1).unwrap().id, "a");
    }

    #[test]
    fn test_at_risk_lookup_fallback_out_of_range_is_absent() {
        let a = client("a", "Paid the last two invoices late");
        let at_risk = vec![&a];
        assert!(at_risk_client(&at_risk, "dispute", 1).is_none());
        assert_eq!(at_risk_client(&at_risk, "dispute", 0).unwrap().id, "a");
        assert!(at_risk_client(&[], "late", 0).is_none());
    }

    #[test]
    fn test_suggestions_skip_missing_client() {
        let mut data = build(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        data.clients.retain(|c| c.risk_reason != "Open dispute over milestone scope");
        let insights = overview(&data);
        assert!(!insights
            .suggestions
            .iter()
            .any(|s| s.title.starts_with("Schedule a scope review")));
        assert!(insights
            .suggestions
            .iter()
            .any(|s| s.title.starts_with("Tighten payment terms")));
    }

    #[test]
    fn test_overview_on_built_dataset() {
        let data = build(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        let insights = overview(&data);
        assert_eq!(insights.unfinished_tasks, 12);
        assert_eq!(insights.blocked_tasks, 3);
        assert_eq!(insights.efficiency_score, 70);
        assert_eq!(insights.revenue_trend, Trend::Up);
        assert_eq!(insights.suggestions.len(), 5);
        assert!(insights.profitability_score <= 100);
    }

    #[test]
    fn test_unfinished_tasks_json_name_differs_from_work() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let data = build(now);
        let insights = serde_json::to_value(overview(&data)).unwrap();
        let work = serde_json::to_value(crate::services::work::overview(&data, now)).unwrap();
        assert_eq!(insights["unfinished_tasks"], 12);
        assert!(insights.get("open_tasks").is_none());
        assert_eq!(work["open_tasks"], 9);
    }

    #[test]
    fn test_revenue_trend_ladder() {
        let data = build(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        let trend = revenue_trend(&data);
        let labels: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Feb", "Mar", "Apr", "May", "Jun"]);

        let monthly = totals(&data.transactions).income / 12.0;
        assert_eq!(trend[0].value, (monthly * 0.82).round());
        assert_eq!(trend[4].value, (monthly * 1.06).round());
    }

    #[test]
    fn test_revenue_trend_wraps_year() {
        let data = build(Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap());
        let labels: Vec<String> = revenue_trend(&data).into_iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb"]);
    }
}
