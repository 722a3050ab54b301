//! Client relationship views: client summaries, proposals and pipeline.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::client_name;
use crate::dataset::Dataset;
use crate::model::{ClientStatus, InvoiceStatus, ProposalStatus, RiskLevel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub status: ClientStatus,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    pub last_touch_days_ago: u32,
    /// Largest paid invoice, 0 when the client has never paid
    pub last_invoice_amount: f64,
    pub outstanding_amount: f64,
    pub open_proposals: usize,
}

/// One summary per client, in client order.
pub fn clients(data: &Dataset) -> Vec<ClientSummary> {
    let mut max_paid: HashMap<&str, f64> = HashMap::new();
    let mut outstanding: HashMap<&str, f64> = HashMap::new();
    for invoice in &data.invoices {
        let client_id = invoice.client_id.as_str();
        if invoice.status == InvoiceStatus::Paid {
            let best = max_paid.entry(client_id).or_insert(0.0);
            *best = best.max(invoice.amount);
        } else if invoice.status.is_outstanding() {
            *outstanding.entry(client_id).or_insert(0.0) += invoice.amount;
        }
    }

    let mut open_proposals: HashMap<&str, usize> = HashMap::new();
    for proposal in data.proposals.iter().filter(|p| p.status.is_open()) {
        *open_proposals.entry(proposal.client_id.as_str()).or_insert(0) += 1;
    }

    data.clients
        .iter()
        .map(|client| {
            let id = client.id.as_str();
            ClientSummary {
                id: client.id.clone(),
                name: client.name.clone(),
                status: client.status,
                risk_level: client.risk_level,
                risk_reason: client.risk_reason.clone(),
                last_touch_days_ago: client.last_touch_days_ago,
                last_invoice_amount: max_paid.get(id).copied().unwrap_or(0.0),
                outstanding_amount: outstanding.get(id).copied().unwrap_or(0.0),
                open_proposals: open_proposals.get(id).copied().unwrap_or(0),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalRow {
    pub id: String,
    pub client_name: String,
    pub title: String,
    pub status: ProposalStatus,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// Proposals, newest first.
pub fn proposals(data: &Dataset) -> Vec<ProposalRow> {
    let mut rows: Vec<ProposalRow> = data
        .proposals
        .iter()
        .map(|proposal| ProposalRow {
            id: proposal.id.clone(),
            client_name: client_name(data, Some(&proposal.client_id)),
            title: proposal.title.clone(),
            status: proposal.status,
            value: proposal.value,
            created_at: proposal.created_at,
        })
        .collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStage {
    pub status: ProposalStatus,
    pub count: usize,
    pub value: f64,
}

/// Proposal count and value per status, in pipeline order.
pub fn pipeline(data: &Dataset) -> Vec<PipelineStage> {
    [
        ProposalStatus::Draft,
        ProposalStatus::Sent,
        ProposalStatus::Accepted,
        ProposalStatus::Rejected,
    ]
    .into_iter()
    .map(|status| {
        let matching = data.proposals.iter().filter(|p| p.status == status);
        let (count, value) = matching.fold((0, 0.0), |(n, v), p| (n + 1, v + p.value));
        PipelineStage {
            status,
            count,
            value,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::build;
    use chrono::TimeZone;

    fn data() -> Dataset {
        build(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_last_invoice_amount_is_max_paid() {
        let data = data();
        for summary in clients(&data) {
            let expected = data
                .invoices
                .iter()
                .filter(|i| i.client_id == summary.id && i.status == InvoiceStatus::Paid)
                .map(|i| i.amount)
                .fold(0.0, f64::max);
            assert_eq!(summary.last_invoice_amount, expected);
        }
    }

    #[test]
    fn test_client_without_paid_invoices_reports_zero() {
        let mut data = data();
        data.invoices.retain(|i| i.client_id != "cli_01");
        let summaries = clients(&data);
        let first = summaries.iter().find(|s| s.id == "cli_01").unwrap();
        assert_eq!(first.last_invoice_amount, 0.0);
        assert_eq!(first.outstanding_amount, 0.0);
    }

    #[test]
    fn test_pipeline_totals_match_proposals() {
        let data = data();
        let stages = pipeline(&data);
        assert_eq!(stages.len(), 4);
        let count: usize = stages.iter().map(|s| s.count).sum();
        assert_eq!(count, data.proposals.len());
    }

    #[test]
    fn test_proposals_newest_first() {
        let rows = proposals(&data());
        assert!(rows.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert!(rows.iter().all(|r| r.value > 0.0));
    }
}
