use chrono::{DateTime, TimeZone, Utc};

use breadboard_core::dataset::{build, recompute_budget_spent, Dataset};
use breadboard_core::model::{InvoiceStatus, MoneyTransaction, TransactionKind};
use breadboard_core::services::{compliance, insights, money, work, PLACEHOLDER};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn txn(id: &str, kind: TransactionKind, amount: f64) -> MoneyTransaction {
    MoneyTransaction {
        id: id.to_string(),
        kind,
        amount,
        date: anchor(),
        client_id: None,
        vendor: None,
        category: None,
        memo: None,
        invoice_id: None,
    }
}

#[test]
fn test_build_is_deterministic() {
    let first = build(anchor());
    let second = build(anchor());
    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().unwrap(),
        second.to_json_pretty().unwrap()
    );
}

#[test]
fn test_different_anchors_differ() {
    let june = build(anchor());
    let march = build(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    assert_ne!(june.generated_at, march.generated_at);
    assert_ne!(june.tasks, march.tasks);
}

#[test]
fn test_paid_invoices_have_exactly_one_income_transaction() {
    let data = build(anchor());
    for invoice in &data.invoices {
        let matching: Vec<_> = data
            .transactions
            .iter()
            .filter(|t| t.invoice_id.as_deref() == Some(invoice.id.as_str()))
            .collect();
        if invoice.status == InvoiceStatus::Paid {
            assert_eq!(matching.len(), 1, "{} should have one payment", invoice.id);
            assert_eq!(matching[0].kind, TransactionKind::Income);
            assert_eq!(matching[0].amount, invoice.amount);
            assert!(invoice.paid_at.is_some());
        } else {
            assert!(matching.is_empty(), "{} is not paid", invoice.id);
            assert!(invoice.paid_at.is_none());
        }
    }
}

#[test]
fn test_every_transaction_is_positive_and_income_names_its_invoice() {
    for month in 1..=12 {
        let data = build(Utc.with_ymd_and_hms(2025, month, 10, 9, 0, 0).unwrap());
        assert!(!data.transactions.is_empty());
        for transaction in &data.transactions {
            assert!(transaction.amount > 0.0, "{} has amount {}", transaction.id, transaction.amount);
            if transaction.kind == TransactionKind::Income {
                let invoice_id = transaction.invoice_id.as_deref();
                assert!(invoice_id.is_some(), "{} has no invoice", transaction.id);
                assert!(data.invoices.iter().any(|inv| Some(inv.id.as_str()) == invoice_id));
            }
        }
    }
}

#[test]
fn test_budget_spent_matches_recompute() {
    let data = build(anchor());
    let mut budgets = data.budgets.clone();
    recompute_budget_spent(&mut budgets, &data.transactions);
    assert_eq!(budgets, data.budgets);

    recompute_budget_spent(&mut budgets, &data.transactions);
    assert_eq!(budgets, data.budgets);

    for budget in &data.budgets {
        let sum: f64 = data
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .filter(|t| t.category.as_deref() == Some(budget.category.as_str()))
            .map(|t| t.amount)
            .sum();
        assert_eq!(budget.spent, sum, "{}", budget.category);
    }
}

#[test]
fn test_money_and_compliance_agree_on_tax() {
    let data = build(anchor());
    let overview = money::overview(&data);
    let compliance = compliance::overview(&data, anchor());
    assert_eq!(
        overview.profit_ytd,
        overview.income_ytd - overview.expenses_ytd
    );
    assert_eq!(compliance.estimated_tax_due, money::tax_estimate(overview.profit_ytd));
    assert_eq!(compliance.estimated_tax_due, overview.tax_reserve);
}

#[test]
fn test_scores_and_countdowns_stay_in_bounds() {
    for month in 1..=12 {
        let now = Utc.with_ymd_and_hms(2025, month, 10, 8, 0, 0).unwrap();
        let data = build(now);

        let insights = insights::overview(&data);
        assert!(insights.profitability_score <= 100);
        assert!((40..=95).contains(&insights.efficiency_score));

        assert!(compliance::overview(&data, now).days_remaining >= 0);
        for row in compliance::forms(&data, now) {
            assert!(row.days_remaining >= 0);
        }
        for project in &data.projects {
            assert!((0.0..=1.0).contains(&project.progress));
        }
        let average = work::overview(&data, now).average_progress;
        assert!((0.0..=1.0).contains(&average));
    }
}

#[test]
fn test_profit_scenario() {
    let data = Dataset {
        transactions: vec![
            txn("txn_a", TransactionKind::Income, 50_000.0),
            txn("txn_b", TransactionKind::Expense, 30_000.0),
        ],
        ..Dataset::default()
    };
    let overview = money::overview(&data);
    assert_eq!(overview.profit_ytd, 20_000.0);
    assert_eq!(overview.tax_reserve, 5_000.0);
}

#[test]
fn test_ninth_invoice_is_overdue() {
    let data = build(anchor());
    assert_eq!(data.invoices.len(), 72);
    let invoice = &data.invoices[8];
    assert_eq!(invoice.id, "inv_009");
    assert_eq!(invoice.status, InvoiceStatus::Overdue);
}

#[test]
fn test_unknown_client_shows_placeholder() {
    let mut data = build(anchor());
    let first_income = data
        .transactions
        .iter_mut()
        .find(|t| t.kind == TransactionKind::Income)
        .unwrap();
    first_income.client_id = Some("cli_missing".to_string());
    let id = first_income.id.clone();

    let rows = money::income_transactions(&data);
    let row = rows.iter().find(|r| r.id == id).unwrap();
    assert_eq!(row.client_name, PLACEHOLDER);
    assert_eq!(row.client_name, "\u{2014}");
}

#[test]
fn test_empty_forms_use_default_filing() {
    let data = Dataset {
        generated_at: anchor(),
        ..Dataset::default()
    };
    let overview = compliance::overview(&data, anchor());
    assert_eq!(overview.next_filing_label, "Quarterly Estimated Tax");
    assert_eq!(overview.days_remaining, 0);
    assert_eq!(overview.open_items, 0);
}

#[test]
fn test_empty_dataset_yields_zero_aggregates() {
    let data = Dataset::default();
    let money = money::overview(&data);
    assert_eq!(money.profit_ytd, 0.0);
    assert_eq!(money.tax_reserve, 0.0);

    let insights = insights::overview(&data);
    assert_eq!(insights.profitability_score, 0);
    assert_eq!(insights.efficiency_score, 65);
    assert!(work::overview(&data, anchor()).average_progress.abs() < f64::EPSILON);
}
