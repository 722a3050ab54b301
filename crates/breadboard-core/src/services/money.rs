//! Money: income, expenses, tax reserve, invoices, budgets and cash flow.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::client_name;
use crate::dataset::Dataset;
use crate::model::{CashFlowPoint, InvoiceStatus, MoneyTransaction, TransactionKind};

/// Share of profit set aside for taxes.
pub const TAX_RATE: f64 = 0.25;

/// Income and expense sums over a transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Sum income and expenses. Shared by every service that needs profit.
pub fn totals(transactions: &[MoneyTransaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut acc, txn| {
            match txn.kind {
                TransactionKind::Income => acc.income += txn.amount,
                TransactionKind::Expense => acc.expenses += txn.amount,
            }
            acc
        })
}

/// Tax set aside for a given profit: never negative, whole dollars.
pub fn tax_estimate(profit: f64) -> f64 {
    (profit * TAX_RATE).max(0.0).round()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyOverview {
    pub income_ytd: f64,
    pub expenses_ytd: f64,
    pub profit_ytd: f64,
    pub tax_reserve: f64,
    pub outstanding_invoices: usize,
    pub overdue_invoices: usize,
    pub outstanding_amount: f64,
}

pub fn overview(data: &Dataset) -> MoneyOverview {
    let totals = totals(&data.transactions);
    let profit = totals.profit();

    let mut outstanding_invoices = 0;
    let mut overdue_invoices = 0;
    let mut outstanding_amount = 0.0;
    for invoice in data.invoices.iter().filter(|i| i.status.is_outstanding()) {
        outstanding_invoices += 1;
        outstanding_amount += invoice.amount;
        if invoice.status == InvoiceStatus::Overdue {
            overdue_invoices += 1;
        }
    }

    MoneyOverview {
        income_ytd: totals.income,
        expenses_ytd: totals.expenses,
        profit_ytd: profit,
        tax_reserve: tax_estimate(profit),
        outstanding_invoices,
        overdue_invoices,
        outstanding_amount,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeRow {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub client_name: String,
    pub invoice_id: Option<String>,
    pub memo: Option<String>,
}

/// Income transactions with the paying client's name resolved.
pub fn income_transactions(data: &Dataset) -> Vec<IncomeRow> {
    data.transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Income)
        .map(|txn| IncomeRow {
            id: txn.id.clone(),
            date: txn.date,
            amount: txn.amount,
            client_name: client_name(data, txn.client_id.as_deref()),
            invoice_id: txn.invoice_id.clone(),
            memo: txn.memo.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub vendor: String,
    pub category: String,
}

pub fn expense_transactions(data: &Dataset) -> Vec<ExpenseRow> {
    data.transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Expense)
        .map(|txn| ExpenseRow {
            id: txn.id.clone(),
            date: txn.date,
            amount: txn.amount,
            vendor: txn.vendor.clone().unwrap_or_else(|| super::PLACEHOLDER.to_string()),
            category: txn
                .category
                .clone()
                .unwrap_or_else(|| super::PLACEHOLDER.to_string()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub id: String,
    pub client_name: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Invoices, optionally restricted to one status.
pub fn invoices(data: &Dataset, status: Option<InvoiceStatus>) -> Vec<InvoiceRow> {
    data.invoices
        .iter()
        .filter(|invoice| status.map_or(true, |wanted| invoice.status == wanted))
        .map(|invoice| InvoiceRow {
            id: invoice.id.clone(),
            client_name: client_name(data, Some(&invoice.client_id)),
            amount: invoice.amount,
            status: invoice.status,
            issued_at: invoice.issued_at,
            due_at: invoice.due_at,
            paid_at: invoice.paid_at,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    /// Spent over limit; above 1.0 when over budget
    pub utilization: f64,
}

pub fn budgets(data: &Dataset) -> Vec<BudgetRow> {
    data.budgets
        .iter()
        .map(|budget| BudgetRow {
            category: budget.category.clone(),
            limit: budget.limit,
            spent: budget.spent,
            remaining: budget.limit - budget.spent,
            utilization: if budget.limit > 0.0 {
                budget.spent / budget.limit
            } else {
                0.0
            },
        })
        .collect()
}

pub fn cash_flow(data: &Dataset) -> Vec<CashFlowPoint> {
    data.cash_flow.clone()
}
