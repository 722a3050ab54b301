//! Fixed source tables the builder cycles through.

use crate::model::{FormStatus, PackKind, ProposalStatus};

pub const CLIENT_COUNT: usize = 12;
pub const PROPOSAL_COUNT: usize = 10;
pub const INVOICE_COUNT: usize = 72;
pub const EXPENSE_COUNT: usize = 36;
pub const PROJECT_COUNT: usize = 8;
pub const TASK_COUNT: usize = 16;
pub const AUDIT_LOG_COUNT: usize = 8;

/// Days between issue and due date for every invoice.
pub const INVOICE_TERMS_DAYS: i64 = 14;

pub const CLIENT_NAMES: [&str; CLIENT_COUNT] = [
    "Acme Studio",
    "Northwind Labs",
    "Blue Fern Co.",
    "Harbor & Pine",
    "Lumen Health",
    "Sprout Bakery",
    "Atlas Freight",
    "Kite Analytics",
    "Maple Dental",
    "Orbit Media",
    "Quarry Coffee",
    "Tidewater Realty",
];

pub const REASON_LATE: &str = "Paid the last two invoices late";
pub const REASON_DISPUTE: &str = "Open dispute over milestone scope";
pub const REASON_INACTIVE: &str = "No contact in over 90 days";
pub const REASON_MEDIUM: &str = "Budget under review for next quarter";
pub const REASON_LOW_EVEN: &str = "Pays on time";
pub const REASON_LOW_ODD: &str = "Steady monthly retainer";

pub const PROPOSAL_TITLES: [&str; 6] = [
    "Brand identity refresh",
    "Quarterly content retainer",
    "Landing page sprint",
    "Analytics dashboard build",
    "Product launch campaign",
    "UX audit",
];

pub const PROPOSAL_STATUSES: [ProposalStatus; 5] = [
    ProposalStatus::Sent,
    ProposalStatus::Draft,
    ProposalStatus::Accepted,
    ProposalStatus::Sent,
    ProposalStatus::Rejected,
];

/// (vendor, category, base amount)
pub const EXPENSE_SOURCES: [(&str, &str, f64); 9] = [
    ("Figma", "Software", 45.0),
    ("Adobe Creative Cloud", "Software", 85.0),
    ("WeWork", "Workspace", 420.0),
    ("Delta Air Lines", "Travel", 380.0),
    ("Staples", "Office", 64.0),
    ("Comcast Business", "Utilities", 120.0),
    ("Stripe", "Fees", 96.0),
    ("Google Workspace", "Software", 18.0),
    ("Hertz", "Travel", 210.0),
];

/// (category, yearly limit)
pub const BUDGET_LIMITS: [(&str, f64); 7] = [
    ("Software", 2400.0),
    ("Workspace", 5000.0),
    ("Travel", 3500.0),
    ("Office", 400.0),
    ("Utilities", 1500.0),
    ("Fees", 1200.0),
    ("Marketing", 750.0),
];

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const PROJECT_TITLES: [&str; PROJECT_COUNT] = [
    "Brand refresh",
    "Website rebuild",
    "Q3 campaign",
    "Mobile onboarding",
    "Pitch deck",
    "Product photography",
    "Newsletter system",
    "Annual report",
];

pub const TASK_TITLES: [&str; 10] = [
    "Draft wireframes",
    "Client review call",
    "Collect feedback",
    "Update copy",
    "Export final assets",
    "Send invoice",
    "Write project brief",
    "Prepare moodboard",
    "QA pass",
    "Hand-off meeting",
];

/// (name, status, days after the anchor)
pub const COMPLIANCE_FORMS: [(&str, FormStatus, i64); 5] = [
    ("Quarterly Estimated Tax", FormStatus::InProgress, 18),
    ("Form 1099-NEC", FormStatus::NotStarted, 45),
    ("State Sales Tax Return", FormStatus::Complete, 60),
    ("Business License Renewal", FormStatus::NotStarted, 74),
    ("W-9 Collection", FormStatus::InProgress, 31),
];

pub const AUDIT_ACTIONS: [&str; AUDIT_LOG_COUNT] = [
    "Exported Q2 profit & loss",
    "Marked invoice as paid",
    "Updated tax reserve rate",
    "Connected bank account",
    "Added expense category",
    "Sent proposal",
    "Downloaded 1099 summary",
    "Changed dashboard layout",
];

/// (kind, name, price label, description)
pub const MARKETPLACE_PACKS: [(PackKind, &str, &str, &str); 9] = [
    (
        PackKind::Theme,
        "Midnight Ledger",
        "$9",
        "Dark theme tuned for late-night bookkeeping",
    ),
    (
        PackKind::Theme,
        "Sourdough",
        "Free",
        "Warm neutrals with high-contrast numbers",
    ),
    (
        PackKind::Theme,
        "Paper Trail",
        "$5",
        "Print-friendly light theme",
    ),
    (
        PackKind::Preset,
        "Solo Designer",
        "Free",
        "Layout focused on proposals and project progress",
    ),
    (
        PackKind::Preset,
        "Agency Starter",
        "$12",
        "Multi-client layout with pipeline and cash flow",
    ),
    (
        PackKind::Preset,
        "Consultant Pro",
        "$15",
        "Retainer tracking with compliance front and center",
    ),
    (
        PackKind::Widget,
        "Runway Gauge",
        "$4",
        "Months of runway at current burn",
    ),
    (
        PackKind::Widget,
        "Client Heatmap",
        "$6",
        "Revenue concentration by client",
    ),
    (
        PackKind::Widget,
        "Tax Countdown",
        "Free",
        "Days until the next filing deadline",
    ),
];
