use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use breadboard_core::model::{InvoiceStatus, TaskStatus};
use breadboard_core::VERSION;

/// Bread Board - a dashboard for running a freelance business
#[derive(Parser)]
#[command(name = "breadboard")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reference time for the dataset (ISO-8601 or YYYY-MM-DD)
    #[arg(long, global = true, env = "BREADBOARD_NOW", value_name = "DATE")]
    pub now: Option<String>,

    /// Output JSON only
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard panels for the configured layout
    Dashboard(DashboardArgs),

    /// Income, expenses, invoices, budgets and cash flow
    Money(MoneyArgs),

    /// Projects, tasks and calendar
    Work(WorkArgs),

    /// Clients, risk and proposals
    Clients(ClientsArgs),

    /// Filings, estimated tax and audit log
    Compliance(ComplianceArgs),

    /// Scores, suggestions and revenue trend
    Insights(InsightsArgs),

    /// Browse themes, presets and widgets
    Marketplace(MarketplaceArgs),

    /// Render a single widget
    Widget(WidgetArgs),

    /// Show or change the dashboard layout
    Layout(LayoutArgs),

    /// Export the whole dataset as JSON
    Export(ExportArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `dashboard` command
#[derive(Args, Default)]
pub struct DashboardArgs {
    /// Render compact panels (headline numbers only)
    #[arg(long, conflicts_with = "full")]
    pub compact: bool,

    /// Render full panels
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the `money` command
#[derive(Args)]
pub struct MoneyArgs {
    #[command(subcommand)]
    pub view: Option<MoneyView>,
}

#[derive(Subcommand, Clone)]
pub enum MoneyView {
    /// Year-to-date totals and tax reserve
    Overview,
    /// Income transactions
    Income,
    /// Expense transactions
    Expenses,
    /// Invoices, optionally filtered by status
    Invoices {
        /// Only show invoices with this status
        #[arg(long, value_enum)]
        status: Option<InvoiceFilter>,
    },
    /// Budget utilization per category
    Budgets,
    /// Monthly inflow and outflow
    CashFlow,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InvoiceFilter {
    Draft,
    Sent,
    Paid,
    Due,
    Overdue,
}

impl From<InvoiceFilter> for InvoiceStatus {
    fn from(filter: InvoiceFilter) -> Self {
        match filter {
            InvoiceFilter::Draft => InvoiceStatus::Draft,
            InvoiceFilter::Sent => InvoiceStatus::Sent,
            InvoiceFilter::Paid => InvoiceStatus::Paid,
            InvoiceFilter::Due => InvoiceStatus::Due,
            InvoiceFilter::Overdue => InvoiceStatus::Overdue,
        }
    }
}

/// Arguments for the `work` command
#[derive(Args)]
pub struct WorkArgs {
    #[command(subcommand)]
    pub view: Option<WorkView>,
}

#[derive(Subcommand, Clone)]
pub enum WorkView {
    /// Task counts and project progress
    Overview,
    /// Projects with deadlines
    Projects,
    /// Tasks, optionally filtered by status
    Tasks {
        /// Only show tasks with this status
        #[arg(long, value_enum)]
        status: Option<TaskFilter>,
    },
    /// Upcoming calendar events
    Calendar,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TaskFilter {
    Open,
    Blocked,
    Done,
}

impl From<TaskFilter> for TaskStatus {
    fn from(filter: TaskFilter) -> Self {
        match filter {
            TaskFilter::Open => TaskStatus::Open,
            TaskFilter::Blocked => TaskStatus::Blocked,
            TaskFilter::Done => TaskStatus::Done,
        }
    }
}

/// Arguments for the `clients` command
#[derive(Args)]
pub struct ClientsArgs {
    /// Show proposals instead of clients
    #[arg(long, conflicts_with = "pipeline")]
    pub proposals: bool,

    /// Show the proposal pipeline by stage
    #[arg(long)]
    pub pipeline: bool,
}

/// Arguments for the `compliance` command
#[derive(Args)]
pub struct ComplianceArgs {
    #[command(subcommand)]
    pub view: Option<ComplianceView>,
}

#[derive(Subcommand, Clone)]
pub enum ComplianceView {
    /// Next filing and estimated tax
    Overview,
    /// All filings by due date
    Forms,
    /// Audit log, newest first
    Audit,
}

/// Arguments for the `insights` command
#[derive(Args)]
pub struct InsightsArgs {
    /// Show the monthly revenue trend instead of the overview
    #[arg(long)]
    pub trend: bool,
}

/// Arguments for the `marketplace` command
#[derive(Args)]
pub struct MarketplaceArgs {
    /// Only show packs of this kind (theme, preset, widget)
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,
}

/// Arguments for the `widget` command
#[derive(Args)]
pub struct WidgetArgs {
    /// Widget kind (e.g. money, cash-flow, compliance)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Render the compact variant
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `layout` command
#[derive(Args)]
pub struct LayoutArgs {
    #[command(subcommand)]
    pub command: Option<LayoutCommand>,
}

#[derive(Subcommand, Clone)]
pub enum LayoutCommand {
    /// Show the current layout
    Show,
    /// Append a widget
    Add {
        #[arg(value_name = "KIND")]
        widget: String,
    },
    /// Remove a widget
    Remove {
        #[arg(value_name = "KIND")]
        widget: String,
    },
    /// Move a widget between positions (1-based)
    Move {
        #[arg(value_name = "FROM")]
        from: usize,
        #[arg(value_name = "TO")]
        to: usize,
    },
    /// Set the default density (compact or full)
    Density {
        #[arg(value_name = "DENSITY")]
        density: String,
    },
    /// Restore the default layout
    Reset,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Pin the dataset anchor (ISO-8601 or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub reference_date: Option<String>,

    /// Simulated API latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Timezone for displayed dates (e.g. America/New_York)
    #[arg(long)]
    pub timezone: Option<String>,
}
