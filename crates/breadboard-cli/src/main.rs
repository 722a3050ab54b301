//! Bread Board CLI - a terminal dashboard over a synthetic freelance business
//!
//! Every command reads the same deterministic dataset, anchored on `--now`,
//! the config's reference date, or the current time.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands, DashboardArgs};
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};
use crate::errors::CliError;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    match run(&ctx) {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(cli_err) => cli_err.exit(ctx.ui()),
            None => Err(err),
        },
    }
}

/// Logs go to stderr so JSON on stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        None => commands::handle_dashboard(ctx, &DashboardArgs::default()),
        Some(Commands::Dashboard(args)) => commands::handle_dashboard(ctx, args),
        Some(Commands::Money(args)) => commands::handle_money(ctx, args),
        Some(Commands::Work(args)) => commands::handle_work(ctx, args),
        Some(Commands::Clients(args)) => commands::handle_clients(ctx, args),
        Some(Commands::Compliance(args)) => commands::handle_compliance(ctx, args),
        Some(Commands::Insights(args)) => commands::handle_insights(ctx, args),
        Some(Commands::Marketplace(args)) => commands::handle_marketplace(ctx, args),
        Some(Commands::Widget(args)) => commands::handle_widget(ctx, args),
        Some(Commands::Layout(args)) => commands::handle_layout(ctx, args),
        Some(Commands::Export(args)) => commands::handle_export(ctx, args),
        Some(Commands::Init(args)) => commands::handle_init(ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
    }
}
