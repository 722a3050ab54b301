use tracing::info;

use crate::app::{parse_datetime, parse_timezone, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, BreadboardConfig};
use crate::errors::CliError;
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = ctx.config_location()?.path.clone();
    if path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let mut config = BreadboardConfig::default();
    if let Some(value) = args.reference_date.as_deref() {
        parse_datetime(value)?;
        config.data.reference_date = Some(value.to_string());
    }
    if let Some(name) = args.timezone.as_deref() {
        config.ui.timezone = Some(parse_timezone(name)?.to_string());
    }
    if let Some(ms) = args.latency_ms {
        config.api.latency_ms = ms;
    }

    write_config(&path, &config)?;
    info!(path = %path.display(), force = args.force, "Wrote config");

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return crate::output::print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }));
    }
    if ctx.quiet() {
        return Ok(());
    }

    let target = path.display().to_string();
    let anchor = config
        .data
        .reference_date
        .clone()
        .unwrap_or_else(|| "now".to_string());
    let latency = format!("{} ms", config.api.latency_ms);
    let timezone = config
        .ui
        .timezone
        .clone()
        .unwrap_or_else(|| "UTC".to_string());
    print(
        ui,
        &receipt(
            ui,
            "Initialized Bread Board",
            &[
                ("Config", target.as_str()),
                ("Anchor", anchor.as_str()),
                ("Latency", latency.as_str()),
                ("Timezone", timezone.as_str()),
            ],
        ),
    );
    blank_line(ui);
    print(ui, &hint(ui, "breadboard dashboard"));
    Ok(())
}
