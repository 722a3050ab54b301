use std::io::Write;

use breadboard_core::fs::write_atomic;
use breadboard_core::DashboardApi;
use tracing::info;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{print, receipt};

/// Dump the whole dataset as pretty JSON.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let api = ctx.api()?;
    let json = api.dataset().to_json_pretty()?;

    let Some(path) = args.output.as_ref() else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        return Ok(());
    };

    write_atomic(path, &json)?;
    info!(path = %path.display(), bytes = json.len(), "Exported dataset");

    if !ctx.quiet() {
        let ui = ctx.ui();
        let target = path.display().to_string();
        let anchor = api.dataset().generated_at.to_rfc3339();
        print(
            ui,
            &receipt(
                ui,
                "Exported dataset",
                &[("Path", target.as_str()), ("Anchor", anchor.as_str())],
            ),
        );
    }
    Ok(())
}
