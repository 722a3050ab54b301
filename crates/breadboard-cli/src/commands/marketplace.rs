use breadboard_core::model::PackKind;

use crate::app::AppContext;
use crate::cli::MarketplaceArgs;
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{blank_line, header, kv, print, simple_table, Column};

pub fn handle_marketplace(ctx: &AppContext, args: &MarketplaceArgs) -> anyhow::Result<()> {
    let kind = args
        .kind
        .as_deref()
        .map(|value| value.parse::<PackKind>().map_err(CliError::from))
        .transpose()?;

    let packs = ctx.fetch("Loading marketplace", |api| api.get_marketplace_packs(kind))?;
    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&packs);
    }

    let cells: Vec<Vec<String>> = packs
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.kind.to_string(),
                p.name.clone(),
                p.price_label.clone(),
                p.description.clone(),
            ]
        })
        .collect();

    if !ctx.quiet() {
        print(ui, &header(ui, "marketplace", kind.map(|k| k.as_str())));
        blank_line(ui);
    }
    let columns = [
        Column::new("ID"),
        Column::new("Kind"),
        Column::new("Name"),
        Column::new("Price"),
        Column::new("Description"),
    ];
    print(ui, &simple_table(ui, &columns, &cells));

    if kind.is_none() && !ctx.quiet() {
        blank_line(ui);
        let counts = ctx.fetch("Counting packs", |api| api.get_marketplace_counts())?;
        for count in counts {
            print(
                ui,
                &kv(
                    ui,
                    &format!("{} packs", count.kind),
                    &format!("{} ({} free)", count.count, count.free),
                ),
            );
        }
    }
    Ok(())
}
