//! JSON output.

use serde::Serialize;
use serde_json::Value;

use breadboard_core::Panel;

/// Pretty-print any projection as one JSON document on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A panel with its lines, plus `values` keyed by label for quick lookup.
///
/// A label that repeats (one per suggestion, one per blocked task) maps to an
/// array of its values in line order.
pub fn panel_json(panel: &Panel) -> serde_json::Value {
    let mut values = serde_json::Map::new();
    for line in &panel.lines {
        let value = Value::String(line.value.clone());
        match values.get_mut(&line.label) {
            None => {
                values.insert(line.label.clone(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    serde_json::json!({
        "kind": panel.kind,
        "title": panel.title,
        "density": panel.density,
        "lines": panel.lines,
        "values": values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_core::widgets::render;
    use breadboard_core::{Density, MockApi, WidgetKind};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_panel_json_shape() {
        let api = MockApi::new(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        let panel = render(WidgetKind::Compliance, &api, Density::Compact);
        let value = panel_json(&panel);
        assert_eq!(value["kind"], "compliance");
        assert_eq!(value["density"], "compact");
        assert_eq!(
            value["values"]["Next filing"],
            "Quarterly Estimated Tax in 18 days"
        );
        assert!(value["lines"].is_array());
    }

    #[test]
    fn test_panel_json_keeps_repeated_labels() {
        let api = MockApi::new(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());
        let panel = render(WidgetKind::Insights, &api, Density::Full);
        let suggestions: Vec<&str> = panel
            .lines
            .iter()
            .filter(|line| line.label == "Suggestion")
            .map(|line| line.value.as_str())
            .collect();
        assert!(suggestions.len() > 1);

        let value = panel_json(&panel);
        assert_eq!(value["values"]["Suggestion"], serde_json::json!(suggestions));
        assert_eq!(
            value["lines"].as_array().map(Vec::len),
            Some(panel.lines.len())
        );
    }
}
