//! Dashboard layout state.
//!
//! The layout is UI-local preference state: an ordered list of widgets and a
//! density. It changes only through [`reduce`], which returns a new layout and
//! leaves the old one untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::DashboardApi;
use crate::error::{BreadboardError, Result};
use crate::widgets::{self, Density, Panel, WidgetKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub widgets: Vec<WidgetKind>,
    #[serde(default)]
    pub density: Density,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            widgets: vec![
                WidgetKind::Money,
                WidgetKind::Compliance,
                WidgetKind::Work,
                WidgetKind::Insights,
            ],
            density: Density::Full,
        }
    }
}

impl Layout {
    /// Render every widget in order.
    pub fn render(&self, api: &dyn DashboardApi) -> Vec<Panel> {
        self.render_with(api, self.density)
    }

    /// Render every widget in order at an explicit density.
    pub fn render_with(&self, api: &dyn DashboardApi, density: Density) -> Vec<Panel> {
        self.widgets
            .iter()
            .map(|kind| widgets::render(*kind, api, density))
            .collect()
    }

    fn position(&self, kind: WidgetKind) -> Option<usize> {
        self.widgets.iter().position(|w| *w == kind)
    }
}

/// A requested layout change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    Add(WidgetKind),
    Remove(WidgetKind),
    /// Move the widget at `from` so it ends up at `to` (zero-based)
    Move { from: usize, to: usize },
    SetDensity(Density),
    Reset,
}

/// Apply `action` to `layout`, producing the next layout.
///
/// # Errors
///
/// Returns `BreadboardError::Layout` if:
/// - Adding a widget that is already placed
/// - Removing a widget that is not placed
/// - Moving from or to a position outside the layout
pub fn reduce(layout: &Layout, action: LayoutAction) -> Result<Layout> {
    let mut next = layout.clone();
    match action {
        LayoutAction::Add(kind) => {
            if layout.position(kind).is_some() {
                return Err(BreadboardError::Layout(format!(
                    "Widget \"{}\" is already on the dashboard",
                    kind
                )));
            }
            next.widgets.push(kind);
        }
        LayoutAction::Remove(kind) => {
            let index = layout.position(kind).ok_or_else(|| {
                BreadboardError::Layout(format!("Widget \"{}\" is not on the dashboard", kind))
            })?;
            next.widgets.remove(index);
        }
        LayoutAction::Move { from, to } => {
            let len = layout.widgets.len();
            if from >= len || to >= len {
                return Err(BreadboardError::Layout(format!(
                    "Cannot move from {} to {} in a layout of {} widgets",
                    from, to, len
                )));
            }
            let kind = next.widgets.remove(from);
            next.widgets.insert(to, kind);
        }
        LayoutAction::SetDensity(density) => next.density = density,
        LayoutAction::Reset => next = Layout::default(),
    }
    debug!(?action, widgets = next.widgets.len(), "Layout updated");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove() {
        let layout = Layout::default();
        let added = reduce(&layout, LayoutAction::Add(WidgetKind::Marketplace)).unwrap();
        assert_eq!(added.widgets.last(), Some(&WidgetKind::Marketplace));
        assert_eq!(layout.widgets.len() + 1, added.widgets.len());

        let removed = reduce(&added, LayoutAction::Remove(WidgetKind::Money)).unwrap();
        assert!(!removed.widgets.contains(&WidgetKind::Money));
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let err = reduce(&Layout::default(), LayoutAction::Add(WidgetKind::Money)).unwrap_err();
        assert!(matches!(err, BreadboardError::Layout(_)));
    }

    #[test]
    fn test_remove_missing_rejected() {
        let result = reduce(&Layout::default(), LayoutAction::Remove(WidgetKind::CashFlow));
        assert!(result.is_err());
    }

    #[test]
    fn test_move() {
        let layout = Layout::default();
        let moved = reduce(&layout, LayoutAction::Move { from: 0, to: 3 }).unwrap();
        assert_eq!(
            moved.widgets,
            vec![
                WidgetKind::Compliance,
                WidgetKind::Work,
                WidgetKind::Insights,
                WidgetKind::Money,
            ]
        );
        assert!(reduce(&layout, LayoutAction::Move { from: 0, to: 4 }).is_err());
    }

    #[test]
    fn test_density_and_reset() {
        let compact = reduce(&Layout::default(), LayoutAction::SetDensity(Density::Compact)).unwrap();
        assert_eq!(compact.density, Density::Compact);
        let reset = reduce(&compact, LayoutAction::Reset).unwrap();
        assert_eq!(reset, Layout::default());
    }

    #[test]
    fn test_layout_deserializes_without_density() {
        let layout: Layout = serde_json::from_str(r#"{"widgets":["money","cash_flow"]}"#).unwrap();
        assert_eq!(layout.widgets, vec![WidgetKind::Money, WidgetKind::CashFlow]);
        assert_eq!(layout.density, Density::Full);
    }
}
