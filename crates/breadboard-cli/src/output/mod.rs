//! Output formatting shared by commands.

mod json;
mod text;

pub use json::{panel_json, print_json};
pub use text::print_panel;
