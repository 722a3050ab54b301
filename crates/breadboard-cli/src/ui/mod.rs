//! UI primitives for the Bread Board CLI.
//!
//! - **context**: Environment detection (TTY, width, color, unicode)
//! - **mode**: Output mode resolution (json, plain, pretty)
//! - **theme**: Badges, styles, status colors and spinner frames
//! - **render**: Headers, sections, key-value lines, tables, receipts
//! - **progress**: Spinner shown during simulated API latency
//! - **format**: Dates in the display timezone, amounts, countdowns

mod context;
pub mod format;
pub mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;

pub use render::{
    blank_line, error_message, header, hint, kv, print, receipt, section, simple_table, table,
    Column,
};

pub use format::{format_currency, format_date, format_datetime, format_days, format_percent};
