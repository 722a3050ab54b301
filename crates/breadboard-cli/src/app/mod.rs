//! Application-level plumbing for the Bread Board CLI.
//!
//! - Config path, anchor and timezone resolution
//! - The per-invocation context handed to every command

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{parse_datetime, parse_timezone};
