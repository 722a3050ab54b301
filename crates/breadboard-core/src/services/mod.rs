//! Derived aggregate services.
//!
//! Every function here is a pure, read-only projection over a [`Dataset`]:
//! calling it twice with the same inputs yields the same output. None of them
//! can fail; empty collections produce zero or placeholder values.
//!
//! [`Dataset`]: crate::dataset::Dataset

pub mod compliance;
pub mod crm;
pub mod insights;
pub mod marketplace;
pub mod money;
pub mod work;

use crate::dataset::Dataset;

/// Shown wherever a referenced entity cannot be resolved.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Resolve a client's display name, falling back to [`PLACEHOLDER`].
pub fn client_name(data: &Dataset, client_id: Option<&str>) -> String {
    client_id
        .and_then(|id| data.client(id))
        .map(|client| client.name.clone())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a dollar amount rounded to whole dollars with thousands separators.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
