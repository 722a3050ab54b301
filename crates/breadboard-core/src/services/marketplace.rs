//! Marketplace catalog queries.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::model::{MarketplacePack, PackKind};

/// Catalog entries, optionally restricted to one kind.
pub fn packs(data: &Dataset, kind: Option<PackKind>) -> Vec<MarketplacePack> {
    data.marketplace
        .iter()
        .filter(|pack| kind.map_or(true, |wanted| pack.kind == wanted))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindCount {
    pub kind: PackKind,
    pub count: usize,
    pub free: usize,
}

/// Number of packs (and free packs) per kind.
pub fn counts(data: &Dataset) -> Vec<KindCount> {
    PackKind::ALL
        .into_iter()
        .map(|kind| {
            let of_kind = data.marketplace.iter().filter(|pack| pack.kind == kind);
            let (count, free) = of_kind.fold((0, 0), |(count, free), pack| {
                let is_free = pack.price_label.eq_ignore_ascii_case("free");
                (count + 1, free + usize::from(is_free))
            });
            KindCount { kind, count, free }
        })
        .collect()
}
