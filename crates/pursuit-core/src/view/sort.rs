//! Ordering of the company list.

use std::cmp::Ordering;

use crate::models::{Company, SortKey, SortOrder};

/// Compare two companies by `key`, ascending.
pub fn compare(a: &Company, b: &Company, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::AppliedDate => a.applied_date.cmp(&b.applied_date),
        SortKey::Priority => a.priority.weight().cmp(&b.priority.weight()),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Case-insensitive first, then byte order so distinct names never tie.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort by `key` in `order`; equal keys keep their relative order.
pub fn sort_companies(companies: &mut [&Company], key: SortKey, order: SortOrder) {
    companies.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
