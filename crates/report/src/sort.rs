//! Descending sort of summaries by the requested metric.

use std::cmp::Reverse;
use types::{Criteria, WineSummary};

/// Sort summaries descending by `criteria`.
///
/// `None` stands for an unrecognized criteria string and leaves the slice
/// untouched. The sort is stable, so ties keep aggregation order.
pub fn sort_by_criteria(wines: &mut [WineSummary], criteria: Option<Criteria>) {
    match criteria {
        Some(Criteria::Revenue) => wines.sort_by_key(|w| Reverse(w.total_revenue)),
        Some(Criteria::Quantity) => wines.sort_by_key(|w| Reverse(w.total_quantity)),
        Some(Criteria::Orders) => wines.sort_by_key(|w| Reverse(w.total_orders)),
        None => {}
    }
}
