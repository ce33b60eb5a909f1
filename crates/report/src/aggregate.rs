//! Per-wine aggregation of order lines.

use std::collections::HashMap;
use types::{OrderLine, WineId, WineSummary};

/// Fold order lines into one summary per distinct wine.
///
/// The first line seen for a wine seeds its name and vintage. Summaries are
/// returned in first-seen order of `wine_id`; callers must not rely on it.
pub fn aggregate<'a, I>(lines: I) -> Vec<WineSummary>
where
    I: IntoIterator<Item = &'a OrderLine>,
{
    let mut slots: HashMap<WineId, usize> = HashMap::new();
    let mut summaries: Vec<WineSummary> = Vec::new();

    for line in lines {
        let slot = *slots.entry(line.wine_id).or_insert_with(|| {
            summaries.push(WineSummary::seed(line));
            summaries.len() - 1
        });
        summaries[slot].record(line);
    }

    summaries
}
