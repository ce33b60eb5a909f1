//! The two sales reports: fetch order lines, aggregate, sort.
//!
//! Shared by the JSON routes and the HTML fragments so both render the
//! same numbers.

use types::{Criteria, WineSummary};

use crate::error::AppResult;
use crate::state::AppState;

/// Per-wine totals over every sold order, sorted descending by `criteria`
/// (`None` leaves them unsorted).
pub async fn best_sellers(state: &AppState, criteria: Option<Criteria>) -> AppResult<Vec<WineSummary>> {
    let lines = state.store.sold_lines().await?;
    let mut wines = report::aggregate(&lines);
    report::sort_by_criteria(&mut wines, criteria);

    tracing::debug!(
        lines = lines.len(),
        wines = wines.len(),
        criteria = criteria.map_or("unsorted", Criteria::as_str),
        "best sellers report"
    );
    Ok(wines)
}

/// Per-wine totals for wines whose name or vintage contains `query`, unsorted.
pub async fn search(state: &AppState, query: &str) -> AppResult<Vec<WineSummary>> {
    let lines = state.store.search_lines(query).await?;
    let wines = report::aggregate(&lines);

    tracing::debug!(query, lines = lines.len(), wines = wines.len(), "search report");
    Ok(wines)
}
