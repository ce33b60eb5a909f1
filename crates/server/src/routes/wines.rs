//! JSON reporting endpoints.
//!
//! - `GET /wines?criteria=X` - best sellers, sorted descending by X
//! - `GET /wines/search?query=Q` - wines whose name or vintage contains Q
//!
//! Both answer 500 `{"error":"Database error"}` when the store fails.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::{QueryPairs, SearchQuery, WineSummaryResponse, WinesQuery};
use crate::error::AppResult;
use crate::reports;
use crate::state::AppState;

/// `GET /wines`
pub async fn list_wines(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<WineSummaryResponse>>> {
    let params = WinesQuery::from_pairs(&pairs);
    let wines = reports::best_sellers(&state, params.criteria()).await?;
    Ok(Json(wines.iter().map(WineSummaryResponse::from).collect()))
}

/// `GET /wines/search`
pub async fn search_wines(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<WineSummaryResponse>>> {
    let params = SearchQuery::from_pairs(&pairs);
    let wines = reports::search(&state, &params.query).await?;
    Ok(Json(wines.iter().map(WineSummaryResponse::from).collect()))
}
