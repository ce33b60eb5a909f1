//! Server-rendered frontend.
//!
//! `GET /` renders the page; the sort selector and search box swap the list
//! in place through htmx, fetching `/ui/wines` and `/ui/wines/search`.

use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use report::{Band, highlight_bands};
use types::{Criteria, WineSummary};

use crate::dto::{QueryPairs, SearchQuery, WinesQuery};
use crate::error::AppResult;
use crate::reports;
use crate::state::AppState;

/// Helper to render templates into axum responses
fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

/// Entry in the sort selector.
pub struct CriteriaOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// GET / - Main page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub options: Vec<CriteriaOption>,
    pub initial: &'static str,
}

pub async fn index() -> Response {
    let initial = Criteria::default();
    let options = Criteria::ALL
        .iter()
        .map(|&c| CriteriaOption {
            value: c.as_str(),
            label: c.label(),
            selected: c == initial,
        })
        .collect();

    render_template(&IndexPage {
        options,
        initial: initial.as_str(),
    })
}

/// One rendered line of the wine list.
pub struct WineRow {
    pub name: String,
    pub vintage: i64,
    pub revenue: String,
    pub quantity: i64,
    pub orders: u64,
    pub band: &'static str,
}

/// List fragment swapped into `#wine-list`
#[derive(Template)]
#[template(path = "partials/wine_list.html")]
pub struct WineListFragment {
    pub rows: Vec<WineRow>,
}

impl WineListFragment {
    /// Build rows in display order, marking the top and bottom tenth.
    pub fn from_wines(wines: &[WineSummary]) -> Self {
        let rows = wines
            .iter()
            .zip(highlight_bands(wines.len()))
            .map(|(w, band): (&WineSummary, Band)| WineRow {
                name: w.name.clone(),
                vintage: w.vintage,
                revenue: w.total_revenue.to_string(),
                quantity: w.total_quantity,
                orders: w.total_orders,
                band: band.css_class(),
            })
            .collect();
        Self { rows }
    }
}

/// Render a report as the list fragment. Store failures are logged and
/// shown as an empty list.
fn render_list(result: AppResult<Vec<WineSummary>>) -> Response {
    let wines = result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "wine list fragment failed");
        Vec::new()
    });
    render_template(&WineListFragment::from_wines(&wines))
}

/// GET /ui/wines - Best sellers fragment
pub async fn wines_fragment(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = WinesQuery::from_pairs(&pairs);
    render_list(reports::best_sellers(&state, params.criteria()).await)
}

/// GET /ui/wines/search - Search results fragment
pub async fn search_fragment(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = SearchQuery::from_pairs(&pairs);
    render_list(reports::search(&state, &params.query).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Amount, WineId};

    fn wine(id: i64, revenue: f64) -> WineSummary {
        WineSummary {
            wine_id: WineId(id),
            name: format!("Wine {id}"),
            vintage: 2000 + id,
            total_quantity: id,
            total_revenue: Amount::from_f64(revenue).unwrap(),
            total_orders: 1,
        }
    }

    #[test]
    fn test_fragment_rows_carry_bands() {
        let wines: Vec<_> = (1..=12).map(|i| wine(i, 10.0 * i as f64)).collect();
        let fragment = WineListFragment::from_wines(&wines);

        assert_eq!(fragment.rows.len(), 12);
        assert_eq!(fragment.rows[0].band, "top");
        assert_eq!(fragment.rows[1].band, "top");
        assert_eq!(fragment.rows[2].band, "");
        assert_eq!(fragment.rows[10].band, "bottom");
        assert_eq!(fragment.rows[11].band, "bottom");
    }

    #[test]
    fn test_fragment_renders_lines() {
        let fragment = WineListFragment::from_wines(&[wine(1, 60.0)]);
        let html = fragment.render().unwrap();
        assert!(html.contains("Wine 1"));
        assert!(html.contains("2001"));
        assert!(html.contains("60.00"));
        assert!(html.contains("class=\"wine top\""));
    }

    #[test]
    fn test_fragment_escapes_names() {
        let mut w = wine(1, 1.0);
        w.name = "<script>alert(1)</script>".into();
        let html = WineListFragment::from_wines(&[w]).render().unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_fragment() {
        let html = WineListFragment::from_wines(&[]).render().unwrap();
        assert!(html.contains("No wines found"));
    }

    #[test]
    fn test_index_page_renders_selector() {
        let page = IndexPage {
            options: Criteria::ALL
                .iter()
                .map(|&c| CriteriaOption {
                    value: c.as_str(),
                    label: c.label(),
                    selected: c == Criteria::Quantity,
                })
                .collect(),
            initial: "quantity",
        };
        let html = page.render().unwrap();
        assert!(html.contains("value=\"orders\""));
        assert!(html.contains("hx-get=\"/ui/wines/search\""));
        assert!(html.contains("/ui/wines?criteria=quantity"));
    }
}
