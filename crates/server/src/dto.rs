use serde::Serialize;
use types::{Criteria, WineSummary};

/// Decoded query string, one entry per `key=value` pair in request order.
///
/// Extracted as pairs rather than a struct so a repeated key reaches the
/// handler instead of failing deserialization.
pub type QueryPairs = Vec<(String, String)>;

fn values<'a>(pairs: &'a [(String, String)], key: &'a str) -> impl Iterator<Item = &'a str> {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// GET /wines query string
#[derive(Debug, Default)]
pub struct WinesQuery {
    criteria: Vec<String>,
}

impl WinesQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            criteria: values(pairs, "criteria").map(str::to_string).collect(),
        }
    }

    /// Requested sort, defaulting to revenue when the parameter is absent.
    ///
    /// A present but unrecognized value (including an empty one) is `None`,
    /// which leaves the report unsorted. So is a repeated `criteria`, which
    /// names no single metric.
    pub fn criteria(&self) -> Option<Criteria> {
        match self.criteria.as_slice() {
            [] => Some(Criteria::default()),
            [raw] => Criteria::parse(raw),
            _ => None,
        }
    }
}

/// GET /wines/search query string
#[derive(Debug, Default)]
pub struct SearchQuery {
    pub query: String,
}

impl SearchQuery {
    /// The first `query` value wins; absent means empty.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            query: values(pairs, "query").next().unwrap_or_default().to_string(),
        }
    }
}

/// One wine in a JSON report.
///
/// Field names follow the frontend contract, which mixes snake and camel case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineSummaryResponse {
    pub wine_id: i64,
    pub name: String,
    pub vintage: i64,
    #[serde(rename = "totalQuantity")]
    pub total_quantity: i64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
}

impl From<&WineSummary> for WineSummaryResponse {
    fn from(w: &WineSummary) -> Self {
        Self {
            wine_id: w.wine_id.raw(),
            name: w.name.clone(),
            vintage: w.vintage,
            total_quantity: w.total_quantity,
            total_revenue: w.total_revenue.to_f64(),
            total_orders: w.total_orders,
        }
    }
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
