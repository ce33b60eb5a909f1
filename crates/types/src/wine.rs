//! Order lines, per-wine summaries and sort criteria.

use crate::ids::WineId;
use crate::money::Amount;

/// One paid or dispatched order joined to its wine.
///
/// Several lines usually share a `wine_id`, one per order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub wine_id: WineId,
    pub name: String,
    pub vintage: i64,
    pub quantity: i64,
    pub total_amount: Amount,
}

/// Sales totals for one wine, built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WineSummary {
    pub wine_id: WineId,
    pub name: String,
    pub vintage: i64,
    pub total_quantity: i64,
    pub total_revenue: Amount,
    pub total_orders: u64,
}

impl WineSummary {
    /// Empty totals seeded with the identity of the first line seen for a wine.
    pub fn seed(line: &OrderLine) -> Self {
        Self {
            wine_id: line.wine_id,
            name: line.name.clone(),
            vintage: line.vintage,
            total_quantity: 0,
            total_revenue: Amount::ZERO,
            total_orders: 0,
        }
    }

    /// Fold one order line into the totals.
    ///
    /// Name and vintage are left as seeded even when the line disagrees.
    #[inline]
    pub fn record(&mut self, line: &OrderLine) {
        self.total_quantity += line.quantity;
        self.total_revenue += line.total_amount;
        self.total_orders += 1;
    }
}

/// Metric the listing is sorted by, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Criteria {
    #[default]
    Revenue,
    Quantity,
    Orders,
}

impl Criteria {
    pub const ALL: [Criteria; 3] = [Criteria::Revenue, Criteria::Quantity, Criteria::Orders];

    /// Parse a query-string value. Matching is exact; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "revenue" => Some(Criteria::Revenue),
            "quantity" => Some(Criteria::Quantity),
            "orders" => Some(Criteria::Orders),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Criteria::Revenue => "revenue",
            Criteria::Quantity => "quantity",
            Criteria::Orders => "orders",
        }
    }

    /// Human-readable label for the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            Criteria::Revenue => "Revenue",
            Criteria::Quantity => "Quantity",
            Criteria::Orders => "Orders",
        }
    }
}
