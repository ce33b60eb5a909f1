//! Exact decimal monetary amounts.
//!
//! Order totals arrive from SQLite as floating-point values. Each one is
//! converted once, on read, to the shortest decimal that round-trips to the
//! stored double, and sums are taken on that decimal. Nothing is rounded
//! until the value leaves the process.

use derive_more::{Add, AddAssign, From, Into, Sum};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// An exact decimal amount of money.
///
/// # Examples
/// - `Amount::new(100, 2)` = 1.00
/// - `Amount::new(15, 1)` = 1.5
/// - `Amount::new(4, 5)` = 0.00004
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Add,
    AddAssign,
    Sum,
    From,
    Into,
)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// `num * 10^-scale`.
    #[inline]
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    /// Convert a stored double to the decimal it was written as.
    ///
    /// `f64`'s `Display` prints the shortest digits that parse back to the
    /// same double and never uses exponent form, so `0.00004` stays
    /// `0.00004` instead of its binary expansion. Fails for NaN, infinities
    /// and magnitudes beyond 96 bits.
    pub fn from_f64(v: f64) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str(&v.to_string()).map(Self)
    }

    /// Nearest double, for JSON numbers.
    pub fn to_f64(self) -> f64 {
        // The decimal text parses with a single correct rounding.
        self.0.to_string().parse().unwrap_or_default()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", cents)
    }
}
