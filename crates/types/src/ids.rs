//! Identifier types.

use derive_more::{From, Into};

// =============================================================================
// Core ID Types
// =============================================================================

/// Identifier of a wine in the master catalog (`master_wine.id`).
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
    From,
    Into,
)]
pub struct WineId(pub i64);

impl WineId {
    /// Raw catalog id.
    #[inline]
    pub fn raw(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_id_ordering() {
        assert!(WineId(1) < WineId(2));
        assert_eq!(WineId::from(7).raw(), 7);
    }
}
