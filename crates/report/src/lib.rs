//! Sales reporting over order lines.
//!
//! Everything here is a pure function of its input: the server fetches
//! order lines, hands them to [`aggregate`], orders the result with
//! [`sort_by_criteria`], and the frontend marks [`highlight_bands`].

mod aggregate;
mod highlight;
mod sort;

pub use aggregate::aggregate;
pub use highlight::{Band, band_len, highlight_bands};
pub use sort::sort_by_criteria;
