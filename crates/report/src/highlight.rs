//! Positional highlight bands for the rendered list.
//!
//! Bands mark the first and last tenth of whatever order the list is
//! currently in. They carry no meaning beyond presentation.

/// Band a list position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Top,
    Middle,
    Bottom,
}

impl Band {
    /// CSS class for the band (empty for the middle).
    pub fn css_class(self) -> &'static str {
        match self {
            Band::Top => "top",
            Band::Middle => "",
            Band::Bottom => "bottom",
        }
    }
}

/// Number of positions in each band: `ceil(len / 10)`, or 0 for an empty list.
pub fn band_len(len: usize) -> usize {
    len.div_ceil(10)
}

/// Band for every position of a list of `len` items.
///
/// When the bands overlap (lists shorter than two bands), `Top` wins.
pub fn highlight_bands(len: usize) -> Vec<Band> {
    let k = band_len(len);
    (0..len)
        .map(|i| {
            if i < k {
                Band::Top
            } else if i >= len - k {
                Band::Bottom
            } else {
                Band::Middle
            }
        })
        .collect()
}
