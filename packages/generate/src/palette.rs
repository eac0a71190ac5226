//! Per-alcaldía color assignment.
//!
//! Colors come from a fixed 20-entry palette (matplotlib's `tab20`
//! colors as hex), cycled in first-seen order of the joined boundary
//! set. The order is whatever the boundary file yields, so identical
//! input reproduces identical colors run over run.

use std::collections::BTreeMap;

/// The 20 `tab20` colors, in palette order.
pub const PALETTE: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Fill color for an alcaldía that somehow missed the assignment.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// Assigns each distinct key a palette color by first-seen order,
/// wrapping after [`PALETTE`] is exhausted.
#[must_use]
pub fn assign_colors<'a>(keys: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, &'static str> {
    let mut colors = BTreeMap::new();
    let mut next = 0usize;
    for key in keys {
        if !colors.contains_key(key) {
            colors.insert(key.to_owned(), PALETTE[next % PALETTE.len()]);
            next += 1;
        }
    }
    colors
}
