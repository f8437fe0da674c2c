//! Exact color histogram.

use std::collections::BTreeMap;

use crate::color::{Rgb, Rgba};

/// Count every distinct RGB color in `pixels`, ignoring alpha.
///
/// Entries come back sorted by color so downstream steps see the same order
/// no matter how the pixels were laid out.
pub fn build_histogram(pixels: &[Rgba]) -> Vec<(Rgb, u64)> {
    let mut counts: BTreeMap<Rgb, u64> = BTreeMap::new();
    for px in pixels {
        *counts.entry(px.rgb()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
