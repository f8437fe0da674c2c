//! Weighted median cut over an exact color histogram.
//!
//! All arithmetic is integer so the chosen palette is identical across
//! platforms and runs.

use crate::color::Rgb;

/// A box of histogram entries for median cut subdivision.
#[derive(Debug, Clone)]
struct ColorBox {
    entries: Vec<(Rgb, u64)>,
}

impl ColorBox {
    fn new(entries: Vec<(Rgb, u64)>) -> Self {
        Self { entries }
    }

    fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Channel with the largest (max - min) spread, and that spread.
    /// Ties favor red, then green.
    fn widest_axis(&self) -> (usize, u8) {
        let mut best = (0, 0);
        for axis in 0..3 {
            let (mut lo, mut hi) = (u8::MAX, u8::MIN);
            for (c, _) in &self.entries {
                lo = lo.min(c.channel(axis));
                hi = hi.max(c.channel(axis));
            }
            let range = hi.saturating_sub(lo);
            if range > best.1 {
                best = (axis, range);
            }
        }
        best
    }

    /// Split priority: heavy boxes with wide color spread go first.
    fn priority(&self) -> u128 {
        self.total_weight() as u128 * self.widest_axis().1 as u128
    }

    fn can_split(&self) -> bool {
        self.entries.len() >= 2
    }

    /// Pixel-weighted mean color, rounded to nearest.
    fn mean(&self) -> Rgb {
        let total = self.total_weight().max(1);
        let mut sums = [0u64; 3];
        for (c, w) in &self.entries {
            for (axis, sum) in sums.iter_mut().enumerate() {
                *sum += c.channel(axis) as u64 * w;
            }
        }
        let avg = |sum: u64| ((sum + total / 2) / total).min(255) as u8;
        Rgb::new(avg(sums[0]), avg(sums[1]), avg(sums[2]))
    }

    /// Split along the widest channel at the weighted median.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let (axis, _) = self.widest_axis();
        // Full color as secondary key keeps the order total.
        self.entries.sort_by_key(|&(c, _)| (c.channel(axis), c));

        let total = self.total_weight();
        let mut accumulated = 0u64;
        let mut split_idx = 1;
        for (i, (_, w)) in self.entries.iter().enumerate() {
            accumulated += w;
            if accumulated * 2 >= total {
                split_idx = i + 1;
                break;
            }
        }
        // At least one entry per side
        split_idx = split_idx.clamp(1, self.entries.len() - 1);

        let right = self.entries.split_off(split_idx);
        (ColorBox::new(self.entries), ColorBox::new(right))
    }
}

/// Reduce `histogram` to at most `max_colors` representative colors.
///
/// When the histogram already has no more than `max_colors` entries its
/// colors are returned unchanged, in histogram order.
pub fn median_cut(histogram: Vec<(Rgb, u64)>, max_colors: usize) -> Vec<Rgb> {
    if histogram.len() <= max_colors {
        return histogram.into_iter().map(|(c, _)| c).collect();
    }

    let mut boxes = Vec::with_capacity(max_colors);
    boxes.push(ColorBox::new(histogram));

    while boxes.len() < max_colors {
        let mut best: Option<(usize, u128)> = None;
        for (i, b) in boxes.iter().enumerate() {
            if !b.can_split() {
                continue;
            }
            let p = b.priority();
            if best.map_or(true, |(_, bp)| p > bp) {
                best = Some((i, p));
            }
        }
        let Some((idx, _)) = best else {
            break;
        };

        let (left, right) = boxes.remove(idx).split();
        boxes.insert(idx, right);
        boxes.insert(idx, left);
    }

    boxes.iter().map(ColorBox::mean).collect()
}
