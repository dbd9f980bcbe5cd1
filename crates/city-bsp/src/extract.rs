//! Greedy decomposition of a pixel set into rectangles.
//!
//! The extractor repeatedly takes the leftmost column that still holds
//! pixels, picks its lowest run of contiguous pixels, and widens that run
//! to the right for as long as every next column fully supports it. The
//! resulting block is emitted and its pixels removed. The tiling is exact
//! and disjoint but not minimal in rectangle count.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{ColorKey, Pixel, Rectangle};

/// An inclusive run of integer coordinates `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "Span start must not exceed its end");
        Self { start, end }
    }

    /// Returns `true` if `other` lies entirely inside this span.
    #[inline]
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Number of coordinates covered.
    #[inline]
    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Splits a set of coordinates into maximal runs of consecutive values.
///
/// Input order does not matter and duplicates are ignored. Spans come back
/// sorted by `start`.
pub fn continuous_spans(values: impl IntoIterator<Item = u32>) -> Vec<Span> {
    let mut values: Vec<u32> = values.into_iter().collect();
    values.sort_unstable();
    values.dedup();

    let mut spans = Vec::new();
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return spans;
    };

    let mut current = Span::new(first, first);
    for value in iter {
        if value == current.end + 1 {
            current.end = value;
        } else {
            spans.push(current);
            current = Span::new(value, value);
        }
    }
    spans.push(current);
    spans
}

/// Returns `true` if some span of `spans` contains `span`.
#[inline]
pub fn span_is_supported(span: &Span, spans: &[Span]) -> bool {
    spans.iter().any(|target| target.contains(span))
}

/// Tiles the pixels of one color with disjoint rectangles.
///
/// The union of the returned rectangles is exactly the input set. An empty
/// input yields no rectangles.
pub fn extract_rectangles(pixels: &[Pixel], color: ColorKey) -> Vec<Rectangle> {
    let mut columns: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
    for &(x, y) in pixels {
        columns.entry(x).or_default().insert(y);
    }

    let mut rectangles = Vec::new();

    while let Some((&start_x, first_column)) = columns.first_key_value() {
        let spans = continuous_spans(first_column.iter().copied());
        // Columns are dropped as soon as they empty out, so there is always a span.
        let span = spans[0];

        let mut end_x = start_x;
        while let Some(next_column) = columns.get(&(end_x + 1)) {
            if !span_is_supported(&span, &continuous_spans(next_column.iter().copied())) {
                break;
            }
            end_x += 1;
        }

        for x in start_x..=end_x {
            if let Some(column) = columns.get_mut(&x) {
                for y in span.start..=span.end {
                    column.remove(&y);
                }
                if column.is_empty() {
                    columns.remove(&x);
                }
            }
        }

        rectangles.push(Rectangle::new(
            start_x,
            end_x + 1,
            span.start,
            span.end + 1,
            color,
        ));
    }

    debug!(
        "{}: {} pixels -> {} rectangles",
        color,
        pixels.len(),
        rectangles.len()
    );
    rectangles
}
