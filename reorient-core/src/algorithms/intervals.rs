//! Set operations over closed integer ranges on a single coordinate axis.

use std::fmt;

/// A closed range `start..=end` of sequence positions.
///
/// Ordering is lexicographic on `(start, end)`, which is the order produced
/// by [`merge`] and [`difference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Distance between the two endpoints (`end - start`).
    ///
    /// This is the measure intergenic candidates are ranked by; it is one
    /// less than the number of positions covered.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Centre of the interval, rounding halves to the nearest even position.
    ///
    /// ```rust
    /// use reorient_core::algorithms::intervals::Interval;
    ///
    /// assert_eq!(Interval::new(0, 4).midpoint(), 2);
    /// assert_eq!(Interval::new(0, 5).midpoint(), 2); // 2.5 -> 2
    /// assert_eq!(Interval::new(2, 5).midpoint(), 4); // 3.5 -> 4
    /// ```
    #[must_use]
    pub const fn midpoint(&self) -> usize {
        let sum = self.start + self.end;
        let floor = sum / 2;
        if sum % 2 == 1 && floor % 2 == 1 {
            floor + 1
        } else {
            floor
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Merges overlapping intervals.
///
/// Intervals are sorted by `(start, end)` and folded left to right: the
/// current interval joins the last accumulated one when its start falls
/// within `last.start..=last.end`. Intervals that are merely adjacent
/// (`current.start == last.end + 1`) stay separate.
///
/// ```rust
/// use reorient_core::algorithms::intervals::{merge, Interval};
///
/// let merged = merge(&[Interval::new(5, 9), Interval::new(0, 5), Interval::new(10, 12)]);
/// assert_eq!(merged, vec![Interval::new(0, 9), Interval::new(10, 12)]);
/// ```
#[must_use]
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        match merged.last_mut() {
            Some(last) if last.start <= current.start && current.start <= last.end => {
                last.end = last.end.max(current.end);
            }
            _ => merged.push(current),
        }
    }
    merged
}

/// Collapses intervals into maximal runs of covered positions.
///
/// Unlike [`merge`], adjacent intervals are joined, and empty
/// (`start > end`) intervals are dropped.
fn coalesce(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals
        .iter()
        .copied()
        .filter(|interval| interval.start <= interval.end)
        .collect();
    sorted.sort_unstable();

    let mut runs: Vec<Interval> = Vec::with_capacity(sorted.len());
    for current in sorted {
        match runs.last_mut() {
            Some(last) if current.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(current.end);
            }
            _ => runs.push(current),
        }
    }
    runs
}

/// Positions covered by `a` but by no interval of `b`, as maximal runs.
///
/// The result equals expanding `a` into its set of positions, removing every
/// position covered by `b` and regrouping what is left into maximal
/// contiguous runs in ascending order. It is computed with a single sweep
/// over both inputs, without materialising positions.
///
/// ```rust
/// use reorient_core::algorithms::intervals::{difference, Interval};
///
/// let rest = difference(&[Interval::new(0, 99)], &[Interval::new(10, 19), Interval::new(50, 99)]);
/// assert_eq!(rest, vec![Interval::new(0, 9), Interval::new(20, 49)]);
/// ```
#[must_use]
pub fn difference(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let kept = coalesce(a);
    let removed = coalesce(b);

    let mut result = Vec::new();
    let mut first_relevant = 0;

    for interval in kept {
        while first_relevant < removed.len() && removed[first_relevant].end < interval.start {
            first_relevant += 1;
        }

        let mut cursor = interval.start;
        let mut exhausted = false;
        let mut index = first_relevant;
        while index < removed.len() && removed[index].start <= interval.end {
            let cut = removed[index];
            if cut.start > cursor {
                result.push(Interval::new(cursor, cut.start - 1));
            }
            if cut.end >= interval.end {
                exhausted = true;
                break;
            }
            cursor = cursor.max(cut.end + 1);
            index += 1;
        }

        if !exhausted && cursor <= interval.end {
            result.push(Interval::new(cursor, interval.end));
        }
        first_relevant = index;
    }

    result
}
