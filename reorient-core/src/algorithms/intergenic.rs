use crate::algorithms::intervals::{Interval, difference, merge};
use crate::types::GeneAnnotation;

/// Positions occupied by the given genes, one interval per gene.
///
/// Each gene maps to `(begin - 1, end)`: the 1-based begin becomes 0-based
/// while `end` is kept as is, so the interval also covers the base right
/// after the gene.
#[must_use]
pub fn gene_intervals(genes: &[GeneAnnotation]) -> Vec<Interval> {
    genes
        .iter()
        .map(|gene| Interval::new(gene.begin.saturating_sub(1), gene.end))
        .collect()
}

/// Non-coding intervals of a sequence of `sequence_length` bases.
///
/// Returns the maximal runs of `0..sequence_length` not covered by the
/// merged gene intervals, in ascending order. With `rank_by_length`, the
/// runs are stably sorted by descending [`Interval::span`], so that equally
/// long runs keep their left-to-right order.
///
/// # Examples
///
/// ```rust
/// use reorient_core::algorithms::intergenic::intergenic_intervals;
/// use reorient_core::algorithms::intervals::Interval;
/// use reorient_core::types::GeneAnnotation;
///
/// let genes = [GeneAnnotation::new(1, 20), GeneAnnotation::new(90, 100)];
/// let candidates = intergenic_intervals(&genes, 100, true);
/// assert_eq!(candidates, vec![Interval::new(21, 88)]);
/// ```
#[must_use]
pub fn intergenic_intervals(
    genes: &[GeneAnnotation],
    sequence_length: usize,
    rank_by_length: bool,
) -> Vec<Interval> {
    if sequence_length == 0 {
        return Vec::new();
    }

    let occupied = merge(&gene_intervals(genes));
    let mut intervals = difference(&[Interval::new(0, sequence_length - 1)], &occupied);

    if rank_by_length {
        intervals.sort_by(|a, b| b.span().cmp(&a.span()));
    }
    intervals
}
