use std::fmt;

use crate::sequence::Record;

/// How the rotation search ended for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No gene was cut by the sequence ends; nothing was rotated.
    AlreadyWellFormed,
    /// The record was rotated to `offset` after trying `attempts` candidates.
    Rotated { offset: usize, attempts: usize },
    /// Every one of the `attempts` candidates still cut a gene; the record
    /// is returned in its original orientation.
    Exhausted { attempts: usize },
}

impl Outcome {
    /// Short name used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyWellFormed => "already_well_formed",
            Self::Rotated { .. } => "rotated",
            Self::Exhausted { .. } => "exhausted",
        }
    }

    /// Number of candidate rotations that were annotated
    #[must_use]
    pub const fn attempts(&self) -> usize {
        match self {
            Self::AlreadyWellFormed => 0,
            Self::Rotated { attempts, .. } | Self::Exhausted { attempts } => *attempts,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of reorienting a single record.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::ReorientConfig;
/// use reorient_core::engine::reorient;
/// use reorient_core::oracle::GeneOracle;
/// use reorient_core::results::Outcome;
/// use reorient_core::sequence::Record;
/// use reorient_core::types::{Prediction, ReorientError};
///
/// struct NoGenes;
///
/// impl GeneOracle for NoGenes {
///     fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
///         Ok(Prediction::new(Vec::new(), sequence.len()))
///     }
/// }
///
/// let record = Record::new("chr", b"ACGTACGT".to_vec(), &NoGenes)?;
/// let reoriented = reorient(record, &NoGenes, &ReorientConfig::default())?;
///
/// assert_eq!(reoriented.outcome, Outcome::AlreadyWellFormed);
/// assert_eq!(reoriented.input_length, 8);
/// assert_eq!(reoriented.record.reorientation_offset(), None);
/// # Ok::<(), ReorientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Reoriented {
    /// The record to write out
    pub record: Record,
    /// How the search ended
    pub outcome: Outcome,
    /// Length of the record as read, before any trimming
    pub input_length: usize,
}

/// Counters over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub already_well_formed: usize,
    pub rotated: usize,
    pub exhausted: usize,
    pub trimmed: usize,
}

impl RunSummary {
    pub fn add(&mut self, result: &Reoriented) {
        self.records += 1;
        match result.outcome {
            Outcome::AlreadyWellFormed => self.already_well_formed += 1,
            Outcome::Rotated { .. } => self.rotated += 1,
            Outcome::Exhausted { .. } => self.exhausted += 1,
        }
        if result.record.trimmed_length().is_some() {
            self.trimmed += 1;
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} rotated, {} already well formed, {} exhausted, {} trimmed",
            self.records, self.rotated, self.already_well_formed, self.exhausted, self.trimmed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_names_and_attempts() {
        assert_eq!(Outcome::AlreadyWellFormed.to_string(), "already_well_formed");
        assert_eq!(Outcome::AlreadyWellFormed.attempts(), 0);

        let rotated = Outcome::Rotated {
            offset: 54,
            attempts: 2,
        };
        assert_eq!(rotated.as_str(), "rotated");
        assert_eq!(rotated.attempts(), 2);

        let exhausted = Outcome::Exhausted { attempts: 3 };
        assert_eq!(exhausted.to_string(), "exhausted");
        assert_eq!(exhausted.attempts(), 3);
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            records: 4,
            already_well_formed: 1,
            rotated: 2,
            exhausted: 1,
            trimmed: 0,
        };
        assert_eq!(
            summary.to_string(),
            "4 records: 2 rotated, 1 already well formed, 1 exhausted, 0 trimmed"
        );
    }
}
