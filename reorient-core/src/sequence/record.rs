use std::ops::Range;

use crate::algorithms::terminal_repeat::find_terminal_repeat;
use crate::oracle::GeneOracle;
use crate::sequence::{contains_ignore_case, rotate};
use crate::types::{GeneAnnotation, Prediction, ReorientError};

/// A nucleotide sequence together with the genes predicted on it.
///
/// Records are values: rotating, slicing or trimming yields a new record and
/// runs the oracle on the new sequence, so the annotation always belongs to
/// the sequence it is stored with. The header is the only part that can be
/// replaced without re-annotation.
///
/// # Examples
///
/// ```rust
/// use reorient_core::oracle::GeneOracle;
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
/// let record = Record::new("contig_1 circular=true", b"ACGTACGT".to_vec(), &NoGenes)?;
/// assert_eq!(record.accession(), "contig_1");
/// assert!(record.is_well_formed());
///
/// let rotated = record.rotate(3, &NoGenes)?;
/// assert_eq!(rotated.sequence(), b"TACGTACG");
/// assert_eq!(rotated.reorientation_offset(), Some(3));
/// # Ok::<(), ReorientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    header: String,
    sequence: Vec<u8>,
    prediction: Prediction,
    trimmed_length: Option<usize>,
    reorientation_offset: Option<usize>,
}

impl Record {
    /// Creates a record and annotates it with `oracle`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the oracle.
    pub fn new<O: GeneOracle + ?Sized>(
        header: impl Into<String>,
        sequence: Vec<u8>,
        oracle: &O,
    ) -> Result<Self, ReorientError> {
        let prediction = oracle.find_genes(&sequence)?;
        Ok(Self {
            header: header.into(),
            sequence,
            prediction,
            trimmed_length: None,
            reorientation_offset: None,
        })
    }

    /// Builds a record for a transformed sequence, keeping the header and
    /// trimming information of `self`.
    fn derive<O: GeneOracle + ?Sized>(
        &self,
        sequence: Vec<u8>,
        oracle: &O,
    ) -> Result<Self, ReorientError> {
        let mut derived = Self::new(self.header.clone(), sequence, oracle)?;
        derived.trimmed_length = self.trimmed_length;
        Ok(derived)
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// First whitespace-delimited token of the header
    #[must_use]
    pub fn accession(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or_default()
    }

    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Genes predicted on the current sequence, ordered by `begin`
    #[must_use]
    pub fn genes(&self) -> &[GeneAnnotation] {
        &self.prediction.genes
    }

    #[must_use]
    pub const fn prediction(&self) -> &Prediction {
        &self.prediction
    }

    /// Number of bases removed as a terminal repeat, if any
    #[must_use]
    pub const fn trimmed_length(&self) -> Option<usize> {
        self.trimmed_length
    }

    /// Position, in the coordinates of the sequence before rotation, that
    /// became the first base of this record
    #[must_use]
    pub const fn reorientation_offset(&self) -> Option<usize> {
        self.reorientation_offset
    }

    /// Case-insensitive search for `needle` in the sequence
    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        contains_ignore_case(&self.sequence, needle)
    }

    /// Whether no predicted gene is cut by the sequence ends.
    ///
    /// Only the first gene's left end and the last gene's right end are
    /// looked at. A record without genes is trivially well formed.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match (self.genes().first(), self.genes().last()) {
            (Some(first), Some(last)) => !first.partial_begin && !last.partial_end,
            _ => true,
        }
    }

    /// Returns a new record holding `sequence[range]`.
    ///
    /// # Errors
    ///
    /// Returns [`ReorientError::InvalidSequence`] when the range is out of
    /// bounds, or the oracle's error.
    pub fn slice<O: GeneOracle + ?Sized>(
        &self,
        range: Range<usize>,
        oracle: &O,
    ) -> Result<Self, ReorientError> {
        let sliced = self.sequence.get(range.clone()).ok_or_else(|| {
            ReorientError::InvalidSequence(format!(
                "slice {}..{} out of bounds for sequence of length {}",
                range.start,
                range.end,
                self.len()
            ))
        })?;
        self.derive(sliced.to_vec(), oracle)
    }

    /// Returns a new record rotated so that position `offset` comes first.
    ///
    /// The new record keeps the header and trimmed length and records
    /// `offset` as its reorientation offset. Rotating by the full length is
    /// the same as rotating by zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReorientError::InvalidSequence`] when `offset` exceeds the
    /// sequence length, or the oracle's error.
    pub fn rotate<O: GeneOracle + ?Sized>(
        &self,
        offset: usize,
        oracle: &O,
    ) -> Result<Self, ReorientError> {
        let rotated = rotate(&self.sequence, offset)?;
        let mut derived = self.derive(rotated, oracle)?;
        derived.reorientation_offset = Some(if self.is_empty() {
            0
        } else {
            offset % self.len()
        });
        Ok(derived)
    }

    /// Drops a terminal repeat of at least `min_length` bases.
    ///
    /// When a repeat is found, the returned record is re-annotated and
    /// carries the number of removed bases. Otherwise `self` is returned
    /// as is, without calling the oracle.
    ///
    /// # Errors
    ///
    /// Propagates the oracle's error.
    pub fn remove_terminal_repeat<O: GeneOracle + ?Sized>(
        self,
        min_length: usize,
        oracle: &O,
    ) -> Result<Self, ReorientError> {
        match find_terminal_repeat(&self.sequence, min_length) {
            Some(position) => {
                let removed = self.len() - position;
                let mut trimmed = self.derive(self.sequence[..position].to_vec(), oracle)?;
                trimmed.trimmed_length = Some(removed);
                Ok(trimmed)
            }
            None => Ok(self),
        }
    }

    /// Replaces the header, keeping sequence and annotation
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.sequence.eq_ignore_ascii_case(&other.sequence)
    }
}
