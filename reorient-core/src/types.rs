use std::fmt;

use bio::bio_types::strand::Strand;
use thiserror::Error;

/// A predicted coding region reported by a [`GeneOracle`](crate::oracle::GeneOracle).
///
/// Coordinates are 1-based and inclusive, relative to the sequence that was
/// handed to the oracle. The partial flags describe truncation at the left
/// (`begin`) and right (`end`) edges of that sequence, independent of strand.
///
/// # Examples
///
/// ```rust
/// use reorient_core::types::GeneAnnotation;
///
/// let gene = GeneAnnotation::new(90, 100).with_partial_end(true);
/// assert_eq!(gene.len(), 11);
/// assert!(gene.is_partial());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneAnnotation {
    /// First base of the gene (1-based)
    pub begin: usize,
    /// Last base of the gene (1-based, inclusive)
    pub end: usize,
    /// Strand orientation (forward/reverse)
    pub strand: Strand,
    /// Whether the gene runs off the left edge of the sequence
    pub partial_begin: bool,
    /// Whether the gene runs off the right edge of the sequence
    pub partial_end: bool,
}

impl Default for GeneAnnotation {
    fn default() -> Self {
        Self {
            begin: 0,
            end: 0,
            strand: Strand::Unknown,
            partial_begin: false,
            partial_end: false,
        }
    }
}

impl GeneAnnotation {
    /// Create a complete forward-strand gene spanning `begin..=end`
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self {
            begin,
            end,
            strand: Strand::Forward,
            partial_begin: false,
            partial_end: false,
        }
    }

    #[must_use]
    pub const fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    #[must_use]
    pub const fn with_partial_begin(mut self, partial: bool) -> Self {
        self.partial_begin = partial;
        self
    }

    #[must_use]
    pub const fn with_partial_end(mut self, partial: bool) -> Self {
        self.partial_end = partial;
        self
    }

    /// Length of the gene in base pairs
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.begin)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    /// Whether either end of the gene is truncated
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.partial_begin || self.partial_end
    }
}

impl fmt::Display for GeneAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}({});partial={}{}",
            self.begin,
            self.end,
            self.strand.strand_symbol(),
            if self.partial_begin { "1" } else { "0" },
            if self.partial_end { "1" } else { "0" },
        )
    }
}

/// Output of a single oracle invocation.
///
/// `genes` is ordered by ascending `begin`; `sequence_length` is the length
/// the oracle worked on and bounds the intergenic search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prediction {
    pub genes: Vec<GeneAnnotation>,
    pub sequence_length: usize,
}

impl Prediction {
    #[must_use]
    pub const fn new(genes: Vec<GeneAnnotation>, sequence_length: usize) -> Self {
        Self {
            genes,
            sequence_length,
        }
    }
}

/// Error types that can occur while reorienting sequences
#[derive(Error, Debug)]
pub enum ReorientError {
    /// Invalid input sequence or an operation outside its bounds
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// The gene annotation oracle failed on a sequence
    #[error("Gene prediction failed: {0}")]
    OracleError(String),
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
    /// The worker pool could not be built or lost its workers
    #[error("Worker pool error: {0}")]
    WorkerPoolError(String),
}
