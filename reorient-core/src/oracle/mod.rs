//! Gene annotation oracles.
//!
//! The rotation search only needs to know where genes are and whether they
//! are cut by the sequence ends. Anything that can answer that for a raw
//! nucleotide sequence implements [`GeneOracle`] and is passed in
//! explicitly; [`GeneFinder`] wraps the Prodigal-style predictor of
//! `orphos-core`.

pub mod gene_finder;

use std::sync::Arc;

use crate::types::{Prediction, ReorientError};

pub use gene_finder::GeneFinder;

/// A deterministic gene predictor.
///
/// Implementations must return genes ordered by ascending `begin`, with
/// partial flags relative to the ends of the sequence they were given. The
/// same input has to yield the same prediction.
///
/// # Examples
///
/// ```rust
/// use reorient_core::oracle::GeneOracle;
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
/// let prediction = NoGenes.find_genes(b"ACGT")?;
/// assert_eq!(prediction.sequence_length, 4);
/// # Ok::<(), ReorientError>(())
/// ```
pub trait GeneOracle: Send + Sync {
    /// Predicts the genes of `sequence`.
    ///
    /// # Errors
    ///
    /// Returns [`ReorientError::OracleError`] (or any other variant) when the
    /// sequence cannot be annotated.
    fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError>;
}

impl<T: GeneOracle + ?Sized> GeneOracle for &T {
    fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
        (**self).find_genes(sequence)
    }
}

impl<T: GeneOracle + ?Sized> GeneOracle for Box<T> {
    fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
        (**self).find_genes(sequence)
    }
}

impl<T: GeneOracle + ?Sized> GeneOracle for Arc<T> {
    fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
        (**self).find_genes(sequence)
    }
}
