//! Nucleotide sequences and the records carrying them.
//!
//! ## Modules
//!
//! - [`record`]: The annotated sequence record the rotation search works on
//! - [`io`]: FASTA reading with compressed-input detection
//!
//! ## Examples
//!
//! ```rust
//! use reorient_core::sequence::{contains_ignore_case, rotate};
//!
//! let rotated = rotate(b"ACGTTT", 2)?;
//! assert_eq!(rotated, b"GTTTAC");
//! assert!(contains_ignore_case(b"acgtTT", b"GTT"));
//! # Ok::<(), reorient_core::types::ReorientError>(())
//! ```

pub mod io;
pub mod record;

use memchr::memmem;

use crate::types::ReorientError;

pub use io::{FastaRecord, FastaRecords, fasta_records, open_input, read_fasta_sequences};
pub use record::Record;

/// Circularly shifts `sequence` left by `offset` positions.
///
/// The result is `sequence[offset..]` followed by `sequence[..offset]`, so
/// rotating by `0` or by the full length returns the sequence unchanged.
///
/// # Errors
///
/// Returns [`ReorientError::InvalidSequence`] when `offset` exceeds the
/// sequence length.
pub fn rotate(sequence: &[u8], offset: usize) -> Result<Vec<u8>, ReorientError> {
    if offset > sequence.len() {
        return Err(ReorientError::InvalidSequence(format!(
            "rotation offset {} exceeds sequence length {}",
            offset,
            sequence.len()
        )));
    }

    let mut rotated = sequence.to_vec();
    rotated.rotate_left(offset);
    Ok(rotated)
}

/// Case-insensitive substring search
#[must_use]
pub fn contains_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    let haystack = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    memmem::find(&haystack, &needle).is_some()
}
