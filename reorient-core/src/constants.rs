// =============================================================================
// Rotation search
// =============================================================================

/// Default minimum length of a terminal repeat before it is trimmed
pub const DEFAULT_MIN_TERMINAL_REPEAT_LENGTH: usize = 21;

/// Upper bound on the default worker count
pub const DEFAULT_MAX_THREADS: usize = 4;

/// Number of in-flight records per worker in the ordered pipeline
pub const PIPELINE_WINDOW_PER_WORKER: usize = 4;

// =============================================================================
// Gene finder
// =============================================================================

/// Stand-in for bases the gene finder cannot read
pub const UNKNOWN_BASE: u8 = b'N';

// =============================================================================
// Output
// =============================================================================

/// Sequence line width for FASTA output
pub const FASTA_LINE_WIDTH: usize = 60;

/// Column header of the per-record TSV report
pub const REPORT_HEADER: &str =
    "accession\tinput_length\toutput_length\ttrimmed_length\toffset\toutcome";
