use crate::constants::{DEFAULT_MAX_THREADS, DEFAULT_MIN_TERMINAL_REPEAT_LENGTH};
use crate::types::ReorientError;

/// Configuration settings for the rotation search.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::ReorientConfig;
///
/// let config = ReorientConfig {
///     remove_terminal_repeat: true,
///     threads: 2,
///     ..Default::default()
/// };
/// assert_eq!(config.min_terminal_repeat_length, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorientConfig {
    /// Trim a duplicated terminal segment before searching for a rotation.
    ///
    /// **Default**: `false`
    pub remove_terminal_repeat: bool,

    /// Shortest prefix that has to reappear at the end to count as a
    /// terminal repeat.
    ///
    /// **Default**: `21`
    pub min_terminal_repeat_length: usize,

    /// Number of worker threads used to process records in parallel.
    ///
    /// **Default**: the number of available cores, capped at 4
    pub threads: usize,
}

impl Default for ReorientConfig {
    fn default() -> Self {
        Self {
            remove_terminal_repeat: false,
            min_terminal_repeat_length: DEFAULT_MIN_TERMINAL_REPEAT_LENGTH,
            threads: default_threads(),
        }
    }
}

impl ReorientConfig {
    /// Checks that every setting is within its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ReorientError::ConfigError`] when the terminal repeat length
    /// or the thread count is zero.
    pub fn validate(&self) -> Result<(), ReorientError> {
        if self.min_terminal_repeat_length == 0 {
            return Err(ReorientError::ConfigError(
                "minimum terminal repeat length must be at least 1".to_string(),
            ));
        }
        if self.threads == 0 {
            return Err(ReorientError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Number of workers used when none is configured
#[must_use]
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(DEFAULT_MAX_THREADS)
}

/// Configuration of the Prodigal-style gene finder used as oracle.
///
/// Passed explicitly to [`GeneFinder`](crate::oracle::GeneFinder) so that
/// two finders with different settings can coexist in one process.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::GeneFinderConfig;
///
/// let config = GeneFinderConfig {
///     mask_n_runs: true,
///     ..Default::default()
/// };
/// assert!(config.metagenomic);
/// assert!(!config.closed_ends);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneFinderConfig {
    /// Use the pre-computed metagenomic models instead of training on each
    /// sequence.
    ///
    /// Single genome training needs tens of kilobases of sequence, which
    /// plasmids and most contigs do not have.
    ///
    /// **Default**: `true`
    pub metagenomic: bool,

    /// Treat sequences as having closed ends.
    ///
    /// When `true`, no gene may run off a sequence edge, so nothing is ever
    /// reported as partial.
    ///
    /// **Default**: `false`
    pub closed_ends: bool,

    /// Prevent genes from spanning runs of unknown bases.
    ///
    /// **Default**: `false`
    pub mask_n_runs: bool,
}

impl Default for GeneFinderConfig {
    fn default() -> Self {
        Self {
            metagenomic: true,
            closed_ends: false,
            mask_n_runs: false,
        }
    }
}
