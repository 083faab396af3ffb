use std::io::{BufRead, Write};

use crate::algorithms::intergenic::intergenic_intervals;
use crate::config::ReorientConfig;
use crate::oracle::GeneOracle;
use crate::output::{open_output, write_fasta, write_report_header, write_report_row};
use crate::pipeline::map_ordered;
use crate::results::{Outcome, Reoriented, RunSummary};
use crate::sequence::{FastaRecord, Record, fasta_records, open_input};
use crate::types::ReorientError;

/// Rotates a record so that no predicted gene is cut by its ends.
///
/// With [`ReorientConfig::remove_terminal_repeat`] set, a duplicated
/// terminal segment is trimmed first. A record whose outermost genes are
/// complete is returned as is. Otherwise the intergenic regions are tried
/// longest first: the record is rotated to the midpoint of each region and
/// re-annotated, and the first rotation without cut genes wins. When none
/// works, the (possibly trimmed) record is returned in its original
/// orientation.
///
/// # Errors
///
/// Propagates the first oracle error; a failed annotation is never retried.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::ReorientConfig;
/// use reorient_core::engine::reorient;
/// use reorient_core::oracle::GeneOracle;
/// use reorient_core::results::Outcome;
/// use reorient_core::sequence::Record;
/// use reorient_core::types::{GeneAnnotation, Prediction, ReorientError};
///
/// /// Calls every run of `G` a gene.
/// struct GuanineRuns;
///
/// impl GeneOracle for GuanineRuns {
///     fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
///         let mut genes = Vec::new();
///         let mut start = None;
///         for (i, &base) in sequence.iter().chain(&[b'.']).enumerate() {
///             match (base == b'G', start) {
///                 (true, None) => start = Some(i),
///                 (false, Some(s)) => {
///                     genes.push(
///                         GeneAnnotation::new(s + 1, i)
///                             .with_partial_begin(s == 0)
///                             .with_partial_end(i == sequence.len()),
///                     );
///                     start = None;
///                 }
///                 _ => {}
///             }
///         }
///         Ok(Prediction::new(genes, sequence.len()))
///     }
/// }
///
/// // One gene split across the two ends of a circular sequence.
/// let record = Record::new("plasmid", b"GGAAAAAAAAAAGG".to_vec(), &GuanineRuns)?;
/// assert!(!record.is_well_formed());
///
/// let reoriented = reorient(record, &GuanineRuns, &ReorientConfig::default())?;
/// assert_eq!(reoriented.outcome, Outcome::Rotated { offset: 7, attempts: 1 });
/// assert_eq!(reoriented.record.sequence(), b"AAAAAGGGGAAAAA");
/// # Ok::<(), ReorientError>(())
/// ```
pub fn reorient<O: GeneOracle + ?Sized>(
    record: Record,
    oracle: &O,
    config: &ReorientConfig,
) -> Result<Reoriented, ReorientError> {
    let input_length = record.len();

    let record = if config.remove_terminal_repeat {
        let trimmed = record.remove_terminal_repeat(config.min_terminal_repeat_length, oracle)?;
        if let Some(removed) = trimmed.trimmed_length() {
            tracing::info!(
                accession = trimmed.accession(),
                removed,
                "Removed terminal repeat"
            );
        }
        trimmed
    } else {
        record
    };

    if record.is_well_formed() {
        tracing::debug!(
            accession = record.accession(),
            genes = record.genes().len(),
            "No gene crosses the sequence ends"
        );
        return Ok(Reoriented {
            record,
            outcome: Outcome::AlreadyWellFormed,
            input_length,
        });
    }

    let candidates = intergenic_intervals(record.genes(), record.len(), true);
    for (index, candidate) in candidates.iter().enumerate() {
        let offset = candidate.midpoint();
        tracing::debug!(
            accession = record.accession(),
            attempt = index + 1,
            interval = %candidate,
            offset,
            "Trying rotation"
        );

        let rotated = record.rotate(offset, oracle)?;
        if rotated.is_well_formed() {
            tracing::info!(
                accession = rotated.accession(),
                offset,
                attempts = index + 1,
                "Rotated sequence"
            );
            return Ok(Reoriented {
                record: rotated,
                outcome: Outcome::Rotated {
                    offset,
                    attempts: index + 1,
                },
                input_length,
            });
        }
    }

    tracing::warn!(
        accession = record.accession(),
        attempts = candidates.len(),
        "No rotation avoids cutting a gene; keeping original orientation"
    );
    Ok(Reoriented {
        record,
        outcome: Outcome::Exhausted {
            attempts: candidates.len(),
        },
        input_length,
    })
}

/// Runs the rotation search over whole FASTA streams.
///
/// Owns the configuration and the oracle; records are processed on
/// [`ReorientConfig::threads`] workers and written in input order.
///
/// # Examples
///
/// ```rust
/// use reorient_core::Reorienter;
/// use reorient_core::config::ReorientConfig;
/// use reorient_core::oracle::GeneFinder;
///
/// let config = ReorientConfig {
///     threads: 1,
///     ..Default::default()
/// };
/// let reorienter = Reorienter::new(config, GeneFinder::default());
///
/// let input = b">seq1 short\nACGTACGT\n";
/// let mut output = Vec::new();
/// let summary = reorienter.run(&input[..], &mut output, None)?;
///
/// assert_eq!(summary.records, 1);
/// assert_eq!(output, b">seq1 short\nACGTACGT\n");
/// # Ok::<(), reorient_core::types::ReorientError>(())
/// ```
#[derive(Debug)]
pub struct Reorienter<O> {
    /// Settings of the rotation search
    pub config: ReorientConfig,
    oracle: O,
}

impl<O: GeneOracle> Reorienter<O> {
    pub const fn new(config: ReorientConfig, oracle: O) -> Self {
        Self { config, oracle }
    }

    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Annotates and reorients a single FASTA record.
    ///
    /// # Errors
    ///
    /// Propagates oracle errors.
    pub fn process_record(&self, fasta: FastaRecord) -> Result<Reoriented, ReorientError> {
        let record = Record::new(fasta.header(), fasta.sequence, &self.oracle)?;
        reorient(record, &self.oracle, &self.config)
    }

    /// Reorients every record of `input` and writes them to `output` in
    /// input order, optionally adding one `report` row per record.
    ///
    /// # Errors
    ///
    /// Returns [`ReorientError::ConfigError`] for an invalid configuration,
    /// otherwise the first read, oracle or write error in input order.
    pub fn run<B: BufRead>(
        &self,
        input: B,
        output: &mut dyn Write,
        mut report: Option<&mut dyn Write>,
    ) -> Result<RunSummary, ReorientError> {
        self.config.validate()?;

        if let Some(report) = report.as_deref_mut() {
            write_report_header(report)?;
        }

        let mut summary = RunSummary::default();
        map_ordered(
            fasta_records(input)?,
            self.config.threads,
            |fasta| self.process_record(fasta),
            |result| {
                write_fasta(output, result.record.header(), result.record.sequence())?;
                if let Some(report) = report.as_deref_mut() {
                    write_report_row(report, &result)?;
                }
                summary.add(&result);
                Ok(())
            },
        )?;

        output.flush()?;
        if let Some(report) = report.as_deref_mut() {
            report.flush()?;
        }
        Ok(summary)
    }

    /// Like [`run`](Self::run), opening the given paths. `-` stands for
    /// standard input or output; compressed input is detected
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a path cannot be opened, otherwise as
    /// [`run`](Self::run).
    pub fn run_paths(
        &self,
        input: &str,
        output: &str,
        report: Option<&str>,
    ) -> Result<RunSummary, ReorientError> {
        let reader = open_input(input)?;
        let mut writer = open_output(output)?;
        let mut report_writer = report.map(open_output).transpose()?;

        let report = report_writer
            .as_deref_mut()
            .map(|writer| writer as &mut dyn Write);
        self.run(reader, &mut writer, report)
    }
}
