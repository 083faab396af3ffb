//! # Reorient - circular sequence rotation
//!
//! Circular genomes and plasmids are stored as linear sequences cut at some
//! historical position. When that cut falls inside a gene, downstream gene
//! callers and annotators see two truncated fragments instead of one gene.
//! This library rotates such sequences so that the cut lands in an
//! intergenic region.
//!
//! ## Overview
//!
//! For each sequence a gene oracle predicts the genes. If the first gene is
//! truncated at the start or the last gene at the end, the intergenic
//! regions are ranked by length and the sequence is rotated to the middle of
//! each region in turn, re-running the oracle each time, until no gene is
//! cut any more. Optionally, a duplicated terminal segment left over from
//! circular assembly is removed first.
//!
//! ## Quick Start
//!
//! ```rust
//! use reorient_core::{Reorienter, config::ReorientConfig, oracle::GeneFinder};
//!
//! let reorienter = Reorienter::new(ReorientConfig::default(), GeneFinder::default());
//!
//! let input = b">contig_1\nACGTTGCAACGT\n";
//! let mut output = Vec::new();
//! let summary = reorienter.run(&input[..], &mut output, None)?;
//!
//! println!("{summary}");
//! # Ok::<(), reorient_core::types::ReorientError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Settings for the rotation search and the gene finder
//! - [`engine`]: The rotation search and the FASTA stream runner
//! - [`types`]: Gene annotations, predictions and errors
//! - [`results`]: Per-record outcomes and run summaries
//! - [`sequence`]: The record entity and FASTA input
//! - [`oracle`]: The gene oracle interface and the `orphos-core` gene finder
//! - [`algorithms`]: Interval algebra, intergenic regions, terminal repeats
//! - [`pipeline`]: Order-preserving parallel processing
//! - [`output`]: FASTA and report writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, ReorientError>`](types::ReorientError),
//! covering:
//!
//! - Out-of-range sequence operations
//! - I/O and FASTA parsing errors
//! - Gene oracle failures
//! - Invalid configuration

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod oracle;
pub mod output;
pub mod pipeline;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::{Reorienter, reorient};
pub use types::ReorientError;
