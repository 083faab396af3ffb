//! # Reorient CLI - Circular Sequence Rotation
//!
//! A command-line interface that rotates circular sequences so that no
//! predicted gene is cut by the sequence ends.
//!
//! ## Usage
//!
//! ```bash
//! # Reorient a FASTA file
//! reorient plasmids.fasta rotated.fasta
//!
//! # Read from stdin, write to stdout
//! zcat contigs.fasta.gz | reorient > rotated.fasta
//!
//! # Remove duplicated ends left by circular assembly first
//! reorient --remove-tr assembly.fasta rotated.fasta
//! ```
//!
//! ## Options
//!
//! - `[INPUT]`: Input FASTA file, plain or compressed (default: stdin)
//! - `[OUTPUT]`: Output FASTA file (default: stdout)
//! - `--remove-tr`: Trim a terminal repeat before rotating
//! - `--min-tr-length <N>`: Shortest terminal repeat to trim (default: 21)
//! - `-t, --threads <N>`: Worker threads (default: available cores, at most 4)
//! - `-v, --verbose`: More logging; repeat for debug output
//! - `-p, --mode <MODE>`: Gene prediction mode, `single` or `meta` (default: meta)
//! - `-c, --closed`: Do not allow genes to run off the sequence ends
//! - `-m, --mask`: Do not call genes across runs of N's
//! - `--report <FILE>`: Write a per-record TSV report
//!
//! ## Examples
//!
//! ### Complete Plasmid Collection
//!
//! ```bash
//! reorient -t 8 --report rotation.tsv plasmids.fasta.gz rotated.fasta
//! ```

use clap::builder::{PossibleValuesParser, RangedU64ValueParser};
use clap::{Arg, ArgAction, ArgMatches, Command};
use reorient_core::config::{GeneFinderConfig, ReorientConfig, default_threads};
use reorient_core::constants::DEFAULT_MIN_TERMINAL_REPEAT_LENGTH;
use reorient_core::oracle::GeneFinder;
use reorient_core::sequence::io::STDIO_PATH;
use reorient_core::Reorienter;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("reorient")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rotate circular sequences so that no gene is cut by the sequence ends")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Input FASTA file, optionally compressed (default: stdin)")
                .default_value(STDIO_PATH),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Output FASTA file (default: stdout)")
                .default_value(STDIO_PATH),
        )
        .arg(
            Arg::new("remove-tr")
                .long("remove-tr")
                .action(ArgAction::SetTrue)
                .help("Remove a terminal repeat before rotating"),
        )
        .arg(
            Arg::new("min-tr-length")
                .long("min-tr-length")
                .value_name("N")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                .help("Shortest terminal repeat to remove (default: 21)"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("N")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                .help("Number of worker threads (default: available cores, at most 4)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("mode")
                .short('p')
                .long("mode")
                .value_name("MODE")
                .value_parser(PossibleValuesParser::new(["single", "meta"]))
                .help("Gene prediction mode: single or meta")
                .default_value("meta"),
        )
        .arg(
            Arg::new("closed")
                .short('c')
                .long("closed")
                .action(ArgAction::SetTrue)
                .help("Closed ends (no genes off edges)"),
        )
        .arg(
            Arg::new("mask")
                .short('m')
                .long("mask")
                .action(ArgAction::SetTrue)
                .help("Mask runs of N's"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .value_name("FILE")
                .help("Write a tab-separated report with one row per record"),
        )
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn gene_finder_config(matches: &ArgMatches) -> GeneFinderConfig {
    GeneFinderConfig {
        metagenomic: matches.get_one::<String>("mode").map(String::as_str) != Some("single"),
        closed_ends: matches.get_flag("closed"),
        mask_n_runs: matches.get_flag("mask"),
    }
}

fn reorient_config(matches: &ArgMatches) -> ReorientConfig {
    ReorientConfig {
        remove_terminal_repeat: matches.get_flag("remove-tr"),
        min_terminal_repeat_length: matches
            .get_one::<usize>("min-tr-length")
            .copied()
            .unwrap_or(DEFAULT_MIN_TERMINAL_REPEAT_LENGTH),
        threads: matches
            .get_one::<usize>("threads")
            .copied()
            .unwrap_or_else(default_threads),
    }
}

/// Main entry point for the reorient CLI application.
///
/// Parses command-line arguments, sets up logging, reorients every input
/// record and writes them out in input order.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let config = reorient_config(&matches);
    let oracle = GeneFinder::new(gene_finder_config(&matches));

    let input = matches
        .get_one::<String>("input")
        .map_or(STDIO_PATH, String::as_str);
    let output = matches
        .get_one::<String>("output")
        .map_or(STDIO_PATH, String::as_str);
    let report = matches.get_one::<String>("report").map(String::as_str);

    tracing::debug!(?config, gene_finder = ?oracle.config(), input, output, "Starting");

    let reorienter = Reorienter::new(config, oracle);
    let summary = reorienter.run_paths(input, output, report)?;

    tracing::info!("Done: {summary}");

    Ok(())
}
