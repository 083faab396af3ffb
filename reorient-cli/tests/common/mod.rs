#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Sense codons that are not start codons
const OPEN_CODONS: [&str; 16] = [
    "GCG", "CTG", "AAA", "GAA", "GAT", "CGC", "GGC", "ATT", "ACC", "CCG", "CAG", "AAC", "AGC",
    "TTC", "TAT", "GTT",
];

/// Stop codons in every frame on both strands, and no repeated motif
pub const LEFT_FLANK: &str = "TTATTACCTAGTAACTAGCTAGCTAATGACTAGTCA";
pub const RIGHT_FLANK: &str = "TAGCCTACTCACTAGTTAGCTAGTAGTTATAAATAG";

/// 120 bp with a stop codon every few bases in all six frames
pub fn spacer() -> String {
    "TTAA".repeat(30)
}

/// `codons` pseudo-random open codons: no stop and no start in frame.
pub fn open_frame(codons: usize, seed: u32) -> String {
    let mut state = seed;
    let mut sequence = String::with_capacity(codons * 3);
    for _ in 0..codons {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        sequence.push_str(OPEN_CODONS[(state >> 16) as usize % OPEN_CODONS.len()]);
    }
    sequence
}

/// A gene of `codons` open codons between ATG and TAA
pub fn gene(codons: usize, seed: u32) -> String {
    format!("ATG{}TAA", open_frame(codons, seed))
}

/// 1326 bp circular sequence whose 1206 bp gene is cut in half by the ends.
///
/// The stop-dense spacer occupies 603..723; any rotation into it keeps
/// the gene whole.
pub fn wrapped_sequence() -> String {
    let gene = gene(400, 1);
    format!("{}{}{}", &gene[603..], spacer(), &gene[..603])
}

pub const WRAPPED_SPACER: std::ops::Range<usize> = 603..723;

/// 978 bp with one gene and no open frame reaching either end
pub fn well_formed_sequence() -> String {
    format!("{LEFT_FLANK}{}{RIGHT_FLANK}", gene(300, 2))
}

/// 3000 bp circular sequence that is one open frame all the way round.
///
/// Every rotation leaves a gene running off both ends.
pub fn endless_frame() -> String {
    open_frame(1_000, 5)
}

/// Circular shift of `sequence` by `offset`
pub fn rotate(sequence: &str, offset: usize) -> String {
    format!("{}{}", &sequence[offset..], &sequence[..offset])
}

/// Renders records as FASTA wrapped at 60 columns, the way the tool writes
/// them.
pub fn fasta(records: &[(&str, &str)]) -> String {
    let mut text = String::new();
    for (header, sequence) in records {
        text.push('>');
        text.push_str(header);
        text.push('\n');
        for line in sequence.as_bytes().chunks(60) {
            text.push_str(std::str::from_utf8(line).unwrap());
            text.push('\n');
        }
    }
    text
}

/// Splits FASTA text back into `(header, sequence)` pairs
pub fn parse_fasta(text: &str) -> Vec<(String, String)> {
    let mut records: Vec<(String, String)> = Vec::new();
    for line in text.lines() {
        if let Some(header) = line.strip_prefix('>') {
            records.push((header.to_string(), String::new()));
        } else if let Some((_, sequence)) = records.last_mut() {
            sequence.push_str(line.trim_end());
        }
    }
    records
}

/// One parsed report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub accession: String,
    pub input_length: usize,
    pub output_length: usize,
    pub trimmed_length: Option<usize>,
    pub offset: Option<usize>,
    pub outcome: String,
}

pub fn parse_report(text: &str) -> Vec<ReportRow> {
    let optional = |field: &str| (field != "-").then(|| field.parse().unwrap());
    text.lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 6, "malformed report row: {line}");
            ReportRow {
                accession: fields[0].to_string(),
                input_length: fields[1].parse().unwrap(),
                output_length: fields[2].parse().unwrap(),
                trimmed_length: optional(fields[3]),
                offset: optional(fields[4]),
                outcome: fields[5].to_string(),
            }
        })
        .collect()
}

pub fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn reorient_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reorient").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs the CLI on `input`, writing to a file in `dir`, and returns the
/// written FASTA.
pub fn run_reorient(dir: &TempDir, input: &Path, args: &[&str]) -> String {
    let output = dir.path().join("out.fasta");
    reorient_cmd()
        .args(args)
        .arg(input)
        .arg(&output)
        .assert()
        .success();
    fs::read_to_string(output).unwrap()
}

/// Like [`run_reorient`], also returning the parsed `--report`.
pub fn run_with_report(dir: &TempDir, input: &Path, args: &[&str]) -> (String, Vec<ReportRow>) {
    let report = dir.path().join("report.tsv");
    let mut args = args.to_vec();
    args.extend(["--report", report.to_str().unwrap()]);
    let output = run_reorient(dir, input, &args);
    (output, parse_report(&fs::read_to_string(report).unwrap()))
}
