use std::panic::{self, AssertUnwindSafe};

use orphos_core::OrphosAnalyzer;
use orphos_core::config::OrphosConfig;
use orphos_core::constants::MINIMUM_EDGE_GENE_LENGTH;
use orphos_core::types::Gene;

use crate::{
    config::GeneFinderConfig,
    constants::UNKNOWN_BASE,
    oracle::GeneOracle,
    types::{GeneAnnotation, Prediction, ReorientError},
};

/// Prodigal-style gene finder backed by [`OrphosAnalyzer`].
///
/// In the default metagenomic mode every sequence is scored against the
/// pre-computed models, so short plasmids and contigs can be annotated
/// without training. Genes that run off a sequence edge come back partial on
/// that side, in forward-strand coordinates.
///
/// Bytes other than `ACGTU` (gaps, IUPAC codes) are read as unknown bases.
///
/// # Examples
///
/// ```rust
/// use reorient_core::config::GeneFinderConfig;
/// use reorient_core::oracle::{GeneFinder, GeneOracle};
///
/// let finder = GeneFinder::new(GeneFinderConfig {
///     mask_n_runs: true,
///     ..Default::default()
/// });
///
/// // Too short to hold any gene
/// let prediction = finder.find_genes(b"ACGT-ACGT")?;
/// assert!(prediction.genes.is_empty());
/// assert_eq!(prediction.sequence_length, 9);
/// # Ok::<(), reorient_core::types::ReorientError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneFinder {
    config: GeneFinderConfig,
}

impl GeneFinder {
    #[must_use]
    pub const fn new(config: GeneFinderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneFinderConfig {
        &self.config
    }

    fn analyzer(&self) -> OrphosAnalyzer {
        OrphosAnalyzer::new(OrphosConfig {
            metagenomic: self.config.metagenomic,
            closed_ends: self.config.closed_ends,
            mask_n_runs: self.config.mask_n_runs,
            circular: false,
            quiet: true,
            ..Default::default()
        })
    }
}

impl GeneOracle for GeneFinder {
    fn find_genes(&self, sequence: &[u8]) -> Result<Prediction, ReorientError> {
        if sequence.len() < MINIMUM_EDGE_GENE_LENGTH {
            return Ok(Prediction::new(Vec::new(), sequence.len()));
        }

        let readable = readable_bases(sequence);
        let analyzer = self.analyzer();
        let results = panic::catch_unwind(AssertUnwindSafe(|| {
            analyzer.analyze_sequence_bytes(&readable, String::new(), None)
        }))
        .map_err(|_| {
            ReorientError::OracleError(format!(
                "gene finder panicked on a {} bp sequence",
                sequence.len()
            ))
        })?
        .map_err(|e| ReorientError::OracleError(e.to_string()))?;

        let mut genes: Vec<GeneAnnotation> = results.genes.iter().map(annotation_from).collect();
        genes.sort_by(|a, b| a.begin.cmp(&b.begin).then(a.end.cmp(&b.end)));

        tracing::trace!(
            genes = genes.len(),
            length = sequence.len(),
            model = results.metagenomic_model.as_deref().unwrap_or("trained"),
            "Gene prediction complete"
        );
        Ok(Prediction::new(genes, sequence.len()))
    }
}

/// Replaces every byte the gene finder cannot read with `N`, so that gaps
/// break reading frames and fall under N-run masking.
fn readable_bases(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .map(|&base| match base.to_ascii_uppercase() {
            b'A' | b'C' | b'G' | b'T' | b'U' => base,
            _ => UNKNOWN_BASE,
        })
        .collect()
}

fn annotation_from(gene: &Gene) -> GeneAnnotation {
    GeneAnnotation::new(gene.coordinates.begin, gene.coordinates.end)
        .with_strand(gene.coordinates.strand)
        .with_partial_begin(gene.annotation.is_partial_left)
        .with_partial_end(gene.annotation.is_partial_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bio::bio_types::strand::Strand;
    use orphos_core::types::{GeneAnnotation as OrphosAnnotation, GeneCoordinates};

    /// Sense codons without start codons, so an in-frame run of them is
    /// open from edge to edge
    const OPEN_CODONS: [&[u8; 3]; 16] = [
        b"GCG", b"CTG", b"AAA", b"GAA", b"GAT", b"CGC", b"GGC", b"ATT", b"ACC", b"CCG", b"CAG",
        b"AAC", b"AGC", b"TTC", b"TAT", b"GTT",
    ];

    fn open_frame(codons: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        let mut sequence = Vec::with_capacity(codons * 3);
        for _ in 0..codons {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            sequence.extend_from_slice(OPEN_CODONS[(state >> 16) as usize % OPEN_CODONS.len()]);
        }
        sequence
    }

    fn orphos_gene(begin: usize, end: usize, strand: Strand, left: bool, right: bool) -> Gene {
        Gene {
            coordinates: GeneCoordinates {
                begin,
                end,
                strand,
                ..Default::default()
            },
            annotation: OrphosAnnotation {
                is_partial_left: left,
                is_partial_right: right,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_gene_conversion() {
        let gene = annotation_from(&orphos_gene(3, 74, Strand::Forward, true, false));
        assert_eq!(gene.begin, 3);
        assert_eq!(gene.end, 74);
        assert_eq!(gene.strand, Strand::Forward);
        assert!(gene.partial_begin);
        assert!(!gene.partial_end);
    }

    #[test]
    fn test_reverse_gene_keeps_forward_sides() {
        let gene = annotation_from(&orphos_gene(155, 226, Strand::Reverse, false, true));
        assert_eq!((gene.begin, gene.end), (155, 226));
        assert_eq!(gene.strand, Strand::Reverse);
        assert!(!gene.partial_begin);
        assert!(gene.partial_end);
    }

    #[test]
    fn test_unreadable_bytes_become_unknown() {
        assert_eq!(readable_bases(b"ACgt-u.RYn"), b"ACgtNuNNNN".to_vec());
    }

    #[test]
    fn test_short_sequences_have_no_genes() {
        let finder = GeneFinder::default();
        for sequence in [&b""[..], &b"ACGT"[..], &[b'A'; MINIMUM_EDGE_GENE_LENGTH - 1][..]] {
            let prediction = finder.find_genes(sequence).unwrap();
            assert!(prediction.genes.is_empty());
            assert_eq!(prediction.sequence_length, sequence.len());
        }
    }

    #[test]
    fn test_gapped_sequence_is_annotated() {
        let frame = open_frame(300, 11);
        let sequence = [&frame[..450], &b"----------"[..], &frame[450..]].concat();

        let prediction = GeneFinder::default().find_genes(&sequence).unwrap();

        assert_eq!(prediction.sequence_length, sequence.len());
        for gene in &prediction.genes {
            assert!(gene.begin >= 1 && gene.begin <= gene.end && gene.end <= sequence.len());
        }
        assert!(
            prediction
                .genes
                .windows(2)
                .all(|pair| pair[0].begin <= pair[1].begin)
        );
    }

    #[test]
    fn test_closed_ends_never_report_partial_genes() {
        let finder = GeneFinder::new(GeneFinderConfig {
            closed_ends: true,
            ..Default::default()
        });
        let prediction = finder.find_genes(&open_frame(600, 3)).unwrap();
        assert!(prediction.genes.iter().all(|gene| !gene.is_partial()));
    }

    #[test]
    fn test_masked_gap_is_not_spanned() {
        let mut sequence = open_frame(400, 5);
        let gap = 600..700;
        sequence[gap.clone()].fill(b'-');

        let finder = GeneFinder::new(GeneFinderConfig {
            mask_n_runs: true,
            ..Default::default()
        });
        let prediction = finder.find_genes(&sequence).unwrap();

        assert!(
            prediction
                .genes
                .iter()
                .all(|gene| gene.end <= gap.start || gene.begin > gap.end)
        );
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let sequence = open_frame(500, 17);
        let finder = GeneFinder::default();
        assert_eq!(
            finder.find_genes(&sequence).unwrap(),
            finder.find_genes(&sequence).unwrap()
        );
    }
}
