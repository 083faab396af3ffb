use std::io::Write;

use crate::{constants::FASTA_LINE_WIDTH, types::ReorientError};

/// Write one FASTA record, the sequence wrapped at 60 columns
pub fn write_fasta<W: Write + ?Sized>(
    writer: &mut W,
    header: &str,
    sequence: &[u8],
) -> Result<(), ReorientError> {
    writeln!(writer, ">{header}")?;
    write_wrapped(writer, sequence, FASTA_LINE_WIDTH)
}

/// Write `sequence` as lines of at most `width` characters.
///
/// Lines are cut at exactly `width` bytes regardless of content; an empty
/// sequence writes nothing.
pub fn write_wrapped<W: Write + ?Sized>(
    writer: &mut W,
    sequence: &[u8],
    width: usize,
) -> Result<(), ReorientError> {
    for line in sequence.chunks(width.max(1)) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fasta(header: &str, sequence: &[u8]) -> String {
        let mut buffer = Vec::new();
        write_fasta(&mut buffer, header, sequence).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_short_sequence_single_line() {
        assert_eq!(fasta("seq1", b"ACGT"), ">seq1\nACGT\n");
    }

    #[test]
    fn test_wraps_at_sixty_columns() {
        let sequence = vec![b'A'; 130];
        let output = fasta("seq1 long", &sequence);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ">seq1 long");
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_line() {
        let output = fasta("seq1", &[b'C'; 120]);
        assert_eq!(output.lines().count(), 3);
        assert!(output.ends_with("C\n"));
    }

    #[test]
    fn test_hyphens_are_not_break_points() {
        let mut sequence = vec![b'A'; 58];
        sequence.extend_from_slice(b"--TT");
        let output = fasta("gapped", &sequence);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1].len(), 60);
        assert!(lines[1].ends_with("--"));
        assert_eq!(lines[2], "TT");
    }

    #[test]
    fn test_empty_sequence_writes_header_only() {
        assert_eq!(fasta("empty", b""), ">empty\n");
    }
}
