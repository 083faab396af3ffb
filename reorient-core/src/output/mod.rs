//! Writers for reoriented records.
//!
//! ## Supported Formats
//!
//! - **FASTA**: The reoriented sequences, wrapped at 60 columns
//! - **TSV report**: One row per record with lengths, offset and outcome
//!
//! ## Examples
//!
//! ```rust
//! use reorient_core::output::write_fasta;
//!
//! let mut buffer = Vec::new();
//! write_fasta(&mut buffer, "seq1 circular", b"ACGT")?;
//! assert_eq!(buffer, b">seq1 circular\nACGT\n");
//! # Ok::<(), reorient_core::types::ReorientError>(())
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sequence::io::STDIO_PATH;
use crate::types::ReorientError;

mod formats {
    pub mod fasta;
    pub mod tsv;
}

pub use formats::fasta::{write_fasta, write_wrapped};
pub use formats::tsv::{write_report_header, write_report_row};

/// Opens `path` for buffered writing, `-` meaning standard output
///
/// # Errors
///
/// Returns [`ReorientError::IoError`] if the file cannot be created.
pub fn open_output(path: &str) -> Result<Box<dyn Write>, ReorientError> {
    if path == STDIO_PATH {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        Ok(Box::new(BufWriter::new(File::create(Path::new(path))?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_output_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fa");
        {
            let mut writer = open_output(path.to_str().unwrap()).unwrap();
            write_fasta(&mut writer, "seq1", b"ACGT").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">seq1\nACGT\n");
    }

    #[test]
    fn test_open_output_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.fa");
        assert!(matches!(
            open_output(path.to_str().unwrap()),
            Err(ReorientError::IoError(_))
        ));
    }
}
