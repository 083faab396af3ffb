use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

use bio::io::fasta;

use crate::types::ReorientError;

/// Path that stands for standard input or standard output
pub const STDIO_PATH: &str = "-";

/// Compression formats recognised on input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Lzma,
    Zstd,
}

impl Compression {
    /// Identifies the format from the first bytes of a stream.
    ///
    /// ```rust
    /// use reorient_core::sequence::io::Compression;
    ///
    /// assert_eq!(Compression::detect(&[0x1f, 0x8b, 0x08]), Compression::Gzip);
    /// assert_eq!(Compression::detect(b">seq1\n"), Compression::None);
    /// ```
    #[must_use]
    pub fn detect(magic: &[u8]) -> Self {
        match magic {
            [0x1f, 0x8b, ..] => Self::Gzip,
            [b'B', b'Z', b'h', ..] => Self::Bzip2,
            [0xfd, b'7', b'z', b'X', b'Z', 0x00, ..] => Self::Xz,
            [0x28, 0xb5, 0x2f, 0xfd, ..] => Self::Zstd,
            [0x5d, 0x00, 0x00, ..] => Self::Lzma,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Lzma => "lzma",
            Self::Zstd => "zstd",
        };
        f.write_str(name)
    }
}

/// Longest magic number checked by [`Compression::detect`]
const MAGIC_LENGTH: usize = 6;

/// Wraps `reader` in the decoder matching its leading bytes.
///
/// The sniffed bytes are put back in front of the stream, so plain input is
/// passed through untouched.
///
/// # Errors
///
/// Returns an I/O error if the leading bytes cannot be read or the decoder
/// cannot be set up.
pub fn decompress<R: Read + Send + 'static>(
    mut reader: R,
) -> Result<(Compression, Box<dyn Read + Send>), ReorientError> {
    let mut magic = [0u8; MAGIC_LENGTH];
    let mut filled = 0;
    while filled < MAGIC_LENGTH {
        match reader.read(&mut magic[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    let compression = Compression::detect(&magic[..filled]);
    let stream = Cursor::new(magic).take(filled as u64).chain(reader);

    let decoded: Box<dyn Read + Send> = match compression {
        Compression::None => Box::new(stream),
        Compression::Gzip => Box::new(flate2::read::MultiGzDecoder::new(stream)),
        Compression::Bzip2 => Box::new(bzip2::read::MultiBzDecoder::new(stream)),
        Compression::Xz => Box::new(xz2::read::XzDecoder::new_multi_decoder(stream)),
        Compression::Lzma => {
            let decoder = xz2::stream::Stream::new_lzma_decoder(u64::MAX).map_err(io::Error::from)?;
            Box::new(xz2::read::XzDecoder::new_stream(stream, decoder))
        }
        Compression::Zstd => Box::new(zstd::stream::read::Decoder::new(stream)?),
    };
    Ok((compression, decoded))
}

/// Opens `path` for reading, `-` meaning standard input, and transparently
/// decompresses it.
///
/// # Errors
///
/// Returns [`ReorientError::IoError`] if the file cannot be opened or its
/// compression header cannot be read.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead + Send>, ReorientError> {
    let raw: Box<dyn Read + Send> = if path == STDIO_PATH {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(Path::new(path))?)
    };

    let (compression, decoded) = decompress(raw)?;
    tracing::debug!(%compression, input = path, "Opened input");
    Ok(Box::new(BufReader::new(decoded)))
}

/// A record as read from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// The full header line without the leading `>`
    #[must_use]
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.id, description),
            None => self.id.clone(),
        }
    }
}

/// Iterator over the records of a FASTA stream
pub struct FastaRecords<B: BufRead> {
    records: fasta::Records<B>,
}

impl<B: BufRead> Iterator for FastaRecords<B> {
    type Item = Result<FastaRecord, ReorientError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|result| {
            let record = result.map_err(|e| ReorientError::ParseError(e.to_string()))?;
            Ok(FastaRecord {
                id: record.id().to_string(),
                description: record.desc().map(String::from),
                sequence: record.seq().to_vec(),
            })
        })
    }
}

/// Reads FASTA records from `reader`.
///
/// Anything before the first `>` header line carries no record and is
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the stream fails while looking for the first
/// header.
pub fn fasta_records<B: BufRead>(mut reader: B) -> Result<FastaRecords<B>, ReorientError> {
    let mut skipped = 0usize;
    loop {
        let at_header = match reader.fill_buf()?.first() {
            None => break,
            Some(&byte) => byte == b'>',
        };
        if at_header {
            break;
        }
        let mut line = Vec::new();
        skipped += reader.read_until(b'\n', &mut line)?;
    }
    if skipped > 0 {
        tracing::debug!(bytes = skipped, "Skipped data before first FASTA header");
    }

    Ok(FastaRecords {
        records: fasta::Reader::from_bufread(reader).records(),
    })
}

/// Reads every record of a FASTA file, compressed or not
pub fn read_fasta_sequences(filename: &str) -> Result<Vec<FastaRecord>, ReorientError> {
    fasta_records(open_input(filename)?)?.collect()
}
