use std::io::Write;

use crate::{constants::REPORT_HEADER, results::Reoriented, types::ReorientError};

/// Write the column header of the per-record report
pub fn write_report_header<W: Write + ?Sized>(writer: &mut W) -> Result<(), ReorientError> {
    writeln!(writer, "{REPORT_HEADER}")?;
    Ok(())
}

/// Write one report row; absent values are written as `-`
pub fn write_report_row<W: Write + ?Sized>(
    writer: &mut W,
    result: &Reoriented,
) -> Result<(), ReorientError> {
    let record = &result.record;
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}",
        record.accession(),
        result.input_length,
        record.len(),
        optional(record.trimmed_length()),
        optional(record.reorientation_offset()),
        result.outcome,
    )?;
    Ok(())
}

fn optional(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
