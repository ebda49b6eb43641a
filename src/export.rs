// src/export.rs
use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::config::consts::HEADER;
use crate::config::options::ExportFormat;
use crate::data::NominationRecord;

/// Serialize `records` (header first) into `out` using `format`'s delimiter.
/// Fields are quoted only when they need it.
pub fn write_records<W: Write>(
    out: W,
    records: &[NominationRecord],
    format: ExportFormat,
) -> csv::Result<()> {
    let mut w = WriterBuilder::new()
        .delimiter(format.delim())
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .from_writer(out);

    w.write_record(HEADER)?;
    for r in records {
        w.write_record(r.to_row())?;
    }
    w.flush()?;
    Ok(())
}

/// In-memory rendering, used by tests and the bench.
pub fn to_export_string(records: &[NominationRecord], format: ExportFormat) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records, format)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
