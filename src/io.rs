//! CSV ingestion and line output around the engine.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::traceback::Alignment;
use crate::AlignerError;

/// Two sequences taken from one data row of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub seq_1: String,
    pub seq_2: String,
    /// 1-based line of the row in the source, header included.
    pub row: u64,
}

impl SequencePair {
    pub fn new(seq_1: impl Into<String>, seq_2: impl Into<String>) -> Self {
        Self {
            seq_1: seq_1.into(),
            seq_2: seq_2.into(),
            row: 0,
        }
    }
}

/// Reads two-column rows. Any row with a different column count fails the
/// whole read with [`AlignerError::InvalidInputRow`].
pub fn read_pairs<R: Read>(
    reader: R,
    has_header: bool,
) -> Result<Vec<SequencePair>, AlignerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = record.position().map_or(0, |p| p.line());
        match (record.len(), record.get(0), record.get(1)) {
            (2, Some(seq_1), Some(seq_2)) => pairs.push(SequencePair {
                seq_1: seq_1.to_string(),
                seq_2: seq_2.to_string(),
                row,
            }),
            (columns, _, _) => return Err(AlignerError::InvalidInputRow { row, columns }),
        }
    }

    debug!("read {} sequence pairs", pairs.len());
    Ok(pairs)
}

pub fn read_pairs_from_path<P: AsRef<Path>>(
    path: P,
    has_header: bool,
) -> Result<Vec<SequencePair>, AlignerError> {
    let file = File::open(path.as_ref())?;
    read_pairs(file, has_header)
}

/// Writes one `<aligned_1> <aligned_2> <score>` line per alignment.
pub fn write_alignments<W: Write>(
    mut writer: W,
    alignments: &[Alignment],
) -> Result<(), AlignerError> {
    for alignment in alignments {
        writeln!(writer, "{alignment}")?;
    }
    writer.flush()?;
    Ok(())
}
