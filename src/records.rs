//! CSV point records.
//!
//! Rows are split on every comma (no quoting) and read by fixed column index: 3 = normalized x,
//! 4 = normalized y, 5 = type code. The simulation also writes `epoch, population, cell id` in
//! columns 0-2 and a header line, either `#`-prefixed or plain (`...,x,y,type`); columns 0-2 and
//! the header are ignored here.

use crate::foundation::error::{CellviewError, CellviewResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const X_COLUMN: usize = 3;
pub const Y_COLUMN: usize = 4;
pub const TYPE_COLUMN: usize = 5;
/// Minimum number of fields a row must carry.
pub const MIN_FIELDS: usize = TYPE_COLUMN + 1;

/// One row of the input file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord {
    /// 1-based source line, for diagnostics.
    pub line: u64,
    /// Normalized x, expected in `[0,1]`.
    pub x: f64,
    /// Normalized y, expected in `[0,1]`.
    pub y: f64,
    /// Raw type code; unknown values are legal.
    pub type_code: i64,
}

/// What to do with a row that has too few fields or non-numeric content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Fail the whole cycle at the first malformed row.
    #[default]
    Abort,
    /// Log the row, count it, and keep going.
    Skip,
}

/// Rows read from one pass over the input, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordBatch {
    pub records: Vec<PointRecord>,
    /// Rows dropped under [`MalformedLinePolicy::Skip`].
    pub skipped: u64,
}

fn csv_reader<R: Read>(r: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(r)
}

/// Open `path` and read every row.
pub fn load_records(path: &Path, policy: MalformedLinePolicy) -> CellviewResult<RecordBatch> {
    let f = File::open(path)
        .map_err(|e| CellviewError::input(format!("open '{}': {e}", path.display())))?;
    read_records(f, policy)
}

pub fn read_records<R: Read>(r: R, policy: MalformedLinePolicy) -> CellviewResult<RecordBatch> {
    let mut batch = RecordBatch::default();
    let mut rdr = csv_reader(r);
    let mut row = csv::StringRecord::new();
    let mut first = true;

    loop {
        let parsed = match rdr.read_record(&mut row) {
            Ok(false) => break,
            Ok(true) => {
                if std::mem::replace(&mut first, false) && is_header_row(&row) {
                    tracing::debug!("skipping header row");
                    continue;
                }
                parse_row(&row)
            }
            Err(e) => {
                first = false;
                Err(classify_csv_error(e)?)
            }
        };

        match (parsed, policy) {
            (Ok(rec), _) => batch.records.push(rec),
            (Err(e), MalformedLinePolicy::Abort) => return Err(e),
            (Err(e), MalformedLinePolicy::Skip) => {
                tracing::warn!("skipping malformed row: {e}");
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}

/// Parse one raw line, as it would appear in the input file.
pub fn parse_line(line: &str) -> CellviewResult<PointRecord> {
    let mut rdr = csv_reader(line.as_bytes());
    let mut row = csv::StringRecord::new();
    match rdr.read_record(&mut row) {
        Ok(true) => parse_row(&row),
        Ok(false) => Err(CellviewError::parse(1, "empty line")),
        Err(e) => Err(classify_csv_error(e)?),
    }
}

/// A plain header names the x column literally, e.g. `epoch,population,cell_id,x,y,type`.
fn is_header_row(row: &csv::StringRecord) -> bool {
    row.get(X_COLUMN).is_some_and(|f| f.eq_ignore_ascii_case("x"))
}

fn parse_row(row: &csv::StringRecord) -> CellviewResult<PointRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or(0);
    if row.len() < MIN_FIELDS {
        return Err(CellviewError::parse(
            line,
            format!("expected at least {MIN_FIELDS} fields, found {}", row.len()),
        ));
    }

    let coord = |idx: usize, name: &str| -> CellviewResult<f64> {
        let raw = &row[idx];
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CellviewError::parse(
                line,
                format!("{name} (column {idx}) is not a finite number: '{raw}'"),
            )),
        }
    };

    let x = coord(X_COLUMN, "x")?;
    let y = coord(Y_COLUMN, "y")?;
    let raw_type = &row[TYPE_COLUMN];
    let type_code = raw_type.parse::<i64>().map_err(|_| {
        CellviewError::parse(
            line,
            format!("type (column {TYPE_COLUMN}) is not an integer: '{raw_type}'"),
        )
    })?;

    Ok(PointRecord {
        line,
        x,
        y,
        type_code,
    })
}

// I/O failures mid-read are input errors for the cycle; anything else is a row-level parse error.
fn classify_csv_error(e: csv::Error) -> CellviewResult<CellviewError> {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    match e.into_kind() {
        csv::ErrorKind::Io(io) => Err(CellviewError::input(format!("read failed: {io}"))),
        kind => Ok(CellviewError::parse(line, format!("{kind:?}"))),
    }
}

#[cfg(test)]
#[path = "../tests/unit/records.rs"]
mod tests;
