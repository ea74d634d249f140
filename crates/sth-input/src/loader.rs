//! CSV record loader.
//!
//! # CSV format
//!
//! One row per record; a header row is required.  The location is given
//! either as two numeric columns:
//!
//! ```csv
//! begin,end,lat,lng
//! 1583020800,1583024400,25.033964,121.564468
//! ```
//!
//! or as a single delimited column (`,`, `;` or whitespace inside the
//! quoted field):
//!
//! ```csv
//! begin,end,latlng
//! 1583020800,1583024400,"25.033964,121.564468"
//! ```
//!
//! `begin`/`end` are Unix seconds.  Every row is validated as it is read, so a
//! successful load only ever returns hashable records.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sth_core::{LatLng, SpacetimeRecord};

use crate::{InputError, InputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RecordRow {
    begin:  i64,
    end:    i64,
    #[serde(default)]
    lat:    Option<f64>,
    #[serde(default)]
    lng:    Option<f64>,
    #[serde(default)]
    latlng: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every record from a CSV file.
pub fn load_records_csv(path: &Path) -> InputResult<Vec<SpacetimeRecord>> {
    let file = std::fs::File::open(path)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_records_reader<R: Read>(reader: R) -> InputResult<Vec<SpacetimeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();

    for (i, result) in csv_reader.deserialize::<RecordRow>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        let location = resolve_location(&row, line)?;
        let record = SpacetimeRecord::new(row.begin, row.end, location);
        record
            .validate()
            .map_err(|source| InputError::Record { line, source })?;

        log::trace!("line {line}: [{}, {}] at {location}", record.begin, record.end);
        records.push(record);
    }

    log::debug!("loaded {} spacetime records", records.len());
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn resolve_location(row: &RecordRow, line: usize) -> InputResult<LatLng> {
    match (row.lat, row.lng, row.latlng.as_deref()) {
        (Some(lat), Some(lng), None) => Ok(LatLng::new(lat, lng)),
        (None, None, Some(text)) => text
            .parse()
            .map_err(|source| InputError::Record { line, source }),
        _ => Err(InputError::Parse(format!(
            "line {line}: expected either \"lat\" and \"lng\" columns or a single \"latlng\" column"
        ))),
    }
}
