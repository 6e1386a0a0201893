//! CSV script loader.
//!
//! # CSV format
//!
//! One row per item.  Rows need not be sorted.
//!
//! ```csv
//! at_secs,duration_secs,width,label
//! 0.0,8.0,120,first!
//! 0.5,6.0,80,hello
//! 2.25,10.0,240,a much longer comment
//! ```
//!
//! `duration_secs` and `width` must be positive; `at_secs` must be
//! non-negative.  `label` may be empty.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dk_core::MediaTime;
use dk_lane::Candidate;

use crate::{ScriptEntry, ScriptError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    at_secs:       f64,
    duration_secs: f64,
    width:         f64,
    #[serde(default)]
    label:         String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a script from a CSV file.  Entries are returned sorted by due time.
pub fn load_script_csv(path: &Path) -> Result<Vec<ScriptEntry>, ScriptError> {
    let file = std::fs::File::open(path)
        .map_err(ScriptError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scripts.
pub fn load_script_reader<R: Read>(reader: R) -> Result<Vec<ScriptEntry>, ScriptError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();

    for (i, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
        // Row numbers are 1-based and count the header.
        let row = i + 2;
        let record = result.map_err(|e| ScriptError::Parse(e.to_string()))?;

        if !(record.at_secs.is_finite() && record.at_secs >= 0.0) {
            return Err(ScriptError::Parse(format!(
                "row {row}: at_secs must be non-negative, got {}",
                record.at_secs
            )));
        }
        let candidate = Candidate::new(record.duration_secs, record.width)
            .map_err(|source| ScriptError::Candidate { row, source })?;

        entries.push(ScriptEntry::new(MediaTime(record.at_secs), candidate, record.label));
    }

    // Stable: rows with the same time keep file order.
    entries.sort_by(|a, b| a.at.as_secs().total_cmp(&b.at.as_secs()));
    Ok(entries)
}
