//! Batch normalization of a feed export and the per-record CSV report.

use crate::canonical::{ExtractedData, PropertyField};
use crate::feeds::{Adapter, FieldAccess, RawRecord};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Accepted,
    /// Accepted after one or more default substitutions.
    Warned,
    Skipped,
}

/// One CSV report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub reference: String,
    pub status: RecordStatus,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<ExtractedData>,
    pub rows: Vec<ReportRow>,
}

impl BatchOutcome {
    pub fn skipped(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.status == RecordStatus::Skipped)
            .count()
    }
}

/// A feed export is either a JSON array of records or a single record.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, serde_json::Error> {
    match serde_json::from_str::<Value>(input)? {
        Value::Array(records) => Ok(records),
        record => Ok(vec![record]),
    }
}

/// Extracts every record. Fatal records are skipped and reported; in strict
/// mode records that needed defaults are skipped as well.
pub fn normalize_batch(adapter: &Adapter, records: &[RawRecord], strict: bool) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let reference_key = adapter.raw_key(PropertyField::ReferenceNumber.key());

    for (index, raw) in records.iter().enumerate() {
        let reference = reference_key
            .and_then(|key| raw.text(key))
            .unwrap_or_default();

        let row = match adapter.extract(raw) {
            Err(err) => {
                warn!(
                    vendor = %adapter.vendor,
                    index,
                    reference = %reference,
                    error = %err,
                    "record skipped"
                );
                ReportRow {
                    index,
                    reference,
                    status: RecordStatus::Skipped,
                    message: err.to_string(),
                }
            }
            Ok(data) if data.warnings.is_empty() => {
                outcome.accepted.push(data);
                ReportRow {
                    index,
                    reference,
                    status: RecordStatus::Accepted,
                    message: String::new(),
                }
            }
            Ok(data) => {
                let message = data.warnings.join("; ");
                let status = if strict {
                    warn!(
                        vendor = %adapter.vendor,
                        index,
                        reference = %reference,
                        warnings = data.warnings.len(),
                        "record skipped in strict mode"
                    );
                    RecordStatus::Skipped
                } else {
                    outcome.accepted.push(data);
                    RecordStatus::Warned
                };
                ReportRow {
                    index,
                    reference,
                    status,
                    message,
                }
            }
        };
        outcome.rows.push(row);
    }

    info!(
        vendor = %adapter.vendor,
        total = records.len(),
        accepted = outcome.accepted.len(),
        skipped = outcome.skipped(),
        "feed batch normalized"
    );
    outcome
}

pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
