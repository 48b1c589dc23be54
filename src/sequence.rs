//! Sequence input: FASTA reading and input-side cleanup.

use std::path::Path;

use anyhow::{bail, Result};
use bio::io::fasta;

/// Normalize raw sequence text: ASCII-uppercase with whitespace removed.
///
/// The aligners accept arbitrary bytes and perform no normalization of
/// their own; this cleanup belongs to the input layer.
pub fn clean(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Read all records from a FASTA file.
pub fn read_fasta(path: &Path) -> Result<Vec<fasta::Record>> {
    let reader = fasta::Reader::from_file(path)?;
    let records: Vec<fasta::Record> = reader.records().filter_map(|r| r.ok()).collect();
    if records.is_empty() {
        bail!("no sequences found in {}", path.display());
    }
    Ok(records)
}

/// First whitespace-separated token of a record id.
pub fn record_id(record: &fasta::Record) -> String {
    record
        .id()
        .split_whitespace()
        .next()
        .unwrap_or("unknown")
        .to_string()
}
