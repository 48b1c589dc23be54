//! Tabular output, one tab-separated line per alignment.

use std::io::{self, Write};

use crate::align::Alignment;
use crate::stats::AlignmentMetrics;

/// Write one alignment as a tab-separated line.
///
/// Columns: query id, subject id, percent identity, alignment length,
/// matches, mismatches, gaps, query start, query end, subject start,
/// subject end, raw score.
pub fn write_tabular<W: Write>(
    writer: &mut W,
    query_id: &str,
    subject_id: &str,
    alignment: &Alignment,
    metrics: &AlignmentMetrics,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        query_id,
        subject_id,
        metrics.identity,
        metrics.length,
        metrics.matches,
        metrics.mismatches,
        metrics.gaps,
        alignment.q_start,
        alignment.q_end,
        alignment.s_start,
        alignment.s_end,
        alignment.score
    )
}
