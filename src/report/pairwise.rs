//! Pairwise alignment output.
//!
//! Renders an alignment as Query/Sbjct blocks with 1-based coordinates,
//! a match-indicator line and a score summary.

use std::io::{self, Write};

use crate::align::{Alignment, GAP};
use crate::stats::AlignmentMetrics;

/// Residues per alignment block line
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Configuration for pairwise output
#[derive(Debug, Clone)]
pub struct PairwiseConfig {
    /// Line length for sequence display
    pub line_length: usize,
    /// Algorithm label printed above the summary (omitted when empty)
    pub algorithm: String,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            algorithm: String::new(),
        }
    }
}

/// Indicator between two aligned residues: '|' match, 'x' mismatch,
/// blank at gaps.
fn match_indicator(q: u8, s: u8) -> char {
    if q == GAP || s == GAP {
        ' '
    } else if q == s {
        '|'
    } else {
        'x'
    }
}

/// Write one alignment in pairwise text format.
///
/// `query_len` and `subject_len` are the full (cleaned) input lengths,
/// shown in the header; the blocks themselves cover only the aligned
/// region.
pub fn write_pairwise<W: Write>(
    writer: &mut W,
    query_id: &str,
    subject_id: &str,
    query_len: usize,
    subject_len: usize,
    alignment: &Alignment,
    metrics: &AlignmentMetrics,
    config: &PairwiseConfig,
) -> io::Result<()> {
    writeln!(writer, "Query= {}", query_id)?;
    writeln!(writer, "Length={}", query_len)?;
    writeln!(writer)?;
    writeln!(writer, "Subject= {}", subject_id)?;
    writeln!(writer, "Length={}", subject_len)?;
    writeln!(writer)?;

    if !config.algorithm.is_empty() {
        writeln!(writer, " Algorithm: {}", config.algorithm)?;
    }

    if metrics.length == 0 {
        writeln!(writer, " Score = {}", alignment.score)?;
        writeln!(writer, " No aligned region")?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(
        writer,
        " Score = {}, Identities = {}/{} ({:.2}%), Mismatches = {}, Gaps = {}/{}",
        alignment.score,
        metrics.matches,
        metrics.length,
        metrics.identity,
        metrics.mismatches,
        metrics.gaps,
        metrics.length
    )?;
    writeln!(writer)?;

    let coord_width = alignment
        .q_end
        .max(alignment.s_end)
        .max(1)
        .to_string()
        .len();
    let indent = "Query  ".len() + coord_width + 2;

    let mut q_pos = alignment.q_start;
    let mut s_pos = alignment.s_start;

    for chunk_start in (0..alignment.len()).step_by(config.line_length) {
        let chunk_end = (chunk_start + config.line_length).min(alignment.len());
        let q_chunk = &alignment.aligned_query[chunk_start..chunk_end];
        let s_chunk = &alignment.aligned_subject[chunk_start..chunk_end];

        let q_residues = q_chunk.iter().filter(|&&b| b != GAP).count();
        let s_residues = s_chunk.iter().filter(|&&b| b != GAP).count();

        writeln!(
            writer,
            "Query  {:<width$}  {}  {}",
            q_pos,
            String::from_utf8_lossy(q_chunk),
            q_pos + q_residues - 1,
            width = coord_width
        )?;

        let indicators: String = q_chunk
            .iter()
            .zip(s_chunk.iter())
            .map(|(&q, &s)| match_indicator(q, s))
            .collect();
        writeln!(writer, "{:indent$}{}", "", indicators, indent = indent)?;

        writeln!(
            writer,
            "Sbjct  {:<width$}  {}  {}",
            s_pos,
            String::from_utf8_lossy(s_chunk),
            s_pos + s_residues - 1,
            width = coord_width
        )?;
        writeln!(writer)?;

        q_pos += q_residues;
        s_pos += s_residues;
    }

    Ok(())
}
