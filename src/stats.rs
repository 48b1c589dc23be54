//! Derived alignment statistics.

use crate::align::GAP;

/// Counts derived from a gapped alignment pair.
///
/// A pure function of the two aligned sequences, safe to recompute at
/// any time. Traceback never emits a column with gaps on both sides, so
/// matches + mismatches + gaps equals the alignment length.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMetrics {
    /// Columns where both residues are identical and neither is a gap
    pub matches: usize,
    /// Columns where both residues are present but differ
    pub mismatches: usize,
    /// Gap characters across both sequences
    pub gaps: usize,
    /// Number of alignment columns
    pub length: usize,
    /// Percent identity: matches / length * 100, 0 for empty alignments
    pub identity: f64,
}

impl AlignmentMetrics {
    /// Compute metrics from two equal-length aligned sequences.
    pub fn from_aligned_pair(aligned_query: &[u8], aligned_subject: &[u8]) -> Self {
        let mut matches = 0;
        let mut mismatches = 0;
        let mut gaps = 0;

        for (&q, &s) in aligned_query.iter().zip(aligned_subject.iter()) {
            if q == GAP || s == GAP {
                gaps += 1;
            } else if q == s {
                matches += 1;
            } else {
                mismatches += 1;
            }
        }

        let length = aligned_query.len();
        let identity = if length > 0 {
            100.0 * matches as f64 / length as f64
        } else {
            0.0
        };

        Self {
            matches,
            mismatches,
            gaps,
            length,
            identity,
        }
    }
}
