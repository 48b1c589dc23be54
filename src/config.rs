//! Default scoring parameters and the named scheme catalog.

use crate::align::AlignmentScoring;

pub const DEFAULT_MATCH_SCORE: i32 = 1;
pub const DEFAULT_MISMATCH_SCORE: i32 = -1;
pub const DEFAULT_GAP_PENALTY: i32 = -2;

/// A named scoring preset.
#[derive(Debug, Clone, Copy)]
pub struct ScoringScheme {
    pub name: &'static str,
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
    pub description: &'static str,
}

impl ScoringScheme {
    pub fn scoring(&self) -> AlignmentScoring {
        AlignmentScoring::new(self.match_score, self.mismatch, self.gap)
    }
}

/// Built-in scoring schemes.
pub const SCORING_SCHEMES: [ScoringScheme; 4] = [
    ScoringScheme {
        name: "standard",
        match_score: 1,
        mismatch: -1,
        gap: -2,
        description: "Standard scoring for DNA/RNA sequences",
    },
    ScoringScheme {
        name: "strict",
        match_score: 2,
        mismatch: -2,
        gap: -3,
        description: "Stricter penalties for mismatches and gaps",
    },
    ScoringScheme {
        name: "lenient",
        match_score: 1,
        mismatch: 0,
        gap: -1,
        description: "More lenient scoring for divergent sequences",
    },
    ScoringScheme {
        name: "blast-like",
        match_score: 1,
        mismatch: -3,
        gap: -2,
        description: "Similar to BLAST default parameters",
    },
];

/// Look up a scheme by name (case-insensitive).
pub fn lookup_scheme(name: &str) -> Option<&'static ScoringScheme> {
    let lower = name.to_lowercase();
    SCORING_SCHEMES.iter().find(|scheme| scheme.name == lower)
}
