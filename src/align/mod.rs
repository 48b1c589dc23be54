//! Pairwise alignment engine.
//!
//! Two classical dynamic-programming formulations over one shared data
//! model: global alignment (Needleman-Wunsch) scores both sequences end to
//! end, local alignment (Smith-Waterman) finds the highest-scoring pair of
//! substrings. Both fill an (n+1) x (m+1) score matrix over all prefix
//! pairs and reconstruct one optimal path by traceback.

pub mod global;
pub mod local;
pub mod matrix;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use global::align_global;
pub use local::align_local;
pub use result::{Alignment, EditOp};
pub use scoring::AlignmentScoring;

use anyhow::{bail, Result};

/// Gap character in aligned output
pub const GAP: u8 = b'-';

/// Alignment algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Needleman-Wunsch global alignment
    Global,
    /// Smith-Waterman local alignment
    Local,
}

impl Algorithm {
    /// Resolve an algorithm name (case-insensitive).
    ///
    /// Accepts "needleman-wunsch", "needleman" and "global" for global
    /// alignment; "smith-waterman", "smith" and "local" for local
    /// alignment.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "needleman-wunsch" | "needleman" | "global" => Ok(Algorithm::Global),
            "smith-waterman" | "smith" | "local" => Ok(Algorithm::Local),
            _ => bail!("unrecognized algorithm: {}", name),
        }
    }

    /// Label used in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Global => "Needleman-Wunsch (global)",
            Algorithm::Local => "Smith-Waterman (local)",
        }
    }

    /// Run this algorithm on a sequence pair.
    pub fn align(&self, query: &[u8], subject: &[u8], scoring: &AlignmentScoring) -> Alignment {
        match self {
            Algorithm::Global => align_global(query, subject, scoring),
            Algorithm::Local => align_local(query, subject, scoring),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        for name in ["needleman-wunsch", "Needleman", "GLOBAL"] {
            assert_eq!(Algorithm::from_name(name).unwrap(), Algorithm::Global);
        }
        for name in ["smith-waterman", "Smith", "local"] {
            assert_eq!(Algorithm::from_name(name).unwrap(), Algorithm::Local);
        }
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Algorithm::from_name("blastn").unwrap_err();
        assert!(err.to_string().contains("unrecognized algorithm"));
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let scoring = AlignmentScoring::new(1, -1, -2);
        let global = Algorithm::Global.align(b"GATTACA", b"GATTACA", &scoring);
        assert_eq!(global.score, align_global(b"GATTACA", b"GATTACA", &scoring).score);

        let local = Algorithm::Local.align(b"GATTACA", b"TTAC", &scoring);
        assert_eq!(local.score, align_local(b"GATTACA", b"TTAC", &scoring).score);
    }
}
