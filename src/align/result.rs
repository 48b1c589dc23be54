use super::GAP;

/// Edit operation in an alignment path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Match (identical residues)
    Match,
    /// Mismatch (different residues)
    Mismatch,
    /// Insertion in query (gap in subject)
    Ins,
    /// Deletion from query (gap in query)
    Del,
}

/// Result of a pairwise alignment.
///
/// The aligned sequences have equal length and contain the gap character
/// wherever one sequence skips a residue of the other. Positions are
/// 1-based inclusive; an empty alignment has start = end + 1.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Raw alignment score
    pub score: i32,
    /// Query with gap characters inserted
    pub aligned_query: Vec<u8>,
    /// Subject with gap characters inserted
    pub aligned_subject: Vec<u8>,
    /// Query start position (1-based)
    pub q_start: usize,
    /// Query end position (1-based, inclusive)
    pub q_end: usize,
    /// Subject start position (1-based)
    pub s_start: usize,
    /// Subject end position (1-based, inclusive)
    pub s_end: usize,
    /// Edit script describing the alignment path
    pub edit_script: Vec<EditOp>,
}

impl Alignment {
    /// Build an alignment from a traceback edit script.
    ///
    /// `start_row` and `start_col` are the matrix cell where the path
    /// begins, i.e. the number of query and subject residues preceding
    /// the aligned region.
    pub fn from_edit_script(
        query: &[u8],
        subject: &[u8],
        start_row: usize,
        start_col: usize,
        score: i32,
        edit_script: Vec<EditOp>,
    ) -> Self {
        let mut aligned_query = Vec::with_capacity(edit_script.len());
        let mut aligned_subject = Vec::with_capacity(edit_script.len());
        let mut qi = start_row;
        let mut sj = start_col;

        for op in &edit_script {
            match op {
                EditOp::Match | EditOp::Mismatch => {
                    aligned_query.push(query[qi]);
                    aligned_subject.push(subject[sj]);
                    qi += 1;
                    sj += 1;
                }
                EditOp::Ins => {
                    aligned_query.push(query[qi]);
                    aligned_subject.push(GAP);
                    qi += 1;
                }
                EditOp::Del => {
                    aligned_query.push(GAP);
                    aligned_subject.push(subject[sj]);
                    sj += 1;
                }
            }
        }

        Self {
            score,
            aligned_query,
            aligned_subject,
            q_start: start_row + 1,
            q_end: qi,
            s_start: start_col + 1,
            s_end: sj,
            edit_script,
        }
    }

    /// Number of alignment columns (residues plus gaps).
    pub fn len(&self) -> usize {
        self.aligned_query.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edit_script.is_empty()
    }
}
