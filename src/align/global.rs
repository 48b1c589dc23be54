use super::matrix::ScoreMatrix;
use super::result::Alignment;
use super::scoring::AlignmentScoring;
use super::traceback::trace_from;
use super::Algorithm;

/// Needleman-Wunsch global alignment.
///
/// Accounts for every residue of both sequences end to end. Boundary
/// rows and columns carry cumulative gap penalties, so leading gaps cost
/// exactly as much as interior ones. The final score is the bottom-right
/// cell; traceback runs from there to the origin.
pub fn align_global(query: &[u8], subject: &[u8], scoring: &AlignmentScoring) -> Alignment {
    let rows = query.len() + 1;
    let cols = subject.len() + 1;
    let mut matrix = ScoreMatrix::new(rows, cols);

    for i in 1..rows {
        matrix.set(i, 0, i as i32 * scoring.gap);
    }
    for j in 1..cols {
        matrix.set(0, j, j as i32 * scoring.gap);
    }

    for i in 1..rows {
        for j in 1..cols {
            let diag =
                matrix.get(i - 1, j - 1) + scoring.similarity(query[i - 1], subject[j - 1]);
            let up = matrix.get(i - 1, j) + scoring.gap;
            let left = matrix.get(i, j - 1) + scoring.gap;
            matrix.set(i, j, diag.max(up).max(left));
        }
    }

    let score = matrix.get(rows - 1, cols - 1);
    let (edit_script, start_row, start_col) = trace_from(
        &matrix,
        query,
        subject,
        scoring,
        (rows - 1, cols - 1),
        Algorithm::Global,
    );

    Alignment::from_edit_script(query, subject, start_row, start_col, score, edit_script)
}
