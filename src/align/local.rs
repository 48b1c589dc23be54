use super::matrix::ScoreMatrix;
use super::result::Alignment;
use super::scoring::AlignmentScoring;
use super::traceback::trace_from;
use super::Algorithm;

/// Smith-Waterman local alignment.
///
/// Boundary cells are zero and every interior cell is floored at zero,
/// which lets the alignment restart instead of carrying a negative
/// prefix forward. The best-scoring cell is tracked during the
/// row-major fill; on ties the first maximum encountered is kept.
/// Traceback runs from that cell until it reaches a zero cell or the
/// matrix edge, so the output covers only the locally aligned
/// substrings.
pub fn align_local(query: &[u8], subject: &[u8], scoring: &AlignmentScoring) -> Alignment {
    let rows = query.len() + 1;
    let cols = subject.len() + 1;
    let mut matrix = ScoreMatrix::new(rows, cols);

    let mut best_score = 0;
    let mut best_pos = (0, 0);

    for i in 1..rows {
        for j in 1..cols {
            let diag =
                matrix.get(i - 1, j - 1) + scoring.similarity(query[i - 1], subject[j - 1]);
            let up = matrix.get(i - 1, j) + scoring.gap;
            let left = matrix.get(i, j - 1) + scoring.gap;
            let score = diag.max(up).max(left).max(0);
            matrix.set(i, j, score);

            if score > best_score {
                best_score = score;
                best_pos = (i, j);
            }
        }
    }

    let (edit_script, start_row, start_col) =
        trace_from(&matrix, query, subject, scoring, best_pos, Algorithm::Local);

    Alignment::from_edit_script(query, subject, start_row, start_col, best_score, edit_script)
}
