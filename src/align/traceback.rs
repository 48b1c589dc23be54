use super::matrix::ScoreMatrix;
use super::result::EditOp;
use super::scoring::AlignmentScoring;
use super::Algorithm;

/// Walk a filled score matrix backwards from `end`, reconstructing one
/// optimal alignment path.
///
/// Each candidate move is validated by recomputing whether the
/// predecessor cell plus its move delta reproduces the current cell
/// value. Ties between equally optimal moves are resolved by a fixed
/// preference: diagonal first, then up (gap in subject), then left (gap
/// in query).
///
/// Global walks run until cell (0, 0) is reached; local walks stop at
/// the first zero-valued cell or matrix edge.
///
/// Returns the edit script in forward order together with the cell at
/// which the aligned region starts.
pub(crate) fn trace_from(
    matrix: &ScoreMatrix,
    query: &[u8],
    subject: &[u8],
    scoring: &AlignmentScoring,
    end: (usize, usize),
    algorithm: Algorithm,
) -> (Vec<EditOp>, usize, usize) {
    let (mut row, mut col) = end;
    let mut edit_script = Vec::new();

    loop {
        match algorithm {
            Algorithm::Global => {
                if row == 0 && col == 0 {
                    break;
                }
            }
            Algorithm::Local => {
                if row == 0 || col == 0 || matrix.get(row, col) <= 0 {
                    break;
                }
            }
        }

        let here = matrix.get(row, col);
        if row > 0
            && col > 0
            && here
                == matrix.get(row - 1, col - 1)
                    + scoring.similarity(query[row - 1], subject[col - 1])
        {
            if query[row - 1] == subject[col - 1] {
                edit_script.push(EditOp::Match);
            } else {
                edit_script.push(EditOp::Mismatch);
            }
            row -= 1;
            col -= 1;
        } else if row > 0 && here == matrix.get(row - 1, col) + scoring.gap {
            edit_script.push(EditOp::Ins);
            row -= 1;
        } else if col > 0 && here == matrix.get(row, col - 1) + scoring.gap {
            edit_script.push(EditOp::Del);
            col -= 1;
        } else {
            break;
        }
    }

    // Built backwards from the end cell
    edit_script.reverse();

    (edit_script, row, col)
}
