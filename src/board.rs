//! Text rendering of a placement.
//!
//! Row 0 is drawn at the top and column 0 on the left.
//!
//! ```rust
//! use nqueens_ga::board;
//!
//! let text = board::render(&[1, 3, 0, 2]);
//! assert_eq!(
//!     text,
//!     "  0 1 2 3\n0 . . Q .\n1 Q . . .\n2 . . . Q\n3 . Q . .\n"
//! );
//! assert!(board::attacking_pairs(&[1, 3, 0, 2]).is_empty());
//! ```

use crate::fitness;

/// Renders the board as an N×N grid, `Q` for a queen and `.` for an empty square.
pub fn render(genes: &[usize]) -> String {
    let n = genes.len();
    let width = n.saturating_sub(1).to_string().len();

    let header = std::iter::once(String::new())
        .chain((0..n).map(|column| column.to_string()))
        .map(|label| format!("{label:>width$}"))
        .collect::<Vec<_>>()
        .join(" ");

    let rows = (0..n).map(|row| {
        std::iter::once(format!("{row:>width$}"))
            .chain(genes.iter().map(|&queen_row| {
                let cell = if queen_row == row { 'Q' } else { '.' };
                format!("{cell:>width$}")
            }))
            .collect::<Vec<_>>()
            .join(" ")
    });

    std::iter::once(header)
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}

/// Lists the column pairs `(i, j)`, `i < j`, whose queens attack each other.
pub fn attacking_pairs(genes: &[usize]) -> Vec<(usize, usize)> {
    let n = genes.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .filter(|&(i, j)| fitness::attacks(genes, i, j))
        .collect()
}
