//! # Fitness
//!
//! Scores a placement by counting the queen pairs that do not attack each
//! other. Queens share a column never, since `genes[c]` places exactly one
//! queen in column `c`, so only rows and diagonals are checked.
//!
//! ```rust
//! use nqueens_ga::fitness::{evaluate, is_solution, max_fitness};
//!
//! assert_eq!(max_fitness(4), 6);
//! assert_eq!(evaluate(&[1, 3, 0, 2]), 6);
//! assert!(is_solution(&[2, 0, 3, 1]));
//! assert_eq!(evaluate(&[0, 0, 0, 0]), 0);
//! ```

/// Number of column pairs on an `n`-column board, the best possible score.
pub const fn max_fitness(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Returns `true` if the queens in columns `i` and `j` attack each other.
#[inline]
pub fn attacks(genes: &[usize], i: usize, j: usize) -> bool {
    genes[i] == genes[j] || genes[i].abs_diff(genes[j]) == i.abs_diff(j)
}

/// Counts the non-attacking queen pairs among all column pairs.
pub fn evaluate(genes: &[usize]) -> usize {
    let n = genes.len();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .filter(|&(i, j)| !attacks(genes, i, j))
        .count()
}

/// Returns `true` if no two queens attack each other.
pub fn is_solution(genes: &[usize]) -> bool {
    evaluate(genes) == max_fitness(genes.len())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_max_fitness() {
        assert_eq!(max_fitness(0), 0);
        assert_eq!(max_fitness(1), 0);
        assert_eq!(max_fitness(2), 1);
        assert_eq!(max_fitness(4), 6);
        assert_eq!(max_fitness(8), 28);
    }

    #[test]
    fn test_known_four_queens_solutions() {
        assert_eq!(evaluate(&[1, 3, 0, 2]), 6);
        assert_eq!(evaluate(&[2, 0, 3, 1]), 6);
    }

    #[test]
    fn test_known_eight_queens_solution() {
        let genes = [0, 4, 7, 5, 2, 6, 1, 3];
        assert_eq!(evaluate(&genes), 28);
        assert!(is_solution(&genes));
    }

    #[test]
    fn test_same_row_conflicts() {
        // Every pair shares a row.
        assert_eq!(evaluate(&[2, 2, 2, 2]), 0);
    }

    #[test]
    fn test_diagonal_conflicts() {
        // Main diagonal: every pair attacks diagonally.
        assert_eq!(evaluate(&[0, 1, 2, 3]), 0);
        // Anti-diagonal.
        assert_eq!(evaluate(&[3, 2, 1, 0]), 0);
    }

    #[test]
    fn test_partial_conflicts() {
        // (0,1): 0==0 attack. (0,2): |0-1|=1 != 2 safe. (0,3): |0-3|=3==3 attack.
        // (1,2): |0-1|=1==1 attack. (1,3): |0-3|=3 != 2 safe. (2,3): |1-3|=2 != 1 safe.
        assert_eq!(evaluate(&[0, 0, 1, 3]), 3);
    }

    #[test]
    fn test_attacks_is_symmetric() {
        let genes = [1, 3, 0, 2, 2];
        for i in 0..genes.len() {
            for j in 0..genes.len() {
                if i != j {
                    assert_eq!(attacks(&genes, i, j), attacks(&genes, j, i));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn fitness_is_bounded(genes in (2usize..12).prop_flat_map(|n| prop::collection::vec(0..n, n))) {
            let score = evaluate(&genes);
            prop_assert!(score <= max_fitness(genes.len()));
        }

        #[test]
        fn fitness_is_pure(genes in (2usize..12).prop_flat_map(|n| prop::collection::vec(0..n, n))) {
            prop_assert_eq!(evaluate(&genes), evaluate(&genes));
        }

        #[test]
        fn mirrored_board_scores_the_same(genes in (2usize..12).prop_flat_map(|n| prop::collection::vec(0..n, n))) {
            // Reflecting rows top to bottom preserves every row and diagonal relation.
            let n = genes.len();
            let mirrored: Vec<usize> = genes.iter().map(|&row| n - 1 - row).collect();
            prop_assert_eq!(evaluate(&genes), evaluate(&mirrored));
        }
    }
}
