//! Dense matrix over GF(2), rows packed in `u64` words.

use crate::truth_table::WORD_BITS;

/// Matrix over GF(2) with `rows` x `cols` bits, stored row-major, each row on `ceil(cols / 64)` words.
///
/// Elimination is destructive: clone the matrix first if the original is still needed.
///
/// # Example
/// ```rust
/// use boolean_function_metrics::BitMatrix;
///
/// // x0 + x1 = 0, x1 + x2 = 0
/// let mut matrix = BitMatrix::new(2, 3);
/// matrix.set(0, 0, true);
/// matrix.set(0, 1, true);
/// matrix.set(1, 1, true);
/// matrix.set(1, 2, true);
///
/// let rank = matrix.reduce_to_echelon();
/// assert_eq!(rank, 2);
/// assert_eq!(matrix.solve(rank), vec![true, true, true]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    words_per_row: usize,
    data: Vec<u64>,
}

impl BitMatrix {
    /// Creates a null matrix of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        let words_per_row = cols.div_ceil(WORD_BITS);
        BitMatrix {
            rows,
            cols,
            words_per_row,
            data: vec![0; rows * words_per_row],
        }
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn word_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.words_per_row + col / WORD_BITS
    }

    /// Sets the bit at (`row`, `col`).
    ///
    /// # Panics
    /// If `row` is out of range. An out of range `col` is only caught in debug builds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let word_index = self.word_index(row, col);
        let mask = 1u64 << (col % WORD_BITS);
        if value {
            self.data[word_index] |= mask;
        } else {
            self.data[word_index] &= !mask;
        }
    }

    /// Bit at (`row`, `col`).
    ///
    /// # Panics
    /// If `row` is out of range. An out of range `col` is only caught in debug builds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        (self.data[self.word_index(row, col)] >> (col % WORD_BITS)) & 1 == 1
    }

    /// Exchanges two rows.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        let (low, high) = (first.min(second), first.max(second));
        let (head, tail) = self.data.split_at_mut(high * self.words_per_row);
        head[low * self.words_per_row..(low + 1) * self.words_per_row]
            .swap_with_slice(&mut tail[..self.words_per_row]);
    }

    /// Adds (XOR) row `source` to row `destination`.
    pub fn xor_row(&mut self, destination: usize, source: usize) {
        self.xor_row_from_word(destination, source, 0);
    }

    /// XOR of the words of `source` into `destination`, starting at word `first_word` of the row.
    fn xor_row_from_word(&mut self, destination: usize, source: usize, first_word: usize) {
        if destination == source {
            self.row_words_mut(destination)[first_word..].fill(0);
            return;
        }
        let words_per_row = self.words_per_row;
        let (destination_start, source_start) =
            (destination * words_per_row, source * words_per_row);
        for i in first_word..words_per_row {
            let word = self.data[source_start + i];
            self.data[destination_start + i] ^= word;
        }
    }

    fn row_words_mut(&mut self, row: usize) -> &mut [u64] {
        &mut self.data[row * self.words_per_row..(row + 1) * self.words_per_row]
    }

    /// Gauss-Jordan elimination in place, returning the rank.
    ///
    /// Columns are scanned in ascending order. For each column, the first row at or below the current pivot row
    /// having a 1 there becomes the pivot, and is XORed into every other row having a 1 in that column,
    /// above as well as below. The matrix ends up in reduced row echelon form.
    pub fn reduce_to_echelon(&mut self) -> usize {
        let mut pivot_row = 0;
        for col in 0..self.cols {
            if pivot_row >= self.rows {
                break;
            }
            let Some(found) = (pivot_row..self.rows).find(|row| self.get(*row, col)) else {
                continue;
            };
            self.swap_rows(pivot_row, found);
            // the pivot row is null left of col
            let first_word = col / WORD_BITS;
            for row in 0..self.rows {
                if row != pivot_row && self.get(row, col) {
                    self.xor_row_from_word(row, pivot_row, first_word);
                }
            }
            pivot_row += 1;
        }
        pivot_row
    }

    /// Non-null solution of the homogeneous system held by a matrix already reduced by [BitMatrix::reduce_to_echelon].
    ///
    /// The highest non-pivot column is the free variable set to 1, the other free variables are set to 0,
    /// and each pivot variable is the XOR of the free variables of its row.
    ///
    /// # Returns
    /// One value per column, all `false` if there is no free variable (`rank == cols`).
    pub fn solve(&self, rank: usize) -> Vec<bool> {
        let mut solution = vec![false; self.cols];
        let pivot_cols = (0..rank.min(self.rows))
            .map(|row| (0..self.cols).find(|col| self.get(row, *col)))
            .collect::<Vec<Option<usize>>>();

        let mut is_pivot = vec![false; self.cols];
        pivot_cols.iter().flatten().for_each(|col| is_pivot[*col] = true);

        let Some(free_col) = (0..self.cols).rev().find(|col| !is_pivot[*col]) else {
            return solution;
        };
        solution[free_col] = true;

        for (row, pivot_col) in pivot_cols.iter().enumerate().rev() {
            let Some(pivot_col) = *pivot_col else {
                continue;
            };
            solution[pivot_col] = ((pivot_col + 1)..self.cols)
                .filter(|col| solution[*col] && self.get(row, *col))
                .count()
                % 2
                == 1;
        }
        solution
    }
}
