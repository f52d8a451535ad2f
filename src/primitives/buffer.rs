//! Packed upper-triangular storage for the recursive fit state.
//!
//! ## Purpose
//!
//! This module provides `TriangularState`, the sufficient-statistics
//! representation of every (decayed) observation folded into the fit so far.
//! It is an upper-triangular matrix of `degree + 1` rows and `degree + 2`
//! columns, where the extra column accumulates the right-hand side of the
//! least-squares system.
//!
//! ## Design notes
//!
//! * **Packed layout**: Only entries with `col >= row` are stored, row-major,
//!   through an explicit row/column-to-offset mapping. Below-diagonal slots
//!   do not exist, so the "never read or written" invariant holds by
//!   construction rather than by discipline.
//! * **One allocation**: The buffer is sized once from `degree` at
//!   construction and never resized.
//! * **Archive identity**: The packed order is exactly the serialization
//!   order, so archiving is a straight copy of the storage.
//!
//! ## Invariants
//!
//! * `cells.len() == archive_len(degree)` for the lifetime of the value.
//! * Diagonal entries are seeded to a small positive floor and are never
//!   written with an exact zero by any update path.
//!
//! ## Non-goals
//!
//! * This module does not implement rotations or solving; it only owns and
//!   indexes storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Size Formulas
// ============================================================================

/// Number of polynomial coefficients for a fit of the given degree.
#[inline]
pub const fn num_weights(degree: usize) -> usize {
    degree + 1
}

/// Number of values in the serialized (archived) state for the given degree.
///
/// This counts every stored cell: for each of the `degree + 1` rows, the
/// entries from the diagonal through the augmented right-hand-side column.
#[inline]
pub const fn archive_len(degree: usize) -> usize {
    (degree + 4) * (degree + 1) / 2
}

// ============================================================================
// Triangular State
// ============================================================================

/// Packed upper-triangular matrix with one augmented right-hand-side column.
#[derive(Debug, Clone)]
pub struct TriangularState<T> {
    degree: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Float> TriangularState<T> {
    /// Create a new state of the given degree with every cell set to `seed`.
    ///
    /// The seed must be a small positive value; it keeps the triangular
    /// system invertible before (and without) any observations.
    pub fn new(degree: usize, seed: T) -> Self {
        Self {
            degree,
            cols: degree + 2,
            cells: vec![seed; archive_len(degree)],
        }
    }

    /// Polynomial degree this state was sized for.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of rows (`degree + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.degree + 1
    }

    /// Number of logical columns (`degree + 2`), counting the RHS column.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Offset of cell `(row, col)` in the packed buffer.
    ///
    /// Row `i` holds `cols - i` entries, so its packed run starts at
    /// `i*cols - i*(i-1)/2`, written below in an underflow-free form.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows());
        debug_assert!(col >= row && col < self.cols);
        (row * (2 * self.cols - row + 1)) / 2 + (col - row)
    }

    /// Read cell `(row, col)`; `col` must be at least `row`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Mutable access to cell `(row, col)`; `col` must be at least `row`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.offset(row, col);
        &mut self.cells[idx]
    }

    /// The stored cells in serialization order (row-major, `col >= row`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Overwrite the state from a slice in serialization order.
    ///
    /// Reads exactly `archive_len(degree)` leading values; the caller is
    /// responsible for length validation.
    pub fn load(&mut self, values: &[T]) {
        let n = self.cells.len();
        self.cells.copy_from_slice(&values[..n]);
    }

    /// Reset every cell to `seed`, as if freshly constructed.
    pub fn refill(&mut self, seed: T) {
        for cell in self.cells.iter_mut() {
            *cell = seed;
        }
    }
}
