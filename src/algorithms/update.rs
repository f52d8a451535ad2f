//! Sequential QR update of the triangular state.
//!
//! ## Purpose
//!
//! This module folds one augmented observation vector into the triangular
//! state, row by row, using Givens rotations. This is the recursive
//! least-squares update: after the fold, the triangle is the R-factor (plus
//! rotated right-hand side) of the QR decomposition of every observation
//! seen so far, each decayed by the forgetting factor.
//!
//! ## Design notes
//!
//! * **Row elimination order**: Row `i` eliminates `design[i]` against the
//!   diagonal, then rewrites `design[i+1..]` with the rotation residuals so
//!   the next row sees the partially eliminated vector.
//! * **Last row**: The residual produced by the final row is the component of
//!   the observation orthogonal to the triangular factor. It is discarded;
//!   it carries no information about the coefficients.
//!
//! ## Invariants
//!
//! * Exactly one pass over the upper triangle per observation: O(degree^2)
//!   work, O(degree) scratch.
//! * The design slice length equals the state's column count.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::rotation::{boundary_rotation, interior_rotation};
use crate::primitives::buffer::TriangularState;

// ============================================================================
// Observation Fold
// ============================================================================

/// Fold one augmented observation `design = [1, x, ..., x^degree, y]` into
/// the state, decaying prior content by `lambda`.
///
/// `design` is consumed as scratch: on return it holds rotation residuals,
/// not the original observation.
pub fn fold_observation<T: Float>(state: &mut TriangularState<T>, design: &mut [T], lambda: T) {
    let rows = state.rows();
    let cols = state.cols();
    debug_assert_eq!(design.len(), cols);

    for i in 0..rows {
        let rotation = boundary_rotation(state.at_mut(i, i), design[i], lambda);
        for j in (i + 1)..cols {
            let out = interior_rotation(state.at_mut(i, j), rotation, design[j], lambda);
            if i + 1 < rows {
                design[j] = out;
            }
        }
    }
}
