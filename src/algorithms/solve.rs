//! Back-substitution over the triangular state.
//!
//! ## Purpose
//!
//! This module recovers the polynomial coefficients from the triangular
//! state by solving `R * w = d`, where `R` is the stored upper triangle and
//! `d` is the augmented right-hand-side column.
//!
//! ## Design notes
//!
//! * **Order**: Rows are solved from the bottom up; each row needs only the
//!   coefficients already computed below it.
//! * **Division safety**: Diagonal entries are floor-seeded at construction
//!   and only ever rescaled by `lambda * norm`, so the division is always
//!   well defined, even with zero observations.
//!
//! ## Non-goals
//!
//! * No caching here; laziness and the dirty flag live in the engine.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::TriangularState;

// ============================================================================
// Back-Substitution
// ============================================================================

/// Solve the triangular system into `weights`, lowest power first.
///
/// `weights` must have exactly `state.rows()` slots.
pub fn back_substitute<T: Float>(state: &TriangularState<T>, weights: &mut [T]) {
    let rows = state.rows();
    let cols = state.cols();
    debug_assert_eq!(weights.len(), rows);

    for i in (0..rows).rev() {
        let mut acc = state.at(i, cols - 1);
        for j in (i + 1)..(cols - 1) {
            acc = acc - state.at(i, j) * weights[j];
        }
        weights[i] = acc / state.at(i, i);
    }
}
