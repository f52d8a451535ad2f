//! Givens rotations with exponential forgetting.
//!
//! ## Purpose
//!
//! This module provides the two rotation operations used to fold one
//! observation into the triangular state: the boundary rotation, which zeroes
//! an incoming value against a diagonal pivot, and the interior rotation,
//! which propagates that rotation across the remainder of the row.
//!
//! ## Design notes
//!
//! * **Forgetting factor**: Both operations decay the stored cell by a factor
//!   `lambda` slightly below one, so older observations lose influence
//!   exponentially and the triangle tracks a slowly varying best fit.
//! * **Degenerate geometry**: An incoming value within `epsilon_floor()` of
//!   zero would make the rotation 0/0. That case returns the identity
//!   rotation and leaves the pivot untouched, decay included.
//!
//! ## Invariants
//!
//! * For a non-degenerate input, `cos^2 + sin^2 == 1` up to rounding.
//! * The pivot never moves toward zero: it is either untouched or replaced
//!   with `lambda * sqrt(pivot^2 + incoming^2) >= lambda * |pivot|`.
//!
//! ## Non-goals
//!
//! * This module does not iterate over rows or columns; the traversal order
//!   lives in the update algorithm.

// External dependencies
use num_traits::Float;

// ============================================================================
// Numerical Floor
// ============================================================================

/// Shared small positive constant used as the diagonal seed and as the
/// absolute tolerance below which an incoming value is treated as zero.
#[inline]
pub fn epsilon_floor<T: Float>() -> T {
    T::from(1.0e-32).unwrap()
}

/// Default forgetting factor, `1 - 1e-11`.
///
/// Close enough to one that hundreds of millions of updates retain most of
/// their influence, while still bounding the weight of arbitrarily old data.
/// Note that in `f32` this rounds to exactly `1.0` (no decay).
#[inline]
pub fn default_forgetting_factor<T: Float>() -> T {
    T::one() - T::from(1.0e-11).unwrap()
}

// ============================================================================
// Rotation Pair
// ============================================================================

/// A Givens rotation as its cosine/sine pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation<T> {
    /// Cosine component.
    pub cos: T,
    /// Sine component.
    pub sin: T,
}

impl<T: Float> Rotation<T> {
    /// The identity rotation `(cos = 1, sin = 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self {
            cos: T::one(),
            sin: T::zero(),
        }
    }
}

// ============================================================================
// Rotation Operations
// ============================================================================

/// Compute the rotation that eliminates `incoming` against the diagonal
/// `pivot`, replacing the pivot with the decayed norm `lambda * norm`.
///
/// When `incoming` is within `epsilon_floor()` of zero the rotation is the
/// identity and the pivot is left untouched; in that branch no decay is
/// applied either.
#[inline]
pub fn boundary_rotation<T: Float>(pivot: &mut T, incoming: T, lambda: T) -> Rotation<T> {
    if incoming.abs() < epsilon_floor() {
        return Rotation::identity();
    }
    let norm = (*pivot * *pivot + incoming * incoming).sqrt();
    let rotation = Rotation {
        cos: *pivot / norm,
        sin: incoming / norm,
    };
    *pivot = lambda * norm;
    rotation
}

/// Apply a previously computed rotation to an off-diagonal `cell`.
///
/// Updates `cell <- sin*incoming + lambda*cos*cell` and returns
/// `cos*incoming - lambda*sin*cell`, the residual to be eliminated in the
/// next row.
#[inline]
pub fn interior_rotation<T: Float>(
    cell: &mut T,
    rotation: Rotation<T>,
    incoming: T,
    lambda: T,
) -> T {
    let out = rotation.cos * incoming - lambda * rotation.sin * *cell;
    *cell = rotation.sin * incoming + lambda * rotation.cos * *cell;
    out
}
