//! The recursive fit model: state, lazy weight cache, and archiving.
//!
//! ## Purpose
//!
//! This module provides `RecursiveFit`, the single stateful entity of the
//! crate. It owns the triangular state, drives the per-observation QR
//! update, recovers coefficients lazily through the solver, evaluates the
//! fitted polynomial, and serializes the exact internal state.
//!
//! ## Design notes
//!
//! * **Lazy cache**: Coefficients are recomputed only when the state has
//!   changed since the last solve. The invalidate-on-write /
//!   recompute-on-read contract is part of the public behavior: every
//!   `add_point` invalidates, every weight or estimate query revalidates.
//! * **Scratch reuse**: The augmented design vector is a pre-allocated
//!   buffer reused across `add_point` calls; steady-state updates allocate
//!   nothing.
//! * **Exact-state archives**: Serialization captures the triangle itself,
//!   not the derived coefficients. Subsequent updates are path dependent
//!   (decayed history matters), so restoring only the coefficients would
//!   silently change future behavior.
//!
//! ## Key concepts
//!
//! * **Memory bound**: Storage is sized once from `degree` at construction
//!   and never resized; no observation history is kept.
//! * **Degenerate data**: Zero points or repeated x-values are regularized
//!   by the floor-seeded diagonal, not reported as errors. Early estimates
//!   are biased toward zero until the data determines the system.
//!
//! ## Invariants
//!
//! * `weights.len() == degree + 1` and `design.len() == degree + 2` always.
//! * `dirty == false` implies `weights` solves the current triangle.
//!
//! ## Non-goals
//!
//! * No removal of individual historical points; only exponential decay of
//!   all past influence.
//! * No statistical diagnostics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solve::back_substitute;
use crate::algorithms::update::fold_observation;
use crate::engine::validator::Validator;
use crate::math::polynomial::{fill_design, horner};
use crate::math::rotation::{default_forgetting_factor, epsilon_floor};
use crate::primitives::buffer::{archive_len, num_weights, TriangularState};
use crate::primitives::errors::RecfitError;

// ============================================================================
// Recursive Fit
// ============================================================================

/// A running least-squares polynomial fit over a stream of observations.
///
/// Created fresh or from an archive, mutated only by [`add_point`], and
/// queried through [`weights`], [`copy_weights`], and [`estimate`] (which
/// may refresh the internal coefficient cache, nothing else).
///
/// [`add_point`]: RecursiveFit::add_point
/// [`weights`]: RecursiveFit::weights
/// [`copy_weights`]: RecursiveFit::copy_weights
/// [`estimate`]: RecursiveFit::estimate
#[derive(Debug, Clone)]
pub struct RecursiveFit<T: Float> {
    /// Triangular sufficient statistics of all (decayed) observations.
    state: TriangularState<T>,
    /// Cached coefficient vector, valid only when `dirty` is false.
    weights: Vec<T>,
    /// True whenever the state has changed since the last solve.
    dirty: bool,
    /// Per-update decay applied to prior observations' influence.
    forgetting_factor: T,
    /// Scratch for the augmented design vector `[1, x, .., x^degree, y]`.
    design: Vec<T>,
}

impl<T: Float> RecursiveFit<T> {
    /// Create a fresh fit of the given degree with the default forgetting
    /// factor.
    ///
    /// # Errors
    ///
    /// Returns [`RecfitError::InvalidDegree`] if `degree` exceeds the
    /// supported maximum.
    pub fn new(degree: usize) -> Result<Self, RecfitError> {
        Self::with_config(degree, default_forgetting_factor())
    }

    /// Create a fresh fit with an explicit forgetting factor.
    pub(crate) fn with_config(degree: usize, forgetting_factor: T) -> Result<Self, RecfitError> {
        Validator::validate_degree(degree)?;
        Validator::validate_forgetting_factor(forgetting_factor)?;

        Ok(Self {
            state: TriangularState::new(degree, epsilon_floor()),
            weights: vec![T::zero(); num_weights(degree)],
            dirty: true,
            forgetting_factor,
            design: vec![T::zero(); degree + 2],
        })
    }

    /// Restore a fit of the given degree from an archive produced by
    /// [`archive_into`](RecursiveFit::archive_into) or
    /// [`to_archive`](RecursiveFit::to_archive), using the default
    /// forgetting factor.
    ///
    /// The archive must hold at least [`archive_len(degree)`](archive_len)
    /// values; extra trailing values are ignored. Restoration is exact:
    /// continuing to add points afterwards behaves identically to never
    /// having serialized. The forgetting factor is not part of the archive;
    /// a fit restored with a different factor will diverge on subsequent
    /// updates. Use the builder's `build_from_archive` to restore with a
    /// non-default factor.
    ///
    /// # Errors
    ///
    /// Returns [`RecfitError::ArchiveTooShort`] if the slice is shorter than
    /// the serialized state for this degree.
    pub fn from_archive(degree: usize, archive: &[T]) -> Result<Self, RecfitError> {
        Self::from_archive_with_config(degree, default_forgetting_factor(), archive)
    }

    /// Restore a fit from an archive with an explicit forgetting factor.
    pub(crate) fn from_archive_with_config(
        degree: usize,
        forgetting_factor: T,
        archive: &[T],
    ) -> Result<Self, RecfitError> {
        let mut fit = Self::with_config(degree, forgetting_factor)?;
        Validator::validate_archive_len(archive.len(), fit.archive_len())?;
        let n = fit.archive_len();
        fit.state.load(&archive[..n]);
        fit.dirty = true;
        Ok(fit)
    }

    // ========================================================================
    // Updating
    // ========================================================================

    /// Fold one `(x, y)` observation into the fit.
    ///
    /// Builds the augmented design vector and eliminates it against the
    /// triangle row by row, decaying prior content by the forgetting factor.
    /// Invalidates the coefficient cache.
    ///
    /// # Errors
    ///
    /// Returns [`RecfitError::InvalidNumericValue`] if `x` or `y` is NaN or
    /// infinite; the state is untouched in that case. For finite inputs this
    /// operation cannot fail.
    pub fn add_point(&mut self, x: T, y: T) -> Result<(), RecfitError> {
        Validator::validate_scalar(x, "x")?;
        Validator::validate_scalar(y, "y")?;

        fill_design(&mut self.design, x, y);
        fold_observation(&mut self.state, &mut self.design, self.forgetting_factor);
        self.dirty = true;
        Ok(())
    }

    /// Reset to the freshly constructed state, discarding all observations.
    ///
    /// Degree and forgetting factor are retained; no reallocation occurs.
    pub fn reset(&mut self) {
        self.state.refill(epsilon_floor());
        self.dirty = true;
    }

    // ========================================================================
    // Querying
    // ========================================================================

    /// The fitted coefficients, lowest power first.
    ///
    /// Recomputes via back-substitution if the state changed since the last
    /// query; otherwise returns the cached solve. Always exactly
    /// `degree + 1` values.
    pub fn weights(&mut self) -> &[T] {
        self.refresh_weights();
        &self.weights
    }

    /// Copy the fitted coefficients into `out`, lowest power first.
    ///
    /// Writes exactly `degree + 1` values into the leading slots of `out`.
    ///
    /// # Errors
    ///
    /// Returns [`RecfitError::BufferTooSmall`] if `out` holds fewer than
    /// `degree + 1` slots.
    pub fn copy_weights(&mut self, out: &mut [T]) -> Result<(), RecfitError> {
        let n = self.num_weights();
        Validator::validate_output_len(out.len(), n)?;
        self.refresh_weights();
        out[..n].copy_from_slice(&self.weights);
        Ok(())
    }

    /// Evaluate the fitted polynomial at `x` using Horner's method.
    ///
    /// Refreshes the coefficient cache first if needed.
    pub fn estimate(&mut self, x: T) -> T {
        self.refresh_weights();
        horner(&self.weights, x)
    }

    fn refresh_weights(&mut self) {
        if !self.dirty {
            return;
        }
        back_substitute(&self.state, &mut self.weights);
        self.dirty = false;
    }

    // ========================================================================
    // Archiving
    // ========================================================================

    /// Serialize the exact triangular state into `out`.
    ///
    /// Writes exactly [`archive_len(degree)`](archive_len) values: every
    /// meaningful cell in row-major order, diagonal through the augmented
    /// right-hand-side column.
    ///
    /// # Errors
    ///
    /// Returns [`RecfitError::BufferTooSmall`] if `out` holds fewer than
    /// `archive_len(degree)` slots.
    pub fn archive_into(&self, out: &mut [T]) -> Result<(), RecfitError> {
        let n = self.archive_len();
        Validator::validate_output_len(out.len(), n)?;
        out[..n].copy_from_slice(self.state.as_slice());
        Ok(())
    }

    /// Serialize the exact triangular state into a freshly allocated vector
    /// of length [`archive_len(degree)`](archive_len).
    pub fn to_archive(&self) -> Vec<T> {
        self.state.as_slice().to_vec()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Polynomial degree, fixed at construction.
    #[inline]
    pub fn degree(&self) -> usize {
        self.state.degree()
    }

    /// Number of coefficients (`degree + 1`).
    #[inline]
    pub fn num_weights(&self) -> usize {
        num_weights(self.degree())
    }

    /// Serialized state length for this fit's degree.
    #[inline]
    pub fn archive_len(&self) -> usize {
        archive_len(self.degree())
    }

    /// Per-update decay factor for prior observations' influence.
    #[inline]
    pub fn forgetting_factor(&self) -> T {
        self.forgetting_factor
    }
}
