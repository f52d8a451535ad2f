//! High-level API for recursive polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a [`RecursiveFit`], either fresh or restored
//! from an archive.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RecfitBuilder`] via `Recfit::new()`.
//! 2. Chain configuration methods (`.degree()`, `.forgetting_factor()`).
//! 3. Call `.build()` or `.build_from_archive()` to obtain the fit.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::rotation::default_forgetting_factor;

// Publicly re-exported types
pub use crate::engine::fit::RecursiveFit;
pub use crate::engine::validator::MAX_DEGREE;
pub use crate::primitives::buffer::{archive_len, num_weights};
pub use crate::primitives::errors::RecfitError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a recursive polynomial fit.
#[derive(Debug, Clone)]
pub struct RecfitBuilder<T: Float> {
    /// Polynomial degree (default: 1).
    pub degree: Option<usize>,

    /// Per-update decay factor in (0, 1] (default: `1 - 1e-11`).
    pub forgetting_factor: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RecfitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RecfitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            degree: None,
            forgetting_factor: None,
            duplicate_param: None,
        }
    }

    /// Set the polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set the forgetting factor.
    ///
    /// Values close to 1 retain long history; exactly 1 disables decay.
    pub fn forgetting_factor(mut self, factor: T) -> Self {
        if self.forgetting_factor.is_some() {
            self.duplicate_param = Some("forgetting_factor");
        }
        self.forgetting_factor = Some(factor);
        self
    }

    // ========================================================================
    // Build Methods
    // ========================================================================

    /// Build a fresh, epsilon-seeded fit.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter was set twice, the degree exceeds
    /// [`MAX_DEGREE`], or the forgetting factor is outside (0, 1].
    pub fn build(self) -> Result<RecursiveFit<T>, RecfitError> {
        let (degree, factor) = self.resolve()?;
        RecursiveFit::with_config(degree, factor)
    }

    /// Build a fit restored from a previously serialized state.
    ///
    /// The archive must hold at least `archive_len(degree)` values; extra
    /// trailing values are ignored.
    ///
    /// # Errors
    ///
    /// As for [`build`](RecfitBuilder::build), plus
    /// [`RecfitError::ArchiveTooShort`] when the slice is too short.
    pub fn build_from_archive(self, archive: &[T]) -> Result<RecursiveFit<T>, RecfitError> {
        let (degree, factor) = self.resolve()?;
        RecursiveFit::from_archive_with_config(degree, factor, archive)
    }

    fn resolve(self) -> Result<(usize, T), RecfitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let degree = self.degree.unwrap_or(1);
        let factor = self
            .forgetting_factor
            .unwrap_or_else(default_forgetting_factor);
        Ok((degree, factor))
    }
}
