//! Input validation for fit configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder parameters,
//! observation values, and the buffer-length contracts of the archive and
//! weight-copy operations.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Explicit contracts**: Buffer lengths are checked here rather than
//!   trusted to callers.
//! * **Generics**: Numeric checks are generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform any fitting itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RecfitError;

// ============================================================================
// Bounds
// ============================================================================

/// Maximum supported polynomial degree.
///
/// The state allocation grows quadratically with degree; this bound keeps a
/// mistyped degree from requesting an enormous buffer.
pub const MAX_DEGREE: usize = 1024;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods returning `Result<(), RecfitError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the polynomial degree against the supported maximum.
    pub fn validate_degree(degree: usize) -> Result<(), RecfitError> {
        if degree > MAX_DEGREE {
            return Err(RecfitError::InvalidDegree {
                got: degree,
                max: MAX_DEGREE,
            });
        }
        Ok(())
    }

    /// Validate the forgetting factor: finite and in (0, 1].
    ///
    /// A factor of exactly 1 disables decay; values above 1 would amplify
    /// history and values at or below 0 would erase or negate it.
    pub fn validate_forgetting_factor<T: Float>(factor: T) -> Result<(), RecfitError> {
        if !factor.is_finite() || factor <= T::zero() || factor > T::one() {
            return Err(RecfitError::InvalidForgettingFactor(
                factor.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), RecfitError> {
        if !val.is_finite() {
            return Err(RecfitError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that an archive slice holds at least the serialized length.
    pub fn validate_archive_len(got: usize, expected: usize) -> Result<(), RecfitError> {
        if got < expected {
            return Err(RecfitError::ArchiveTooShort { got, expected });
        }
        Ok(())
    }

    /// Validate that an output buffer holds at least the documented length.
    pub fn validate_output_len(got: usize, expected: usize) -> Result<(), RecfitError> {
        if got < expected {
            return Err(RecfitError::BufferTooSmall { got, expected });
        }
        Ok(())
    }

    /// Reject builder configurations where a parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate: Option<&'static str>,
    ) -> Result<(), RecfitError> {
        if let Some(parameter) = duplicate {
            return Err(RecfitError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
