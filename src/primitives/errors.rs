//! Error types for recursive fitting operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! driving a recursive fit, including builder validation, input validation,
//! and buffer-length contract violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Builder validation**: Degree bound, forgetting-factor range, duplicate parameters.
//! 2. **Input validation**: Non-finite observation values.
//! 3. **Buffer contracts**: Output buffers and archives that are too short.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for recursive fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RecfitError {
    /// Polynomial degree exceeds the supported maximum.
    InvalidDegree {
        /// The degree provided.
        got: usize,
        /// Maximum supported degree.
        max: usize,
    },

    /// Forgetting factor must be finite and in the range (0, 1].
    InvalidForgettingFactor(f64),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Archive slice is shorter than the serialized state for this degree.
    ArchiveTooShort {
        /// Number of values provided.
        got: usize,
        /// Minimum required number of values.
        expected: usize,
    },

    /// Output buffer is shorter than the documented minimum length.
    BufferTooSmall {
        /// Length of the buffer provided.
        got: usize,
        /// Minimum required length.
        expected: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RecfitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidDegree { got, max } => {
                write!(f, "Invalid degree: {got} (must be at most {max})")
            }
            Self::InvalidForgettingFactor(factor) => {
                write!(
                    f,
                    "Invalid forgetting factor: {factor} (must be > 0 and <= 1)"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::ArchiveTooShort { got, expected } => {
                write!(
                    f,
                    "Archive too short: got {got} values, need at least {expected}"
                )
            }
            Self::BufferTooSmall { got, expected } => {
                write!(
                    f,
                    "Buffer too small: got {got} slots, need at least {expected}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RecfitError {}
