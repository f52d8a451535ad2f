//! # recfit-rs: Recursive Least-Squares Polynomial Fitting
//!
//! A streaming polynomial fitter that updates its estimate incrementally as
//! each `(x, y)` observation arrives, without ever storing the observation
//! history. Memory is bounded by the polynomial degree alone, which makes it
//! a fit for embedded and streaming contexts: sensor fitting, online
//! calibration, drift tracking.
//!
//! ## How it works
//!
//! The fitter maintains an upper-triangular factor of the least-squares
//! system (the R of a QR decomposition) plus one augmented column for the
//! accumulated right-hand side. Each new observation is folded into the
//! triangle with a sweep of Givens rotations (a numerically stable
//! sequential QR update), and a forgetting factor slightly below one decays
//! the influence of older observations so the fit can track a slowly
//! changing underlying function.
//!
//! Coefficients are recovered lazily by back-substitution and cached until
//! the next update. The exact triangular state can be serialized to a flat
//! numeric archive and restored later, continuing the recursive fit as if it
//! had never been interrupted.
//!
//! **Key properties:**
//! - O(degree) memory, O(degree²) work per observation, O(degree) solve
//! - No raw data retained; sufficient statistics only
//! - Exponential forgetting for slowly time-varying signals
//! - Exact-state archive/restore, safe across process restarts
//!
//! ## Quick Start
//!
//! ```rust
//! use recfit_rs::prelude::*;
//!
//! // Fit a quadratic to a stream of observations
//! let mut fit = Recfit::new().degree(2).build()?;
//! for i in 0..20 {
//!     let x = i as f64;
//!     fit.add_point(x, 1.0 + 2.0 * x + 0.5 * x * x)?;
//! }
//!
//! let weights = fit.weights(); // lowest power first
//! assert!((weights[0] - 1.0).abs() < 1e-3);
//! assert!((weights[1] - 2.0).abs() < 1e-3);
//! assert!((weights[2] - 0.5).abs() < 1e-3);
//! # Result::<(), RecfitError>::Ok(())
//! ```
//!
//! ### Evaluating the fit
//!
//! ```rust
//! use recfit_rs::prelude::*;
//!
//! let mut fit = Recfit::new().degree(1).build()?;
//! for i in 0..10 {
//!     fit.add_point(i as f64, 2.0 * i as f64 + 1.0)?;
//! }
//!
//! // Horner evaluation of the fitted polynomial
//! assert!((fit.estimate(20.0) - 41.0).abs() < 1e-3);
//! # Result::<(), RecfitError>::Ok(())
//! ```
//!
//! ### Saving and restoring the exact state
//!
//! The archive captures the triangular state itself, not the derived
//! coefficients; subsequent updates are path dependent, so this is what
//! makes restoration exact:
//!
//! ```rust
//! use recfit_rs::prelude::*;
//!
//! let mut fit = Recfit::new().degree(3).build()?;
//! for i in 0..5 {
//!     let x = i as f64;
//!     fit.add_point(x, x * x * x)?;
//! }
//!
//! let archive = fit.to_archive();
//! assert_eq!(archive.len(), archive_len(3));
//!
//! // Continue both the original and the restored fit with the same data:
//! // they stay indistinguishable.
//! let mut restored = RecursiveFit::from_archive(3, &archive)?;
//! for i in 5..10 {
//!     let x = i as f64;
//!     fit.add_point(x, x * x * x)?;
//!     restored.add_point(x, x * x * x)?;
//! }
//! assert_eq!(fit.weights(), restored.weights());
//! # Result::<(), RecfitError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter             | Default     | Range          | Description                                  |
//! |-----------------------|-------------|----------------|----------------------------------------------|
//! | **degree**            | 1           | 0..=1024       | Polynomial degree; fixes all buffer sizes    |
//! | **forgetting_factor** | `1 - 1e-11` | (0, 1]         | Per-update decay of prior observations       |
//!
//! A forgetting factor of exactly 1 disables decay (all history weighted
//! equally). In `f32` the default rounds to 1; pass an explicit factor such
//! as `1.0 - 1e-6` if decay matters at single precision.
//!
//! ## Degenerate data
//!
//! Fitting with zero points, or with fewer distinct x-values than the degree
//! requires, does not fail: the diagonal of the triangle is seeded with a
//! tiny positive floor that keeps the system invertible. Early estimates are
//! biased toward zero until enough data arrives: a deliberate
//! regularization, not an error path.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! recfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! All buffers are allocated once at construction and never resized, so a
//! fit of degree `d` costs a fixed `(d+4)(d+1)/2 + 2(d+1) + 1` floats for
//! its whole lifetime.
//!
//! ## References
//!
//! - Gentleman, W. M. (1973). "Least Squares Computations by Givens
//!   Transformations Without Square Roots"
//! - Golub, G. H. & Van Loan, C. F. "Matrix Computations", ch. 5: Givens
//!   QR and updating

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the packed triangular state buffer, its size formulas, and the
// error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the Givens rotation pair with exponential forgetting, and
// polynomial design-vector/Horner helpers.
mod math;

// Layer 3: Algorithms - the core fitting algorithms.
//
// Contains the sequential QR observation fold and the back-substitution
// solver.
mod algorithms;

// Layer 4: Engine - orchestration and state.
//
// Contains the `RecursiveFit` model (lazy weight cache, archiving) and
// fail-fast validation.
mod engine;

// High-level fluent API for recursive fitting.
//
// Provides the `Recfit` builder for configuring and creating fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use recfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        archive_len, num_weights, RecfitBuilder as Recfit, RecfitError, RecursiveFit, MAX_DEGREE,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine and validation.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
