//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the algorithms into the stateful fit model:
//! - The `RecursiveFit` entity with its lazy coefficient cache and archiving
//! - Fail-fast validation of configuration, inputs, and buffer contracts

/// The recursive fit model.
pub mod fit;

/// Input validation for fit configuration and data.
pub mod validator;
