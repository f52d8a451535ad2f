#![cfg(feature = "dev")]
//! Tests for the packed triangular state buffer.
//!
//! ## Test Organization
//!
//! 1. **Size formulas** - weight count and archive length
//! 2. **Packed layout** - row/column-to-offset mapping
//! 3. **Load/refill** - bulk state mutation

use recfit_rs::internals::primitives::buffer::{archive_len, num_weights, TriangularState};

// ============================================================================
// Size Formula Tests
// ============================================================================

#[test]
fn test_num_weights_formula() {
    assert_eq!(num_weights(0), 1);
    assert_eq!(num_weights(1), 2);
    assert_eq!(num_weights(3), 4);
    assert_eq!(num_weights(10), 11);
}

#[test]
fn test_archive_len_formula() {
    assert_eq!(archive_len(0), 2);
    assert_eq!(archive_len(1), 5);
    assert_eq!(archive_len(2), 9);
    assert_eq!(archive_len(3), 14);
    assert_eq!(archive_len(10), 77);
}

/// The packed buffer holds exactly one slot per upper-triangular cell.
#[test]
fn test_archive_len_counts_upper_triangle() {
    for degree in 0..8 {
        let rows = degree + 1;
        let cols = degree + 2;
        let counted: usize = (0..rows).map(|i| cols - i).sum();
        assert_eq!(archive_len(degree), counted);
    }
}

// ============================================================================
// Packed Layout Tests
// ============================================================================

/// Construction fills every cell with the seed.
#[test]
fn test_new_seeds_every_cell() {
    let state = TriangularState::new(3, 1.0e-32f64);
    assert_eq!(state.degree(), 3);
    assert_eq!(state.rows(), 4);
    assert_eq!(state.cols(), 5);
    assert_eq!(state.as_slice().len(), archive_len(3));
    assert!(state.as_slice().iter().all(|&c| c == 1.0e-32));
}

/// Cells are laid out row-major, diagonal through the RHS column.
#[test]
fn test_packed_order_is_row_major_upper_triangle() {
    let degree = 2;
    let mut state = TriangularState::new(degree, 0.0f64);

    // Tag each cell with a value encoding its coordinates.
    for row in 0..state.rows() {
        for col in row..state.cols() {
            *state.at_mut(row, col) = (10 * row + col) as f64;
        }
    }

    let expected = [
        0.0, 1.0, 2.0, 3.0, // row 0: (0,0)..(0,3)
        11.0, 12.0, 13.0, // row 1: (1,1)..(1,3)
        22.0, 23.0, // row 2: (2,2)..(2,3)
    ];
    assert_eq!(state.as_slice(), &expected);
}

/// Reads observe the writes for every addressable cell.
#[test]
fn test_at_roundtrip() {
    let mut state = TriangularState::new(4, 0.0f64);
    for row in 0..state.rows() {
        for col in row..state.cols() {
            *state.at_mut(row, col) = (row * 100 + col) as f64;
        }
    }
    for row in 0..state.rows() {
        for col in row..state.cols() {
            assert_eq!(state.at(row, col), (row * 100 + col) as f64);
        }
    }
}

// ============================================================================
// Load / Refill Tests
// ============================================================================

/// `load` copies serialization order back into the same positions.
#[test]
fn test_load_restores_positions() {
    let values: Vec<f64> = (0..archive_len(2)).map(|i| i as f64).collect();
    let mut state = TriangularState::new(2, 0.0f64);
    state.load(&values);

    assert_eq!(state.at(0, 0), 0.0);
    assert_eq!(state.at(0, 3), 3.0);
    assert_eq!(state.at(1, 1), 4.0);
    assert_eq!(state.at(1, 2), 5.0);
    assert_eq!(state.at(2, 2), 7.0);
    assert_eq!(state.at(2, 3), 8.0);
}

/// Extra trailing values are ignored by `load`.
#[test]
fn test_load_ignores_trailing_values() {
    let mut values: Vec<f64> = (0..archive_len(1)).map(|i| i as f64).collect();
    values.extend_from_slice(&[99.0, 98.0]);

    let mut state = TriangularState::new(1, 0.0f64);
    state.load(&values);
    assert_eq!(state.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
}

/// `refill` restores the freshly constructed state.
#[test]
fn test_refill() {
    let mut state = TriangularState::new(2, 0.5f64);
    *state.at_mut(1, 2) = 42.0;
    state.refill(0.5);
    assert!(state.as_slice().iter().all(|&c| c == 0.5));
}
