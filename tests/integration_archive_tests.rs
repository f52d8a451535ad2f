//! Integration tests for exact-state archiving.
//!
//! The central contract: an archive captures the triangular state itself,
//! so a restored fit continues *exactly* as if it had never been
//! serialized, not merely with the same current coefficients.

use recfit_rs::prelude::*;

fn sample_stream(n: usize) -> impl Iterator<Item = (f64, f64)> {
    (0..n).map(|i| {
        let x = i as f64 * 0.4;
        (x, 1.5 - 0.7 * x + (x * 0.9).sin())
    })
}

// ============================================================================
// Length Contracts
// ============================================================================

/// The archive length depends on the degree only, never on the data volume.
#[test]
fn test_archive_length_is_data_independent() {
    for degree in 0..6 {
        let mut fit = Recfit::new().degree(degree).build().unwrap();
        assert_eq!(fit.to_archive().len(), archive_len(degree));

        for (x, y) in sample_stream(17) {
            fit.add_point(x, y).unwrap();
        }
        assert_eq!(fit.to_archive().len(), archive_len(degree));
        assert_eq!(fit.archive_len(), archive_len(degree));
    }
}

/// `archive_into` writes exactly the serialized length and nothing more.
#[test]
fn test_archive_into_writes_leading_slots_only() {
    let mut fit = Recfit::new().degree(2).build().unwrap();
    for (x, y) in sample_stream(9) {
        fit.add_point(x, y).unwrap();
    }

    let mut out = vec![-1.0f64; archive_len(2) + 3];
    fit.archive_into(&mut out).unwrap();

    assert_eq!(&out[..archive_len(2)], &fit.to_archive()[..]);
    assert_eq!(&out[archive_len(2)..], &[-1.0, -1.0, -1.0]);
}

#[test]
fn test_archive_into_rejects_short_buffers() {
    let fit: RecursiveFit<f64> = Recfit::new().degree(3).build().unwrap();
    let mut out = vec![0.0f64; archive_len(3) - 1];
    let err = fit.archive_into(&mut out).unwrap_err();
    assert_eq!(
        err,
        RecfitError::BufferTooSmall {
            got: archive_len(3) - 1,
            expected: archive_len(3),
        }
    );
}

#[test]
fn test_copy_weights_rejects_short_buffers() {
    let mut fit: RecursiveFit<f64> = Recfit::new().degree(3).build().unwrap();
    let mut out = [0.0f64; 3];
    let err = fit.copy_weights(&mut out).unwrap_err();
    assert_eq!(err, RecfitError::BufferTooSmall { got: 3, expected: 4 });
}

// ============================================================================
// Round-Trip Exactness
// ============================================================================

/// Restoring reproduces the current coefficients exactly.
#[test]
fn test_roundtrip_preserves_weights() {
    let mut fit = Recfit::new().degree(3).build().unwrap();
    for (x, y) in sample_stream(12) {
        fit.add_point(x, y).unwrap();
    }

    let archive = fit.to_archive();
    let mut restored = RecursiveFit::from_archive(3, &archive).unwrap();

    assert_eq!(fit.weights(), restored.weights());
    assert_eq!(fit.estimate(2.5), restored.estimate(2.5));
}

/// The central contract: serialize mid-stream, then feed both fits the
/// same remaining points; they stay indistinguishable.
#[test]
fn test_roundtrip_continuation_is_exact() {
    let points: Vec<(f64, f64)> = sample_stream(20).collect();

    let mut uninterrupted = Recfit::new().degree(2).build().unwrap();
    for &(x, y) in &points[..10] {
        uninterrupted.add_point(x, y).unwrap();
    }

    let archive = uninterrupted.to_archive();
    let mut resumed = RecursiveFit::from_archive(2, &archive).unwrap();

    for &(x, y) in &points[10..] {
        uninterrupted.add_point(x, y).unwrap();
        resumed.add_point(x, y).unwrap();
    }

    assert_eq!(uninterrupted.weights(), resumed.weights());
    assert_eq!(uninterrupted.to_archive(), resumed.to_archive());
}

/// Serializing repeatedly without intervening updates is idempotent.
#[test]
fn test_archive_is_idempotent() {
    let mut fit = Recfit::new().degree(1).build().unwrap();
    for (x, y) in sample_stream(5) {
        fit.add_point(x, y).unwrap();
    }
    assert_eq!(fit.to_archive(), fit.to_archive());
}

// ============================================================================
// Restore Contracts
// ============================================================================

#[test]
fn test_from_archive_rejects_short_slices() {
    let short = vec![0.0f64; archive_len(3) - 1];
    let err = RecursiveFit::from_archive(3, &short).unwrap_err();
    assert_eq!(
        err,
        RecfitError::ArchiveTooShort {
            got: archive_len(3) - 1,
            expected: archive_len(3),
        }
    );
}

/// Slices longer than the serialized length are accepted; the extra values
/// are ignored.
#[test]
fn test_from_archive_accepts_longer_slices() {
    let mut fit = Recfit::new().degree(2).build().unwrap();
    for (x, y) in sample_stream(7) {
        fit.add_point(x, y).unwrap();
    }

    let mut padded = fit.to_archive();
    padded.extend_from_slice(&[42.0, 43.0]);

    let mut restored = RecursiveFit::from_archive(2, &padded).unwrap();
    assert_eq!(fit.weights(), restored.weights());
}

/// A restored empty fit behaves like a fresh one.
#[test]
fn test_roundtrip_of_empty_fit() {
    let fresh: RecursiveFit<f64> = Recfit::new().degree(3).build().unwrap();
    let archive = fresh.to_archive();

    let mut restored = RecursiveFit::from_archive(3, &archive).unwrap();
    let mut reference: RecursiveFit<f64> = Recfit::new().degree(3).build().unwrap();

    for (x, y) in sample_stream(10) {
        restored.add_point(x, y).unwrap();
        reference.add_point(x, y).unwrap();
    }
    assert_eq!(restored.weights(), reference.weights());
}
