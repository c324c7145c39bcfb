use crate::ops::traits::NodeNumeric;

/// Checks that two slices have the same length and are element-wise within `tolerance`.
/// Panics with the first offending index otherwise.
pub(crate) fn check_slice_near<T: NodeNumeric>(actual: &[T], expected: &[T], tolerance: T) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
