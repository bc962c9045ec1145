//! Numerical comparisons with tolerance
//!
//! Shared by the integration tests so failures report the offending element.

use nalgebra::DMatrix;

/// Compare scalar values with tolerance
pub fn assert_scalar_close(actual: f64, expected: f64, tolerance: f64, field_name: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {}, got {} (diff: {}, tolerance: {})",
        field_name,
        expected,
        actual,
        diff,
        tolerance
    );
}

/// Compare slices element-wise with tolerance
pub fn assert_vec_close(actual: &[f64], expected: &[f64], tolerance: f64, field_name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: length mismatch (actual: {}, expected: {})",
        field_name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{}[{}]: expected {}, got {} (diff: {}, tolerance: {})",
            field_name,
            i,
            e,
            a,
            diff,
            tolerance
        );
    }
}

/// Compare a matrix against nested rows with tolerance
pub fn assert_matrix_rows_close(
    actual: &DMatrix<f64>,
    expected: &[Vec<f64>],
    tolerance: f64,
    field_name: &str,
) {
    assert_eq!(
        actual.nrows(),
        expected.len(),
        "{}: row count mismatch (actual: {}, expected: {})",
        field_name,
        actual.nrows(),
        expected.len()
    );

    for (i, row) in expected.iter().enumerate() {
        let actual_row: Vec<f64> = actual.row(i).iter().copied().collect();
        assert_vec_close(&actual_row, row, tolerance, &format!("{}[{}]", field_name, i));
    }
}

/// Assert that a square matrix equals its transpose within tolerance
pub fn assert_symmetric(matrix: &DMatrix<f64>, tolerance: f64, field_name: &str) {
    for i in 0..matrix.nrows() {
        for j in (i + 1)..matrix.ncols() {
            let diff = (matrix[(i, j)] - matrix[(j, i)]).abs();
            assert!(
                diff <= tolerance,
                "{}: [{},{}]={} but [{},{}]={}",
                field_name,
                i,
                j,
                matrix[(i, j)],
                j,
                i,
                matrix[(j, i)]
            );
        }
    }
}
