//! Gauss-Jordan matrix inversion.
//!
//! The Gram matrix in this project is tiny (one per run, m ≤ a handful of
//! parameters), so a textbook Gauss-Jordan pass over an augmented identity
//! is plenty. There is deliberately no pivoting: the only guard is that a
//! zero (or non-finite) pivot aborts the inversion instead of letting NaN
//! propagate silently through the rest of the pipeline.

use nalgebra::DMatrix;

/// Pivots smaller than this are treated as zero (singular input).
const PIVOT_EPS: f64 = 1e-12;

/// Invert a square matrix via Gauss-Jordan elimination.
///
/// Returns `None` when a pivot is zero or non-finite, i.e. the matrix is
/// singular (or close enough that elimination without pivoting breaks down).
pub fn invert(matrix: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    let n = matrix.nrows();
    assert_eq!(matrix.ncols(), n, "inversion requires a square matrix");

    // Augmented work buffer [M | I]; dropped when the function returns.
    let mut work = DMatrix::<f64>::zeros(n, 2 * n);
    for i in 0..n {
        for j in 0..n {
            work[(i, j)] = matrix[(i, j)];
        }
        work[(i, n + i)] = 1.0;
    }

    for i in 0..n {
        let pivot = work[(i, i)];
        if !pivot.is_finite() || pivot.abs() < PIVOT_EPS {
            return None;
        }

        // Normalize the pivot row. Columns left of the pivot are already zero.
        for j in i..2 * n {
            work[(i, j)] /= pivot;
        }

        // Eliminate the pivot column from every other row.
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = work[(j, i)];
            for k in 0..2 * n {
                work[(j, k)] -= factor * work[(i, k)];
            }
        }
    }

    // The right half now holds the inverse.
    let mut inverse = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            inverse[(i, j)] = work[(i, n + j)];
        }
    }
    Some(inverse)
}
