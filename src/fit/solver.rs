//! Closed-form OLS via the normal equations.
//!
//! Given a design matrix `X` (l×m) and target vector `y` (length l), the
//! coefficient vector is `θ = (XᵀX)⁻¹Xᵀy`, computed as a fixed sequence
//! with no branching on data content:
//!
//! 1. `G = XᵀX` (m×m Gram matrix)
//! 2. `G⁻¹` via Gauss-Jordan elimination
//! 3. `P = G⁻¹Xᵀ` (m×l projection matrix)
//! 4. `θ = P·y` (length m)
//!
//! Any stage failure aborts the run; there are no retries and no partial
//! results.

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;
use crate::math::{gram_matrix, invert, matrix_vector_product, product_with_transpose};

/// Solve the normal equations for `x` and `y`.
///
/// Requires `y.len() == x.nrows()` and at least as many samples as
/// parameters; with fewer samples the Gram matrix is singular by
/// construction, so we fail fast with a clearer message than the inversion
/// would produce.
pub fn solve_normal_equations(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<DVector<f64>, AppError> {
    let l = x.nrows();
    let m = x.ncols();

    if l == 0 || m == 0 {
        return Err(AppError::data("No data to fit (empty design matrix)."));
    }
    if y.len() != l {
        return Err(AppError::data(format!(
            "Target length {} does not match sample count {l}.",
            y.len()
        )));
    }
    if l < m {
        return Err(AppError::data(format!(
            "Underdetermined system: {l} samples for {m} parameters."
        )));
    }

    let gram = gram_matrix(x);
    let gram_inv = invert(&gram).ok_or_else(|| {
        AppError::numeric(
            "Gram matrix is singular (collinear or constant feature columns?); cannot solve.",
        )
    })?;

    let projection = product_with_transpose(&gram_inv, x);
    let theta = matrix_vector_product(&projection, y);

    if theta.iter().any(|v| !v.is_finite()) {
        return Err(AppError::numeric("Non-finite coefficients in solution."));
    }

    Ok(theta)
}
