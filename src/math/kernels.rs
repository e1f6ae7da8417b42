//! Dense multiply kernels used to form the normal equations.
//!
//! All three kernels are pure functions: they read their inputs through
//! shared references and return freshly allocated outputs. Dimensions are
//! fixed at pipeline start and never vary mid-run, so shape contracts are
//! enforced with asserts (a violation is a programming error, not a
//! recoverable runtime condition).

use nalgebra::{DMatrix, DVector};

/// Compute the Gram matrix `XᵀX`.
///
/// `x` is l×m (rows = samples, columns = parameters); the output is the m×m
/// symmetric matrix with `out[(i, j)] = Σ_k x[(k, j)] · x[(k, i)]`. O(l·m²).
pub fn gram_matrix(x: &DMatrix<f64>) -> DMatrix<f64> {
    let l = x.nrows();
    let m = x.ncols();

    let mut out = DMatrix::<f64>::zeros(m, m);
    for i in 0..m {
        for j in 0..m {
            let mut sum = 0.0;
            for k in 0..l {
                sum += x[(k, j)] * x[(k, i)];
            }
            out[(i, j)] = sum;
        }
    }
    out
}

/// Compute `A·Bᵀ` where `a` is a square m×m coefficient matrix and `b` is l×m.
///
/// The output is m×l with `out[(i, j)] = Σ_k a[(i, k)] · b[(j, k)]`. O(l·m²).
///
/// In the solver this produces the projection matrix `G⁻¹Xᵀ`.
pub fn product_with_transpose(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
    let m = a.nrows();
    let l = b.nrows();
    assert_eq!(a.ncols(), m, "left operand must be square");
    assert_eq!(b.ncols(), m, "column count of right operand must match left operand");

    let mut out = DMatrix::<f64>::zeros(m, l);
    for i in 0..m {
        for j in 0..l {
            let mut sum = 0.0;
            for k in 0..m {
                sum += a[(i, k)] * b[(j, k)];
            }
            out[(i, j)] = sum;
        }
    }
    out
}

/// Classical dense matrix-vector product `A·v`.
///
/// `a` is r×c, `v` has length c; the output has length r with
/// `out[i] = Σ_j a[(i, j)] · v[j]`. O(r·c).
pub fn matrix_vector_product(a: &DMatrix<f64>, v: &DVector<f64>) -> DVector<f64> {
    assert_eq!(a.ncols(), v.len(), "vector length must match matrix column count");

    let mut out = DVector::<f64>::zeros(a.nrows());
    for i in 0..a.nrows() {
        let mut sum = 0.0;
        for j in 0..a.ncols() {
            sum += a[(i, j)] * v[j];
        }
        out[i] = sum;
    }
    out
}
