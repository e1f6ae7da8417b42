//! Reporting utilities: residuals, fit quality, and formatted terminal output.
//!
//! We keep formatting code in one place so:
//!
//! - the math/fitting code stays clean and testable
//! - output changes are localized

pub mod format;

pub use format::*;

use nalgebra::DVector;

use crate::domain::{Dataset, FitQuality, FitResidual};
use crate::error::AppError;
use crate::math::matrix_vector_product;

/// Compute fitted values and residuals for each sample.
pub fn compute_residuals(dataset: &Dataset, theta: &DVector<f64>) -> Result<Vec<FitResidual>, AppError> {
    let fitted = matrix_vector_product(&dataset.x, theta);

    let mut out = Vec::with_capacity(fitted.len());
    for i in 0..fitted.len() {
        let y_fit = fitted[i];
        if !y_fit.is_finite() {
            return Err(AppError::numeric(
                "Non-finite prediction during residual computation.",
            ));
        }
        out.push(FitResidual {
            index: i,
            y_obs: dataset.y[i],
            y_fit,
            residual: dataset.y[i] - y_fit,
        });
    }
    Ok(out)
}

/// Summarize residuals into SSE and RMSE.
pub fn compute_quality(residuals: &[FitResidual]) -> FitQuality {
    let n = residuals.len();
    let sse: f64 = residuals.iter().map(|r| r.residual * r.residual).sum();
    let rmse = if n > 0 { (sse / n as f64).sqrt() } else { 0.0 };
    FitQuality { sse, rmse, n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetStats;
    use nalgebra::DMatrix;

    fn dataset(x: DMatrix<f64>, y: DVector<f64>) -> Dataset {
        let stats = DatasetStats {
            n_samples: x.nrows(),
            n_features: x.ncols(),
            n_params: x.ncols(),
            y_min: 0.0,
            y_max: 0.0,
        };
        Dataset {
            x,
            y,
            intercept: false,
            stats,
        }
    }

    #[test]
    fn perfect_fit_has_zero_rmse() {
        let x = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);
        let theta = DVector::from_row_slice(&[2.0]);

        let residuals = compute_residuals(&dataset(x, y), &theta).unwrap();
        let quality = compute_quality(&residuals);

        assert_eq!(quality.n, 3);
        assert!(quality.sse.abs() < 1e-12);
        assert!(quality.rmse.abs() < 1e-12);
    }

    #[test]
    fn residuals_carry_sample_index() {
        let x = DMatrix::from_row_slice(2, 1, &[1.0, 2.0]);
        let y = DVector::from_row_slice(&[1.5, 3.5]);
        let theta = DVector::from_row_slice(&[1.0]);

        let residuals = compute_residuals(&dataset(x, y), &theta).unwrap();
        assert_eq!(residuals[0].index, 0);
        assert_eq!(residuals[1].index, 1);
        assert!((residuals[0].residual - 0.5).abs() < 1e-12);
        assert!((residuals[1].residual - 1.5).abs() < 1e-12);
    }
}
