//! Shared domain types.
//!
//! These types are intentionally kept lightweight and (where useful)
//! serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON for downstream tooling
//! - reloaded later for comparisons

use std::path::PathBuf;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// A full run's configuration as understood by the fit pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Path of the design-matrix text file (one sample per line).
    pub data_path: PathBuf,
    /// Path of the target-vector text file (one value per line).
    pub target_path: PathBuf,
    /// Path the coefficient vector is written to.
    pub output_path: PathBuf,

    /// Expected sample count. When `None`, the count is taken from the files.
    pub rows: Option<usize>,
    /// Feature columns per line in the data file.
    pub cols: usize,
    /// Append a constant-1.0 column and fit an intercept term.
    pub intercept: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Optional JSON export of the fitted model.
    pub export_json: Option<PathBuf>,
}

/// Configuration for synthetic dataset generation (`ols gen`).
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub count: usize,
    pub seed: u64,
    /// Slope of the underlying line.
    pub slope: f64,
    /// Constant offset of the underlying line.
    pub offset: f64,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_sigma: f64,
    pub data_path: PathBuf,
    pub target_path: PathBuf,
}

/// Summary stats about the samples actually used for fitting.
#[derive(Debug, Clone)]
pub struct DatasetStats {
    pub n_samples: usize,
    /// Feature columns as read from the file (excludes the intercept column).
    pub n_features: usize,
    /// Parameter count of the model (`n_features` plus one when an intercept
    /// column was appended).
    pub n_params: usize,
    pub y_min: f64,
    pub y_max: f64,
}

/// The loaded (and possibly intercept-augmented) regression inputs.
///
/// `x` is l×m with l = `stats.n_samples` and m = `stats.n_params`; `y` has
/// length l. Shapes are fixed once loading completes.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x: DMatrix<f64>,
    pub y: DVector<f64>,
    /// Whether the last column of `x` is the appended constant-1.0 column.
    pub intercept: bool,
    pub stats: DatasetStats,
}

impl Dataset {
    /// The first raw feature column, used for single-feature plotting.
    pub fn first_feature(&self) -> Vec<f64> {
        (0..self.x.nrows()).map(|i| self.x[(i, 0)]).collect()
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// A per-sample fitted result.
#[derive(Debug, Clone)]
pub struct FitResidual {
    /// Zero-based sample index (line `index + 1` of the input files).
    pub index: usize,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// JSON export schema for a fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoefficientFile {
    pub tool: String,
    /// Full coefficient vector in parameter order (intercept last, if any).
    pub coefficients: Vec<f64>,
    pub intercept: Option<f64>,
    pub quality: FitQuality,
}
