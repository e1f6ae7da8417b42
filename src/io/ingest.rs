//! Text-file ingest and validation.
//!
//! This module turns the two plain-text input files into a `Dataset` that is
//! safe to fit:
//!
//! - the data file carries one sample per line, `cols` whitespace-separated
//!   decimal values each
//! - the target file carries one value per line
//! - line `i` of each file corresponds to sample `i`
//!
//! Design goals:
//!
//! - **Strict validation** with file + line number in every error
//! - **No partial loads**: the solver only ever sees a fully-loaded dataset
//! - **Separation of concerns**: no fitting logic here

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::{DMatrix, DVector};

use crate::domain::{Dataset, DatasetStats, FitConfig};
use crate::error::AppError;

/// Load and validate the design matrix and target vector.
///
/// When `config.intercept` is set, a constant-1.0 column is appended as the
/// last column, so the fitted θ carries the intercept in its last entry.
pub fn load_dataset(config: &FitConfig) -> Result<Dataset, AppError> {
    if config.cols == 0 {
        return Err(AppError::data("Feature column count must be > 0."));
    }

    let samples = read_feature_rows(&config.data_path, config.cols)?;
    let targets = read_target_values(&config.target_path)?;

    if let Some(rows) = config.rows {
        if samples.len() != rows {
            return Err(AppError::data(format!(
                "'{}': expected {rows} rows, found {}.",
                config.data_path.display(),
                samples.len()
            )));
        }
        if targets.len() != rows {
            return Err(AppError::data(format!(
                "'{}': expected {rows} rows, found {}.",
                config.target_path.display(),
                targets.len()
            )));
        }
    } else if samples.len() != targets.len() {
        return Err(AppError::data(format!(
            "Row-count mismatch: '{}' has {} rows, '{}' has {}.",
            config.data_path.display(),
            samples.len(),
            config.target_path.display(),
            targets.len()
        )));
    }

    let l = samples.len();
    if l == 0 {
        return Err(AppError::data(format!(
            "'{}' contains no samples.",
            config.data_path.display()
        )));
    }

    let m = config.cols + usize::from(config.intercept);
    let mut x = DMatrix::<f64>::zeros(l, m);
    for (i, row) in samples.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            x[(i, j)] = *v;
        }
        if config.intercept {
            x[(i, m - 1)] = 1.0;
        }
    }
    let y = DVector::from_vec(targets);

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for v in y.iter() {
        y_min = y_min.min(*v);
        y_max = y_max.max(*v);
    }

    let stats = DatasetStats {
        n_samples: l,
        n_features: config.cols,
        n_params: m,
        y_min,
        y_max,
    };

    Ok(Dataset {
        x,
        y,
        intercept: config.intercept,
        stats,
    })
}

fn read_feature_rows(path: &Path, cols: usize) -> Result<Vec<Vec<f64>>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open data matrix '{}': {e}", path.display())))?;

    let mut rows = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|e| AppError::io(format!("Failed to read '{}': {e}", path.display())))?;
        // Tolerate trailing blank lines; everything else is strict.
        if line.trim().is_empty() {
            continue;
        }

        let values = parse_line(&line, path, idx + 1)?;
        if values.len() != cols {
            return Err(AppError::data(format!(
                "'{}': line {}: expected {cols} values, found {}.",
                path.display(),
                idx + 1,
                values.len()
            )));
        }
        rows.push(values);
    }
    Ok(rows)
}

fn read_target_values(path: &Path) -> Result<Vec<f64>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open target vector '{}': {e}", path.display())))?;

    let mut values = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|e| AppError::io(format!("Failed to read '{}': {e}", path.display())))?;
        if line.trim().is_empty() {
            continue;
        }

        let row = parse_line(&line, path, idx + 1)?;
        if row.len() != 1 {
            return Err(AppError::data(format!(
                "'{}': line {}: expected a single value, found {}.",
                path.display(),
                idx + 1,
                row.len()
            )));
        }
        values.push(row[0]);
    }
    Ok(values)
}

fn parse_line(line: &str, path: &Path, line_no: usize) -> Result<Vec<f64>, AppError> {
    line.split_whitespace()
        .map(|token| {
            let v: f64 = token.parse().map_err(|_| {
                AppError::data(format!(
                    "'{}': line {line_no}: invalid numeric literal '{token}'.",
                    path.display()
                ))
            })?;
            if !v.is_finite() {
                return Err(AppError::data(format!(
                    "'{}': line {line_no}: non-finite value '{token}'.",
                    path.display()
                )));
            }
            Ok(v)
        })
        .collect()
}
