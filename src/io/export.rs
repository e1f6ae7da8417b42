//! Coefficient exports.
//!
//! Two formats:
//!
//! - plain text, one coefficient per line in parameter order (feature
//!   coefficients first, intercept last when fitted) — the format other
//!   scripts in this workflow already consume
//! - JSON with fit diagnostics attached (`domain::CoefficientFile`)

use std::fs::File;
use std::io::Write;
use std::path::Path;

use nalgebra::DVector;

use crate::domain::{CoefficientFile, FitQuality};
use crate::error::AppError;

/// Write the coefficient vector as plain text, one value per line.
pub fn write_coefficients(path: &Path, theta: &DVector<f64>) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create output '{}': {e}", path.display())))?;

    for v in theta.iter() {
        writeln!(file, "{v}")
            .map_err(|e| AppError::io(format!("Failed to write output '{}': {e}", path.display())))?;
    }

    Ok(())
}

/// Write the fitted model as JSON.
pub fn write_fit_json(
    path: &Path,
    theta: &DVector<f64>,
    intercept: bool,
    quality: &FitQuality,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create JSON export '{}': {e}", path.display())))?;

    let coefficients: Vec<f64> = theta.iter().copied().collect();
    let intercept_value = if intercept { coefficients.last().copied() } else { None };

    let export = CoefficientFile {
        tool: "ols".to_string(),
        coefficients,
        intercept: intercept_value,
        quality: quality.clone(),
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::io(format!("Failed to write JSON export: {e}")))?;

    Ok(())
}

/// Read a previously exported JSON model (round-trip helper for tooling).
pub fn read_fit_json(path: &Path) -> Result<CoefficientFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open JSON export '{}': {e}", path.display())))?;
    let export: CoefficientFile = serde_json::from_reader(file)
        .map_err(|e| AppError::data(format!("Invalid JSON export: {e}")))?;
    Ok(export)
}
