//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - run configuration (`FitConfig`, `GenConfig`)
//! - the loaded dataset (`Dataset`, `DatasetStats`)
//! - fit outputs (`FitQuality`, `FitResidual`, `CoefficientFile`)

pub mod types;

pub use types::*;
