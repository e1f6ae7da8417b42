//! Command-line parsing for the normal-equation OLS fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ols", version, about = "Linear regression via the normal equations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit OLS coefficients from two text files and write them out.
    Fit(FitArgs),
    /// Generate a synthetic noisy-line dataset in the fit input format.
    Gen(GenArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Design-matrix text file (one sample per line).
    #[arg(short = 'x', long = "data", default_value = "X.txt")]
    pub data: PathBuf,

    /// Target-vector text file (one value per line).
    #[arg(short = 'y', long = "target", default_value = "y.txt")]
    pub target: PathBuf,

    /// Output file for the coefficient vector (one value per line).
    #[arg(short = 'o', long = "output", default_value = "output.txt")]
    pub output: PathBuf,

    /// Expected row count; inferred from the files when omitted.
    #[arg(long)]
    pub rows: Option<usize>,

    /// Feature columns per line in the data file.
    #[arg(long, default_value_t = 1)]
    pub cols: usize,

    /// Fit an intercept term (appends a constant-1.0 column to X).
    #[arg(long)]
    pub intercept: bool,

    /// Render an ASCII plot of the fit (single-feature data only).
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the fitted model (coefficients + diagnostics) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for synthetic dataset generation.
#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Number of samples to generate.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed for noise generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Slope of the underlying line.
    #[arg(long, default_value_t = 1.0)]
    pub slope: f64,

    /// Constant offset of the underlying line.
    #[arg(long, default_value_t = 100.0)]
    pub offset: f64,

    /// Standard deviation of the additive Gaussian noise.
    #[arg(long = "noise", default_value_t = 3.0)]
    pub noise_sigma: f64,

    /// Where to write the feature column.
    #[arg(short = 'x', long = "data", default_value = "X.txt")]
    pub data: PathBuf,

    /// Where to write the target column.
    #[arg(short = 'y', long = "target", default_value = "y.txt")]
    pub target: PathBuf,
}
