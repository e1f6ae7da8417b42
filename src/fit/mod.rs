//! Normal-equation solver.
//!
//! Responsibilities:
//!
//! - validate the (l, m) shape contract before any numeric work
//! - chain the dense kernels into the closed-form OLS computation
//! - surface singular Gram matrices as terminal errors

pub mod solver;

pub use solver::*;
