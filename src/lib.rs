//! `ols-fit` library crate.
//!
//! The binary (`ols`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the kernels are reusable (e.g., from other tools or notebooks)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
