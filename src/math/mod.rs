//! Dense linear-algebra kernels: normal-equation products and matrix inversion.

pub mod invert;
pub mod kernels;

pub use invert::*;
pub use kernels::*;
