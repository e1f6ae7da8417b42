//! Input/output helpers.
//!
//! - text-file ingest + validation (`ingest`)
//! - coefficient exports (text/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
