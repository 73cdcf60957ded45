//! Output generation: the listings file and the terminal summary.
//!
//! # Submodules
//!
//! - [`csv`]: appends accepted listings to the flat `terrenos.csv` file
//! - [`report`]: formats the end-of-run region/size/price summary blocks
//!
//! The file is append-only across runs; the summary is recomputed from the
//! run's own accumulators every time.

pub mod csv;
pub mod report;
