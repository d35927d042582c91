//! country-match
//!
//! CLI-side plumbing around the `country_match_common` engine: reference
//! file selection, batch input, parallel batch runs and report files.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod reference;
pub mod report;

pub use batch::{BatchOutput, BatchRunner};
pub use config::Config;
pub use error::{CountryMatchError, Result};
pub use report::BatchReport;
