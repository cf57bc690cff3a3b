pub mod check;
pub mod cli;
pub mod error;
pub mod perfdata;
pub mod range;
pub mod runner;
pub mod status;

pub use check::{Check, CheckResult, Verbosity};
pub use error::{NagfmtError, Result};
pub use perfdata::{PerfDatum, PerfDatumValue, Uom, render_perfdata};
pub use range::Range;
pub use runner::{exit, run};
pub use status::{Status, StatusPolicy};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
