use clap::Parser;

use crate::perfdata::Uom;
use crate::range::Range;

#[derive(Parser, Debug)]
#[command(name = "nagfmt")]
#[command(author, version, about = "Generic threshold check plugin")]
#[command(allow_negative_numbers = true)]
#[command(long_about = "Checks a measured value against Nagios threshold ranges and emits\n\
    plugin-formatted output.\n\n\
    Exit codes:\n  \
    0 - OK\n  \
    1 - WARNING\n  \
    2 - CRITICAL\n  \
    3 - UNKNOWN")]
pub struct Cli {
    /// Measured value to check
    pub value: f64,

    /// Metric label reported in the perfdata block
    #[arg(short, long, default_value = "value")]
    pub label: String,

    /// Unit of measurement (us, ms, s, %, b, kb, mb, gb, tb, c)
    #[arg(short, long, default_value = "")]
    pub uom: Uom,

    /// Warning threshold (Nagios range syntax, e.g. 0:10, 5:, ~:3, @5:10)
    #[arg(short, long)]
    pub warn: Option<Range>,

    /// Critical threshold (Nagios range syntax)
    #[arg(short, long)]
    pub crit: Option<Range>,

    /// Minimum of the metric's scale, for the perfdata block
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum of the metric's scale, for the perfdata block
    #[arg(long)]
    pub max: Option<f64>,

    /// Extra long plugin output (can be specified multiple times)
    #[arg(long = "long-output")]
    pub long_output: Vec<String>,

    /// Output verbosity level (0 = minimal canned message, 3 = debug)
    #[arg(short, long, default_value_t = 1)]
    pub verbosity: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
