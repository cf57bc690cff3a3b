use thiserror::Error;

#[derive(Error, Debug)]
pub enum NagfmtError {
    #[error("empty threshold range")]
    EmptyRange,

    #[error("invalid range bound: {0}")]
    InvalidRangeBound(String),

    #[error("range start {start} is greater than range end {end}")]
    FlippedRange { start: f64, end: f64 },

    #[error("perfdata value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("perfdata label must not be empty")]
    EmptyLabel,

    #[error("perfdata label contains reserved character: {0}")]
    InvalidLabel(String),

    #[error("unrecognized unit of measurement: {0}")]
    UnknownUom(String),

    #[error("invalid min/max: {min} is greater than {max}")]
    InvalidMinMax { min: f64, max: f64 },

    #[error("illegal verbosity level: {0}")]
    IllegalVerbosity(u8),
}

pub type Result<T> = std::result::Result<T, NagfmtError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
