use std::fmt;
use std::str::FromStr;

use crate::error::{NagfmtError, Result};
use crate::range::{Range, fmt_finite};

/// A single finite measurement. Construction rejects NaN and infinities,
/// so a value is always printable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfDatumValue(f64);

impl PerfDatumValue {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(NagfmtError::NonFiniteValue(value))
        }
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PerfDatumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit of measurement tag appended to a perf-datum's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Uom {
    Microseconds,
    Milliseconds,
    Seconds,
    Percent,
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Counter,
    #[default]
    None,
}

impl Uom {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Percent => "%",
            Self::Bytes => "b",
            Self::Kilobytes => "kb",
            Self::Megabytes => "mb",
            Self::Gigabytes => "gb",
            Self::Terabytes => "tb",
            Self::Counter => "c",
            Self::None => "",
        }
    }
}

impl fmt::Display for Uom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uom {
    type Err = NagfmtError;

    /// Case-insensitive; the empty string is the unitless UOM.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Microseconds),
            "ms" => Ok(Self::Milliseconds),
            "s" => Ok(Self::Seconds),
            "%" => Ok(Self::Percent),
            "b" => Ok(Self::Bytes),
            "kb" => Ok(Self::Kilobytes),
            "mb" => Ok(Self::Megabytes),
            "gb" => Ok(Self::Gigabytes),
            "tb" => Ok(Self::Terabytes),
            "c" => Ok(Self::Counter),
            "" => Ok(Self::None),
            other => Err(NagfmtError::UnknownUom(other.to_string())),
        }
    }
}

/// One reported metric plus its thresholds, rendered per the fixed wire
/// grammar `'label'=value<uom>;<warn>;<crit>;<min>;<max>`.
///
/// The four trailing fields are structurally always present; any bound that
/// is absent, NaN or infinite renders as the empty string between its
/// semicolons.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    label: String,
    uom: Uom,
    value: PerfDatumValue,
    warn: Option<Range>,
    crit: Option<Range>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PerfDatum {
    /// Validates and constructs a perf-datum.
    ///
    /// The label must be non-empty and free of `'`, `=` and spaces, which
    /// are separators in the wire format. `min` must not exceed `max` when
    /// both are finite. Whether the value lies within `warn` or `crit` is a
    /// runtime breach condition for the caller, not a construction error.
    pub fn new(
        label: &str,
        uom: Uom,
        value: PerfDatumValue,
        warn: Option<Range>,
        crit: Option<Range>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self> {
        if label.is_empty() {
            return Err(NagfmtError::EmptyLabel);
        }
        if label.contains(['\'', '=', ' ']) {
            return Err(NagfmtError::InvalidLabel(label.to_string()));
        }
        if let (Some(min), Some(max)) = (min, max)
            && min.is_finite()
            && max.is_finite()
            && min > max
        {
            return Err(NagfmtError::InvalidMinMax { min, max });
        }
        Ok(Self {
            label: label.to_string(),
            uom,
            value,
            warn,
            crit,
            min,
            max,
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn value(&self) -> PerfDatumValue {
        self.value
    }
}

impl fmt::Display for PerfDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label,
            self.value,
            self.uom,
            fmt_opt_range(self.warn),
            fmt_opt_range(self.crit),
            fmt_opt_bound(self.min),
            fmt_opt_bound(self.max),
        )
    }
}

fn fmt_opt_range(range: Option<Range>) -> String {
    range.map_or_else(String::new, |r| r.to_string())
}

fn fmt_opt_bound(bound: Option<f64>) -> String {
    bound.map_or_else(String::new, fmt_finite)
}

/// Joins rendered perf-data with spaces and prefixes the block with `" | "`.
/// Returns the empty string for an empty slice. Insertion order preserved.
#[must_use]
pub fn render_perfdata(perfdata: &[PerfDatum]) -> String {
    if perfdata.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = perfdata.iter().map(ToString::to_string).collect();
    format!(" | {}", rendered.join(" "))
}

#[cfg(test)]
#[path = "perfdata_tests.rs"]
mod tests;
