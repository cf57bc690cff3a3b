use std::fmt;
use std::str::FromStr;

use crate::error::{NagfmtError, Result};

/// A Nagios threshold range: `[@]{N|~}[:{N}]`.
///
/// Represents the interval `[start, end]`. By default a value *outside* the
/// interval breaches the threshold; a leading `@` inverts this so a value
/// *inside* breaches. A bare number `N` is shorthand for `0:N`, `~` stands
/// for negative infinity and an omitted end for positive infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    start: f64,
    end: f64,
    invert: bool,
}

impl Range {
    /// A plain `start:end` range without inversion.
    ///
    /// Fails when both bounds are finite and flipped. Non-finite bounds are
    /// accepted and fall under the render-time omission rule.
    pub fn simple(start: f64, end: f64) -> Result<Self> {
        if start.is_finite() && end.is_finite() && start > end {
            return Err(NagfmtError::FlippedRange { start, end });
        }
        Ok(Self {
            start,
            end,
            invert: false,
        })
    }

    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Whether `value` lies inside the interval. NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether `value` crosses the threshold: outside the interval by
    /// default, inside it when the range is inverted.
    #[must_use]
    pub fn breached(&self, value: f64) -> bool {
        self.contains(value) == self.invert
    }
}

impl FromStr for Range {
    type Err = NagfmtError;

    fn from_str(s: &str) -> Result<Self> {
        let (invert, body) = s
            .strip_prefix('@')
            .map_or((false, s), |rest| (true, rest));
        if body.is_empty() {
            return Err(NagfmtError::EmptyRange);
        }

        let (start, end) = match body.split_once(':') {
            None => (0.0, parse_bound(body)?),
            Some((low, high)) => {
                let start = match low {
                    "" => 0.0,
                    "~" => f64::NEG_INFINITY,
                    other => parse_bound(other)?,
                };
                // `~` is only meaningful as the lower bound; on the right
                // it falls through to the number parser and is rejected.
                let end = match high {
                    "" => f64::INFINITY,
                    other => parse_bound(other)?,
                };
                (start, end)
            }
        };

        if start.is_finite() && end.is_finite() && start > end {
            return Err(NagfmtError::FlippedRange { start, end });
        }
        Ok(Self { start, end, invert })
    }
}

fn parse_bound(text: &str) -> Result<f64> {
    text.parse()
        .map_err(|_| NagfmtError::InvalidRangeBound(text.to_string()))
}

/// Formats a bound, omitting it entirely when NaN or infinite.
pub(crate) fn fmt_finite(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        String::new()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bare-number convention used by upstream tooling: 0:N prints as N.
        if !self.invert && self.start == 0.0 {
            return f.write_str(&fmt_finite(self.end));
        }
        if self.invert {
            f.write_str("@")?;
        }
        if self.start == f64::NEG_INFINITY {
            f.write_str("~")?;
        } else {
            f.write_str(&fmt_finite(self.start))?;
        }
        write!(f, ":{}", fmt_finite(self.end))
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
