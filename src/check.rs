use std::fmt;

use crate::error::{NagfmtError, Result};
use crate::perfdata::{PerfDatum, PerfDatumValue, Uom, render_perfdata};
use crate::range::Range;
use crate::status::{Status, StatusPolicy};

/// Output verbosity, per the plugin development guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// One fixed canned message keyed by final status.
    Minimal = 0,
    #[default]
    SingleLine = 1,
    MultiLine = 2,
    Debug = 3,
}

impl Verbosity {
    /// Maps a numeric verbosity level (0–3) as passed on a plugin command
    /// line. Anything else is a configuration error.
    pub const fn from_level(level: u8) -> Result<Self> {
        match level {
            0 => Ok(Self::Minimal),
            1 => Ok(Self::SingleLine),
            2 => Ok(Self::MultiLine),
            3 => Ok(Self::Debug),
            other => Err(NagfmtError::IllegalVerbosity(other)),
        }
    }

    #[must_use]
    pub const fn message_separator(self) -> &'static str {
        match self {
            Self::Minimal | Self::SingleLine => ", ",
            Self::MultiLine | Self::Debug => "\n",
        }
    }
}

/// One recorded sub-check result. Immutable once added to a [`Check`].
#[derive(Debug, Clone)]
pub struct CheckResult {
    status: Status,
    message: String,
}

impl CheckResult {
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Aggregates sub-check results and perf-data into one plugin status line.
///
/// Results and perf-data are append-only and keep insertion order. The
/// final status is derived as results arrive: a new result promotes the
/// check only when its status has strictly greater priority under the
/// check's [`StatusPolicy`], so a WARNING added after a CRITICAL can never
/// downgrade it.
#[derive(Debug, Clone)]
pub struct Check {
    results: Vec<CheckResult>,
    perfdata: Vec<PerfDatum>,
    status: Status,
    policy: StatusPolicy,
    long_output: String,
    verbosity: Verbosity,
    minimal_messages: [String; 4],
}

impl Check {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(StatusPolicy::default())
    }

    /// An empty check ranking result severity by `policy`. The policy is
    /// fixed for the check's lifetime.
    #[must_use]
    pub fn with_policy(policy: StatusPolicy) -> Self {
        Self {
            results: Vec::new(),
            perfdata: Vec::new(),
            status: Status::Ok,
            policy,
            long_output: String::new(),
            verbosity: Verbosity::default(),
            minimal_messages: [
                "Everything is fine".to_string(),
                "Reached warning threshold".to_string(),
                "Reached critical threshold".to_string(),
                "Check error".to_string(),
            ],
        }
    }

    /// Records a sub-check result. Does not terminate the check. If the
    /// status outranks every one reported so far, it becomes the check's
    /// final status.
    pub fn add_result(&mut self, status: Status, message: impl Into<String>) {
        self.results.push(CheckResult {
            status,
            message: message.into(),
        });
        if self.policy.priority(status) > self.policy.priority(self.status) {
            self.status = status;
        }
    }

    /// Validates and records a metric for the perfdata block.
    ///
    /// On a validation error the check is left unmodified.
    #[allow(clippy::too_many_arguments)]
    pub fn add_perf_datum(
        &mut self,
        label: &str,
        uom: Uom,
        value: PerfDatumValue,
        warn: Option<Range>,
        crit: Option<Range>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<()> {
        let datum = PerfDatum::new(label, uom, value, warn, crit, min, max)?;
        self.perfdata.push(datum);
        Ok(())
    }

    /// Appends a block of long plugin output, terminated with the current
    /// message separator.
    pub fn add_long_output(&mut self, text: &str) {
        self.long_output.push_str(text);
        self.long_output.push_str(self.verbosity.message_separator());
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Overrides the canned message used for `status` under
    /// [`Verbosity::Minimal`].
    pub fn set_minimal_message(&mut self, status: Status, message: impl Into<String>) {
        self.minimal_messages[status.index()] = message.into();
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// The lead line text following the status prefix.
    ///
    /// Outside minimal verbosity this joins the messages of every result
    /// carrying the final status, in insertion order, with the perfdata
    /// block appended to the first of them only.
    fn lead_text(&self, perfdata_block: &str) -> String {
        if self.verbosity == Verbosity::Minimal {
            return format!(
                "{}{perfdata_block}",
                self.minimal_messages[self.status.index()]
            );
        }
        let mut messages = Vec::new();
        for result in &self.results {
            if result.status == self.status {
                if messages.is_empty() {
                    messages.push(format!("{}{perfdata_block}", result.message));
                } else {
                    messages.push(result.message.clone());
                }
            }
        }
        messages.join(self.verbosity.message_separator())
    }
}

impl Default for Check {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Check {
    /// The full plugin output, suitable for parsing by the poller.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = render_perfdata(&self.perfdata);
        write!(f, "{}: {}", self.status, self.lead_text(&block))?;
        if !self.long_output.is_empty() {
            write!(f, "\n{}", self.long_output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
