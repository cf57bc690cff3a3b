use std::fmt;

/// Plugin return status, per the Nagios plugin development guidelines.
///
/// The numeric value doubles as the process exit code reported to the
/// monitoring poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Status {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative severity of check results by status value.
///
/// A plugin ultimately reports a single status. When several results are
/// batched into one check, the result whose status has the highest priority
/// under the active policy determines the final status. Equal priorities
/// never promote (first write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    // Priorities indexed by status ordinal: [OK, WARNING, CRITICAL, UNKNOWN].
    priorities: [u8; 4],
}

impl StatusPolicy {
    /// Custom total mapping from each status to a priority.
    #[must_use]
    pub const fn new(ok: u8, warning: u8, critical: u8, unknown: u8) -> Self {
        Self {
            priorities: [ok, warning, critical, unknown],
        }
    }

    /// The ordering from the plugin guidelines: CRITICAL takes precedence
    /// over UNKNOWN, UNKNOWN over WARNING, WARNING over OK.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(0, 1, 3, 2)
    }

    /// OK < UNKNOWN < WARNING < CRITICAL: an UNKNOWN result loses to any
    /// real problem report.
    #[must_use]
    pub const fn ouwc() -> Self {
        Self::new(0, 2, 3, 1)
    }

    #[must_use]
    pub const fn priority(&self, status: Status) -> u8 {
        self.priorities[status.index()]
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
