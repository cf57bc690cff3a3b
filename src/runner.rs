use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::check::Check;
use crate::status::Status;

/// Prints a single status line and terminates, for trivial checks without
/// multiple results or perfdata.
pub fn exit(status: Status, message: &str) -> ! {
    println!("{status}: {message}");
    std::process::exit(status.exit_code())
}

impl Check {
    /// Ends the check: prints its output to stdout and exits the process
    /// with the final status's exit code. A check that never recorded a
    /// result reports UNKNOWN.
    pub fn finish(mut self) -> ! {
        if self.results().is_empty() {
            self.add_result(Status::Unknown, "no check result specified");
        }
        println!("{self}");
        std::process::exit(self.status().exit_code())
    }

    /// Records one final result, then finishes immediately.
    pub fn exit_with(mut self, status: Status, message: &str) -> ! {
        self.add_result(status, message);
        self.finish()
    }
}

/// Runs a check body inside a fault boundary.
///
/// A panic raised by `body` does not unwind past the plugin: it is recorded
/// as a CRITICAL result so the poller sees a well-formed status line
/// instead of a crash, then the check finishes as usual.
pub fn run<F>(body: F) -> !
where
    F: FnOnce(&mut Check),
{
    let mut check = Check::new();
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| body(&mut check))) {
        let message = format!("check panicked: {}", panic_message(payload.as_ref()));
        check.add_result(Status::Critical, message);
    }
    check.finish()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
