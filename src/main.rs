use clap::Parser;

use nagfmt::cli::Cli;
use nagfmt::{Check, PerfDatumValue, Range, Status, Verbosity};

fn main() {
    let cli = Cli::parse();

    nagfmt::run(move |check| {
        if let Err(err) = evaluate(&cli, check) {
            check.add_result(Status::Unknown, format!("configuration error: {err}"));
        }
    })
}

fn evaluate(cli: &Cli, check: &mut Check) -> nagfmt::Result<()> {
    check.set_verbosity(Verbosity::from_level(cli.verbosity)?);

    let status = breach_status(cli.value, cli.warn, cli.crit);
    check.add_result(status, format!("{} is {}{}", cli.label, cli.value, cli.uom));

    check.add_perf_datum(
        &cli.label,
        cli.uom,
        PerfDatumValue::new(cli.value)?,
        cli.warn,
        cli.crit,
        cli.min,
        cli.max,
    )?;

    for line in &cli.long_output {
        check.add_long_output(line);
    }
    Ok(())
}

/// Critical breaches take precedence over warning breaches.
fn breach_status(value: f64, warn: Option<Range>, crit: Option<Range>) -> Status {
    if crit.is_some_and(|range| range.breached(value)) {
        Status::Critical
    } else if warn.is_some_and(|range| range.breached(value)) {
        Status::Warning
    } else {
        Status::Ok
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
