use super::*;

fn value(v: f64) -> PerfDatumValue {
    PerfDatumValue::new(v).expect("finite value")
}

fn simple_range(start: f64, end: f64) -> Range {
    Range::simple(start, end).expect("valid range")
}

#[test]
fn check_renders_worst_result_with_perfdata() {
    let mut check = Check::new();
    check
        .add_perf_datum(
            "space_monkeys",
            Uom::Counter,
            value(200_000.0),
            Some(simple_range(0.0, 10_000.0)),
            Some(simple_range(0.0, 100_000.0)),
            Some(0.0),
            Some(4_294_967_296.0),
        )
        .unwrap();
    check.add_result(
        Status::Critical,
        "200000 terrifying space monkeys in the engineroom",
    );
    // A WARNING added afterwards can't override a CRITICAL.
    check.add_result(
        Status::Warning,
        "200000 slightly annoying space monkeys in the engineroom",
    );

    assert_eq!(
        check.to_string(),
        "CRITICAL: 200000 terrifying space monkeys in the engineroom | \
         'space_monkeys'=200000c;10000;100000;0;4294967296"
    );
}

#[test]
fn default_policy_ranks_unknown_above_warning() {
    let mut check = Check::new();
    check.add_result(Status::Warning, "Isolated-frame flux emission outside threshold");
    check.add_result(Status::Unknown, "No response from betaform amplifier");
    assert_eq!(check.status(), Status::Unknown);
}

#[test]
fn ouwc_policy_ranks_unknown_below_warning() {
    let mut check = Check::with_policy(StatusPolicy::ouwc());
    check.add_result(Status::Warning, "Isolated-frame flux emission outside threshold");
    check.add_result(Status::Unknown, "No response from betaform amplifier");
    assert_eq!(check.status(), Status::Warning);
}

#[test]
fn final_status_is_independent_of_insertion_order() {
    let results = [
        (Status::Warning, "w"),
        (Status::Critical, "c"),
        (Status::Ok, "o"),
        (Status::Unknown, "u"),
    ];
    let permutations: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 0, 3, 2], [2, 3, 0, 1]];
    for order in permutations {
        let mut check = Check::new();
        for index in order {
            let (status, message) = results[index];
            check.add_result(status, message);
        }
        assert_eq!(check.status(), Status::Critical, "order {order:?}");
    }
}

#[test]
fn winning_messages_keep_relative_order() {
    let mut check = Check::new();
    check.add_result(Status::Critical, "first failure");
    check.add_result(Status::Ok, "all good here");
    check.add_result(Status::Critical, "second failure");

    assert_eq!(
        check.to_string(),
        "CRITICAL: first failure, second failure"
    );
}

#[test]
fn perfdata_attached_to_first_winning_message_only() {
    let mut check = Check::new();
    check.add_result(Status::Critical, "first failure");
    check.add_result(Status::Critical, "second failure");
    check
        .add_perf_datum("errors", Uom::Counter, value(2.0), None, None, None, None)
        .unwrap();

    assert_eq!(
        check.to_string(),
        "CRITICAL: first failure | 'errors'=2c;;;;, second failure"
    );
}

#[test]
fn invalid_perf_datum_leaves_check_unmodified() {
    let mut check = Check::new();
    check.add_result(Status::Ok, "fine");
    let before = check.to_string();

    let result = check.add_perf_datum("bad label", Uom::None, value(1.0), None, None, None, None);
    assert!(result.is_err());
    assert_eq!(check.to_string(), before);
}

#[test]
fn minimal_verbosity_uses_canned_message() {
    let mut check = Check::new();
    check.set_verbosity(Verbosity::Minimal);
    check.add_result(Status::Ok, "this text is not shown");
    assert_eq!(check.to_string(), "OK: Everything is fine");
}

#[test]
fn minimal_verbosity_appends_perfdata_to_canned_message() {
    let mut check = Check::new();
    check.set_verbosity(Verbosity::Minimal);
    check.add_result(Status::Warning, "ignored");
    check
        .add_perf_datum("load", Uom::None, value(7.0), None, None, None, None)
        .unwrap();
    assert_eq!(
        check.to_string(),
        "WARNING: Reached warning threshold | 'load'=7;;;;"
    );
}

#[test]
fn minimal_message_can_be_overridden() {
    let mut check = Check::new();
    check.set_verbosity(Verbosity::Minimal);
    check.set_minimal_message(Status::Ok, "all systems nominal");
    check.add_result(Status::Ok, "ignored");
    assert_eq!(check.to_string(), "OK: all systems nominal");
}

#[test]
fn multi_line_verbosity_joins_messages_with_newline() {
    let mut check = Check::new();
    check.set_verbosity(Verbosity::MultiLine);
    check.add_result(Status::Warning, "first warning");
    check.add_result(Status::Warning, "second warning");
    assert_eq!(check.to_string(), "WARNING: first warning\nsecond warning");
}

#[test]
fn long_output_is_appended_after_newline() {
    let mut check = Check::new();
    check.add_result(Status::Ok, "everything looks shiny, cap'n");
    check.add_long_output("Lorem Ipsum");
    assert_eq!(
        check.to_string(),
        "OK: everything looks shiny, cap'n\nLorem Ipsum, "
    );
}

#[test]
fn verbosity_from_level_maps_guideline_levels() {
    assert_eq!(Verbosity::from_level(0).unwrap(), Verbosity::Minimal);
    assert_eq!(Verbosity::from_level(1).unwrap(), Verbosity::SingleLine);
    assert_eq!(Verbosity::from_level(2).unwrap(), Verbosity::MultiLine);
    assert_eq!(Verbosity::from_level(3).unwrap(), Verbosity::Debug);
}

#[test]
fn verbosity_from_level_rejects_out_of_range() {
    assert!(matches!(
        Verbosity::from_level(4),
        Err(NagfmtError::IllegalVerbosity(4))
    ));
}

#[test]
fn message_separator_follows_verbosity() {
    assert_eq!(Verbosity::Minimal.message_separator(), ", ");
    assert_eq!(Verbosity::SingleLine.message_separator(), ", ");
    assert_eq!(Verbosity::MultiLine.message_separator(), "\n");
    assert_eq!(Verbosity::Debug.message_separator(), "\n");
}

#[test]
fn results_accessor_exposes_insertion_order() {
    let mut check = Check::new();
    check.add_result(Status::Ok, "one");
    check.add_result(Status::Warning, "two");
    let results = check.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].message(), "one");
    assert_eq!(results[0].status(), Status::Ok);
    assert_eq!(results[1].message(), "two");
}

#[test]
fn equal_priority_does_not_replace_first_status() {
    // OK and WARNING mapped to the same priority: first write wins.
    let policy = StatusPolicy::new(1, 1, 2, 3);
    let mut check = Check::with_policy(policy);
    check.add_result(Status::Ok, "first");
    check.add_result(Status::Warning, "same priority");
    assert_eq!(check.status(), Status::Ok);
}
