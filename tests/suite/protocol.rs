//! The `SSM:` result line and band classification.

use bounded_engine::{Outcome, catalog};
use bounded_types::{Band, BandPolicy, ResultLine, ResultLineError};

#[test]
fn rendered_scenarios_parse_back() {
    for scenario in catalog::all() {
        let evaluation = scenario.evaluate().unwrap();
        let Outcome::Parsed(line) = Outcome::from_stdout(&evaluation.render()) else {
            panic!("{}: no result line", scenario.id);
        };
        assert!(
            (line.alignment - evaluation.alignment.value()).abs() < 5e-5,
            "{}",
            scenario.id
        );
    }
}

#[test]
fn first_result_line_wins() {
    let stdout = "SSM: m=1, a=+0.1\nSSM: m=2, a=+0.2\n";
    assert_eq!(
        Outcome::from_stdout(stdout),
        Outcome::Parsed(ResultLine::new(1.0, 0.1))
    );
}

#[test]
fn parse_failures_are_distinct() {
    assert_eq!(
        "SSM: a=+0.1".parse::<ResultLine>().unwrap_err(),
        ResultLineError::MissingField("m")
    );
    assert_eq!(
        "SSM: m=1, a=high".parse::<ResultLine>().unwrap_err(),
        ResultLineError::InvalidNumber {
            field: "a",
            value: "high".to_string()
        }
    );
}

#[test]
fn indented_result_line_is_not_a_result_line() {
    assert_eq!(
        Outcome::from_stdout("  SSM: m=1, a=+0.1\n"),
        Outcome::NoResultLine
    );
}

#[test]
fn band_edges() {
    let policy = BandPolicy::default();
    assert_eq!(policy.classify(0.0), Band::Calm);
    assert_eq!(policy.classify(0.199_999), Band::Calm);
    assert_eq!(policy.classify(0.20), Band::Borderline);
    assert_eq!(policy.classify(-0.20), Band::Borderline);
    assert_eq!(policy.classify(0.499_999), Band::Borderline);
    assert_eq!(policy.classify(0.50), Band::Stressed);
    assert_eq!(policy.classify(-0.99), Band::Stressed);
}

#[test]
fn band_labels() {
    assert_eq!(Band::Calm.label(), "A+ (calm)");
    assert_eq!(Band::Borderline.label(), "A0 (borderline)");
    assert_eq!(Band::Stressed.label(), "A- (stressed)");
}
