//! The ten worked examples, checked against their published figures.

use bounded_engine::{Evaluation, catalog};

fn evaluate(name: &str) -> Evaluation {
    catalog::find(name)
        .unwrap_or_else(|| panic!("{name} is in the catalog"))
        .evaluate()
        .unwrap()
}

fn shown(evaluation: &Evaluation, label: &str) -> String {
    let quantity = evaluation
        .classical
        .get(label)
        .unwrap_or_else(|| panic!("{label} is reported"));
    format!("{:.*}", quantity.precision, quantity.value)
}

#[test]
fn every_scenario_matches_its_reference() {
    for scenario in catalog::all() {
        let evaluation = scenario.evaluate().unwrap();
        if let Err(mismatch) = evaluation.check_reference() {
            panic!("{mismatch}");
        }
    }
}

#[test]
fn headline_figures() {
    let cases = [
        ("L01", "V", "11.8950", 0.5173),
        ("L02", "F", "20.0000", 0.4253),
        ("L03", "F", "10.0000", 0.4197),
        ("L04", "P", "249420.00", 0.2775),
        ("L05", "E_loss", "51.39", 0.6810),
        ("L06", "Delta_p", "0.250", 0.6744),
        ("L07", "P2", "196625", 0.1039),
        ("L08", "n2", "1.540", 0.1577),
        ("L09", "v2", "3.167", 0.2780),
        ("L10", "|eps|", "40.00", 0.7005),
    ];
    for (id, label, magnitude, alignment) in cases {
        let evaluation = evaluate(id);
        assert_eq!(evaluation.classical.headline.label, label, "{id}");
        assert_eq!(shown(&evaluation, label), magnitude, "{id}");
        assert!(
            (evaluation.alignment.value() - alignment).abs() < 5e-5,
            "{id}: {}",
            evaluation.alignment
        );
    }
}

#[test]
fn intermediate_figures() {
    let cases = [
        ("L01", "I_avg", "1.9500"),
        ("L04", "T_avg", "300.00"),
        ("L05", "E_in", "61.20"),
        ("L05", "E_out", "9.81"),
        ("L06", "p_before", "2.100"),
        ("L06", "p_after", "1.850"),
        ("L07", "P1", "200000"),
        ("L08", "theta1_avg", "30.25"),
        ("L08", "theta2_avg", "19.10"),
        ("L09", "v1_avg", "1.900"),
        ("L10", "dPhi/dt", "-0.200"),
    ];
    for (id, label, expected) in cases {
        assert_eq!(shown(&evaluate(id), label), expected, "{id} {label}");
    }
}

#[test]
fn lane_shapes() {
    let cases = [
        ("L01", "product(pool(I1, I2), R)"),
        ("L04", "ratio(chain(n, R, pool(T1, T2)), V)"),
        ("L05", "chain(chain(V, pool(I1, I2), t), chain(m, g, h))"),
        ("L09", "chain(ratio(A1, A2), pool(v1_1, v1_2))"),
        ("L10", "chain(N, ratio(chain(Phi1, Phi2), dt))"),
    ];
    for (id, shape) in cases {
        assert_eq!(evaluate(id).lane.to_string(), shape, "{id}");
    }
}

#[test]
fn momentum_lane_weights_by_momentum() {
    let lane = evaluate("L06").lane.to_string();
    assert_eq!(
        lane,
        "chain(pool(chain(m1, u1) @ |m1*u1|, chain(m2, u2) @ |m2*u2|), \
         pool(chain(m1, v1) @ |m1*v1|, chain(m2, v2) @ |m2*v2|))"
    );
}

#[test]
fn names_resolve_in_every_accepted_form() {
    for scenario in catalog::all() {
        let full = scenario.name();
        for requested in [
            scenario.id.to_string(),
            scenario.id.to_lowercase(),
            scenario.slug.to_string(),
            full.clone(),
            full.to_uppercase(),
            format!("{full}.py"),
        ] {
            let found = catalog::find(&requested).map(|s| s.id);
            assert_eq!(found, Some(scenario.id), "{requested}");
        }
    }
}

#[test]
fn every_input_feeds_the_lane() {
    for scenario in catalog::all() {
        let used = (scenario.lane)().symbols();
        for input in scenario.inputs {
            assert!(
                used.contains(&input.symbol),
                "{}: {} unused",
                scenario.id,
                input.symbol
            );
        }
    }
}
