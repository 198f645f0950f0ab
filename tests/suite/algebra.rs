//! Properties of the alignment lanes as the catalog uses them.

use bounded_core::{Input, Lane, Readings};
use bounded_engine::catalog;
use proptest::prelude::*;

fn with_alignments(inputs: &[Input], alignments: &[f64]) -> Vec<Input> {
    inputs
        .iter()
        .zip(alignments)
        .map(|(input, &a)| {
            Input::new(
                input.symbol,
                input.reading.magnitude,
                a,
                input.unit,
                input.note,
            )
        })
        .collect()
}

#[test]
fn every_catalog_lane_is_inside_the_interval() {
    for scenario in catalog::all() {
        let a = (scenario.lane)()
            .eval(&scenario.readings().unwrap())
            .unwrap()
            .value();
        assert!(a > -1.0 && a < 1.0, "{}: {a}", scenario.id);
    }
}

#[test]
fn all_calm_inputs_give_a_calm_lane() {
    for scenario in catalog::all() {
        let zeros = vec![0.0; scenario.inputs.len()];
        let inputs = with_alignments(scenario.inputs, &zeros);
        let a = (scenario.lane)()
            .eval(&Readings::new(&inputs).unwrap())
            .unwrap();
        assert!(a.value().abs() < 1e-12, "{}", scenario.id);
    }
}

#[test]
fn pool_of_identical_samples_is_that_sample() {
    let inputs = [
        Input::new("x1", 3.0, 0.37, "", ""),
        Input::new("x2", 9.0, 0.37, "", ""),
        Input::new("x3", 0.5, 0.37, "", ""),
    ];
    let a = Lane::samples(&["x1", "x2", "x3"])
        .eval(&Readings::new(&inputs).unwrap())
        .unwrap();
    assert!((a.value() - 0.37).abs() < 1e-12);
}

proptest! {
    /// Every operator is odd, so flipping every input's sign flips the lane.
    #[test]
    fn flipping_every_alignment_flips_the_lane(
        index in 0usize..10,
        raw in prop::collection::vec(-0.95f64..0.95, 7),
    ) {
        let scenario = &catalog::all()[index];
        let n = scenario.inputs.len();
        let positive = with_alignments(scenario.inputs, &raw[..n]);
        let flipped: Vec<f64> = raw[..n].iter().map(|a| -a).collect();
        let negative = with_alignments(scenario.inputs, &flipped);

        let lane = (scenario.lane)();
        let up = lane.eval(&Readings::new(&positive).unwrap()).unwrap().value();
        let down = lane.eval(&Readings::new(&negative).unwrap()).unwrap().value();
        prop_assert!((up + down).abs() < 1e-9, "{}: {up} vs {down}", scenario.id);
    }

    /// Scaling every sample's magnitude by the same factor leaves a pool unchanged.
    #[test]
    fn sample_pool_ignores_common_scale(
        a1 in -0.95f64..0.95,
        a2 in -0.95f64..0.95,
        m1 in 0.1f64..100.0,
        m2 in 0.1f64..100.0,
        scale in 0.01f64..100.0,
    ) {
        let base = [Input::new("s1", m1, a1, "", ""), Input::new("s2", m2, a2, "", "")];
        let scaled = [
            Input::new("s1", m1 * scale, a1, "", ""),
            Input::new("s2", m2 * scale, a2, "", ""),
        ];
        let lane = Lane::samples(&["s1", "s2"]);
        let x = lane.eval(&Readings::new(&base).unwrap()).unwrap().value();
        let y = lane.eval(&Readings::new(&scaled).unwrap()).unwrap().value();
        prop_assert!((x - y).abs() < 1e-9);
    }
}
