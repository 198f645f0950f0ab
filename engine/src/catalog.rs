//! The ten worked examples.
//!
//! Each entry is a fixed input table, a classical formula over magnitudes, and
//! an alignment lane whose shape follows the law's algebra: pools for repeated
//! samples, chains for products and combined postures, ratios for quotients.

use bounded_core::{Input, Lane, LaneError, Readings, Weight};

use crate::scenario::{Classical, Quantity, Reference, Scenario, ScenarioError, nonzero};

/// All scenarios, in run order.
#[must_use]
pub fn all() -> &'static [Scenario] {
    &SCENARIOS
}

/// Resolve a requested name to a scenario. See [`Scenario::matches`].
#[must_use]
pub fn find(requested: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.matches(requested))
}

/// Full names of every scenario, in run order.
#[must_use]
pub fn default_names() -> Vec<String> {
    SCENARIOS.iter().map(Scenario::name).collect()
}

const REFERENCE_TOLERANCE: f64 = 1e-4;

static SCENARIOS: [Scenario; 10] = [
    Scenario {
        id: "L01",
        slug: "ohms_law",
        title: "Ohm's Law",
        formula: "V = I * R",
        inputs: &OHM,
        classical: ohm_classical,
        lane: ohm_lane,
        lane_name: "voltage lane",
        reference: Reference {
            magnitude: 11.895,
            alignment: 0.5173,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L02",
        slug: "newton_fma",
        title: "Newton's Second Law",
        formula: "F = m * a",
        inputs: &NEWTON,
        classical: newton_classical,
        lane: newton_lane,
        lane_name: "force lane",
        reference: Reference {
            magnitude: 20.0,
            alignment: 0.4253,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L03",
        slug: "hookes_law",
        title: "Hooke's Law",
        formula: "F = k * x",
        inputs: &HOOKE,
        classical: hooke_classical,
        lane: hooke_lane,
        lane_name: "force lane",
        reference: Reference {
            magnitude: 10.0,
            alignment: 0.4197,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L04",
        slug: "ideal_gas_law",
        title: "Ideal Gas Law",
        formula: "P = (n * R * T) / V",
        inputs: &IDEAL_GAS,
        classical: ideal_gas_classical,
        lane: ideal_gas_lane,
        lane_name: "pressure lane",
        reference: Reference {
            magnitude: 249_420.0,
            alignment: 0.2775,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L05",
        slug: "conservation_of_energy",
        title: "Conservation of Energy",
        formula: "E_loss = E_in - E_out = V * I * t - m * g * h",
        inputs: &ENERGY,
        classical: energy_classical,
        lane: energy_lane,
        lane_name: "loss lane",
        reference: Reference {
            magnitude: 51.39,
            alignment: 0.6810,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L06",
        slug: "conservation_of_momentum",
        title: "Conservation of Momentum",
        formula: "Delta_p = (m1*u1 + m2*u2) - (m1*v1 + m2*v2)",
        inputs: &MOMENTUM,
        classical: momentum_classical,
        lane: momentum_lane,
        lane_name: "imbalance lane",
        reference: Reference {
            magnitude: 0.25,
            alignment: 0.6744,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L07",
        slug: "bernoulli",
        title: "Bernoulli's Equation",
        formula: "P2 = P1 + 0.5 * rho * (v1^2 - v2^2)",
        inputs: &BERNOULLI,
        classical: bernoulli_classical,
        lane: bernoulli_lane,
        lane_name: "downstream pressure lane",
        reference: Reference {
            magnitude: 196_625.0,
            alignment: 0.1039,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L08",
        slug: "snells_law",
        title: "Snell's Law",
        formula: "n2 = n1 * sin(theta1) / sin(theta2)",
        inputs: &SNELL,
        classical: snell_classical,
        lane: snell_lane,
        lane_name: "refractive index lane",
        reference: Reference {
            magnitude: 1.5396,
            alignment: 0.1577,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L09",
        slug: "continuity_equation",
        title: "Continuity Equation",
        formula: "v2 = (A1 / A2) * v1",
        inputs: &CONTINUITY,
        classical: continuity_classical,
        lane: continuity_lane,
        lane_name: "downstream velocity lane",
        reference: Reference {
            magnitude: 3.166_667,
            alignment: 0.2780,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
    Scenario {
        id: "L10",
        slug: "faraday_induction",
        title: "Faraday's Law of Induction",
        formula: "|eps| = N * |(Phi2 - Phi1) / dt|",
        inputs: &FARADAY,
        classical: faraday_classical,
        lane: faraday_lane,
        lane_name: "induced EMF lane",
        reference: Reference {
            magnitude: 40.0,
            alignment: 0.7005,
            tolerance: REFERENCE_TOLERANCE,
        },
    },
];

fn mean2(readings: &Readings<'_>, a: &str, b: &str) -> Result<f64, ScenarioError> {
    Ok(0.5 * (readings.magnitude(a)? + readings.magnitude(b)?))
}

// ============================================================================
// L01 Ohm's law
// ============================================================================

const OHM: [Input; 3] = [
    Input::new("I1", 1.92, 0.72, "A", "noisy instant"),
    Input::new("I2", 1.98, 0.05, "A", "calmer instant"),
    Input::new("R", 6.10, 0.10, "ohm", "mild drift"),
];

fn ohm_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let i_avg = mean2(r, "I1", "I2")?;
    let v = i_avg * r.magnitude("R")?;
    Ok(Classical::new(
        vec![Quantity::new("I_avg", i_avg, "A", 4)],
        Quantity::new("V", v, "V", 4),
    ))
}

fn ohm_lane() -> Lane {
    Lane::product(Lane::samples(&["I1", "I2"]), Lane::input("R"))
}

// ============================================================================
// L02 Newton's second law
// ============================================================================

const NEWTON: [Input; 3] = [
    Input::new("m", 20.0, 0.05, "kg", "cart mass, mostly calm"),
    Input::new("a1", 0.90, 0.65, "m/s^2", "jerkier instant"),
    Input::new("a2", 1.10, 0.10, "m/s^2", "calmer instant"),
];

fn newton_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let a_avg = mean2(r, "a1", "a2")?;
    let f = r.magnitude("m")? * a_avg;
    Ok(Classical::new(
        vec![Quantity::new("a_avg", a_avg, "m/s^2", 4)],
        Quantity::new("F", f, "N", 4),
    ))
}

fn newton_lane() -> Lane {
    Lane::product(Lane::input("m"), Lane::samples(&["a1", "a2"]))
}

// ============================================================================
// L03 Hooke's law
// ============================================================================

const HOOKE: [Input; 3] = [
    Input::new("k", 200.0, 0.08, "N/m", "spring constant, mildly uncertain"),
    Input::new("x1", 0.045, 0.60, "m", "jerkier reading"),
    Input::new("x2", 0.055, 0.10, "m", "calmer reading"),
];

fn hooke_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let x_avg = mean2(r, "x1", "x2")?;
    let f = r.magnitude("k")? * x_avg;
    Ok(Classical::new(
        vec![Quantity::new("x_avg", x_avg, "m", 4)],
        Quantity::new("F", f, "N", 4),
    ))
}

fn hooke_lane() -> Lane {
    Lane::product(Lane::input("k"), Lane::samples(&["x1", "x2"]))
}

// ============================================================================
// L04 Ideal gas law
// ============================================================================

const IDEAL_GAS: [Input; 5] = [
    Input::new("n", 1.00, 0.02, "mol", "almost exactly one mole"),
    Input::new("R", 8.314, 0.00, "J/(mol*K)", "treated as exact"),
    Input::new("V", 0.0100, 0.10, "m^3", "piston not perfectly fixed"),
    Input::new("T1", 295.0, 0.55, "K", "early, more drift"),
    Input::new("T2", 305.0, 0.12, "K", "later, calmer"),
];

fn ideal_gas_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let t_avg = mean2(r, "T1", "T2")?;
    let volume = nonzero(r.magnitude("V")?, "V")?;
    let p = (r.magnitude("n")? * r.magnitude("R")? * t_avg) / volume;
    Ok(Classical::new(
        vec![Quantity::new("T_avg", t_avg, "K", 2)],
        Quantity::new("P", p, "Pa", 2),
    ))
}

fn ideal_gas_lane() -> Lane {
    Lane::ratio(
        Lane::chain(vec![
            Lane::input("n"),
            Lane::input("R"),
            Lane::samples(&["T1", "T2"]),
        ]),
        Lane::input("V"),
    )
}

// ============================================================================
// L05 Conservation of energy
// ============================================================================

const ENERGY: [Input; 7] = [
    Input::new("V", 12.0, 0.10, "V", "supply voltage"),
    Input::new("I1", 1.80, 0.70, "A", "noisy start"),
    Input::new("I2", 1.60, 0.15, "A", "calmer"),
    Input::new("t", 3.0, 0.05, "s", ""),
    Input::new("m", 2.0, 0.05, "kg", "load mass"),
    Input::new("h", 0.50, 0.10, "m", "lift height"),
    Input::new("g", 9.81, 0.0, "m/s^2", "treated as exact"),
];

fn energy_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let i_avg = mean2(r, "I1", "I2")?;
    let e_in = r.magnitude("V")? * i_avg * r.magnitude("t")?;
    let e_out = r.magnitude("m")? * r.magnitude("g")? * r.magnitude("h")?;
    Ok(Classical::new(
        vec![
            Quantity::new("E_in", e_in, "J", 2),
            Quantity::new("E_out", e_out, "J", 2),
        ],
        Quantity::new("E_loss", e_in - e_out, "J", 2),
    ))
}

fn energy_lane() -> Lane {
    let e_in = Lane::chain(vec![
        Lane::input("V"),
        Lane::samples(&["I1", "I2"]),
        Lane::input("t"),
    ]);
    let e_out = Lane::inputs(&["m", "g", "h"]);
    Lane::chain(vec![e_in, e_out])
}

// ============================================================================
// L06 Conservation of momentum
// ============================================================================

const MOMENTUM: [Input; 6] = [
    Input::new("m1", 1.50, 0.05, "kg", "cart 1"),
    Input::new("m2", 1.00, 0.05, "kg", "cart 2"),
    Input::new("u1", 1.40, 0.40, "m/s", "cart 1 before"),
    Input::new("u2", 0.00, 0.05, "m/s", "cart 2 before"),
    Input::new("v1", 0.70, 0.35, "m/s", "cart 1 after"),
    Input::new("v2", 0.80, 0.20, "m/s", "cart 2 after"),
];

fn momentum_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let (m1, m2) = (r.magnitude("m1")?, r.magnitude("m2")?);
    let p_before = m1 * r.magnitude("u1")? + m2 * r.magnitude("u2")?;
    let p_after = m1 * r.magnitude("v1")? + m2 * r.magnitude("v2")?;
    Ok(Classical::new(
        vec![
            Quantity::new("p_before", p_before, "kg m/s", 3),
            Quantity::new("p_after", p_after, "kg m/s", 3),
        ],
        Quantity::new("Delta_p", p_before - p_after, "kg m/s", 3),
    ))
}

/// Each side pools its per-cart momentum lanes, weighted by |m * velocity|.
fn momentum_side(carts: [(&'static str, &'static str); 2]) -> Lane {
    Lane::pool(
        carts
            .into_iter()
            .map(|(mass, velocity)| {
                (
                    Lane::inputs(&[mass, velocity]),
                    Weight::Product(vec![mass, velocity]),
                )
            })
            .collect(),
    )
}

fn momentum_lane() -> Lane {
    Lane::chain(vec![
        momentum_side([("m1", "u1"), ("m2", "u2")]),
        momentum_side([("m1", "v1"), ("m2", "v2")]),
    ])
}

// ============================================================================
// L07 Bernoulli (horizontal pipe)
// ============================================================================

const BERNOULLI: [Input; 4] = [
    Input::new("rho", 1000.0, 0.02, "kg/m^3", "density"),
    Input::new("P1", 200_000.0, 0.10, "Pa", "upstream pressure"),
    Input::new("v1", 1.5, 0.30, "m/s", "section 1"),
    Input::new("v2", 3.0, 0.20, "m/s", "section 2"),
];

fn dynamic_pressure(r: &Readings<'_>, velocity: &str) -> Result<f64, LaneError> {
    Ok(0.5 * r.magnitude("rho")? * r.magnitude(velocity)?.powi(2))
}

fn dynamic_pressure_1(r: &Readings<'_>) -> Result<f64, LaneError> {
    dynamic_pressure(r, "v1")
}

fn dynamic_pressure_2(r: &Readings<'_>) -> Result<f64, LaneError> {
    dynamic_pressure(r, "v2")
}

fn bernoulli_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let p1 = r.magnitude("P1")?;
    let p2 = p1 + dynamic_pressure_1(r)? - dynamic_pressure_2(r)?;
    Ok(Classical::new(
        vec![Quantity::new("P1", p1, "Pa", 0)],
        Quantity::new("P2", p2, "Pa", 0),
    ))
}

// P2 is composed of +P1, +dyn1 and -dyn2; posture weights use absolute magnitudes.
fn bernoulli_lane() -> Lane {
    Lane::pool(vec![
        (Lane::input("P1"), Weight::Magnitude("P1")),
        (
            Lane::inputs(&["rho", "v1"]),
            Weight::Derived {
                label: "0.5*rho*v1^2",
                weight: dynamic_pressure_1,
            },
        ),
        (
            Lane::inputs(&["rho", "v2"]),
            Weight::Derived {
                label: "0.5*rho*v2^2",
                weight: dynamic_pressure_2,
            },
        ),
    ])
}

// ============================================================================
// L08 Snell's law
// ============================================================================

const SNELL: [Input; 5] = [
    Input::new("n1", 1.000, 0.01, "", "air"),
    Input::new("theta1_1", 30.0, 0.25, "deg", "incident"),
    Input::new("theta1_2", 30.5, 0.35, "deg", "incident"),
    Input::new("theta2_1", 19.2, 0.20, "deg", "refracted"),
    Input::new("theta2_2", 19.0, 0.12, "deg", "refracted"),
];

fn snell_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let theta1 = mean2(r, "theta1_1", "theta1_2")?;
    let theta2 = mean2(r, "theta2_1", "theta2_2")?;
    let sin_theta2 = nonzero(theta2.to_radians().sin(), "sin(theta2)")?;
    let n2 = r.magnitude("n1")? * theta1.to_radians().sin() / sin_theta2;
    Ok(Classical::new(
        vec![
            Quantity::new("theta1_avg", theta1, "deg", 2),
            Quantity::new("theta2_avg", theta2, "deg", 2),
        ],
        Quantity::new("n2", n2, "", 3),
    ))
}

// sin(theta2) inherits its lane from theta2.
fn snell_lane() -> Lane {
    Lane::ratio(
        Lane::chain(vec![
            Lane::input("n1"),
            Lane::samples(&["theta1_1", "theta1_2"]),
        ]),
        Lane::samples(&["theta2_1", "theta2_2"]),
    )
}

// ============================================================================
// L09 Continuity equation
// ============================================================================

const CONTINUITY: [Input; 4] = [
    Input::new("A1", 0.0100, 0.10, "m^2", "inlet"),
    Input::new("A2", 0.0060, 0.15, "m^2", "throat"),
    Input::new("v1_1", 1.80, 0.45, "m/s", "early, more jitter"),
    Input::new("v1_2", 2.00, 0.20, "m/s", "later, calmer"),
];

fn continuity_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let v1_avg = mean2(r, "v1_1", "v1_2")?;
    let a2 = nonzero(r.magnitude("A2")?, "A2")?;
    let v2 = (r.magnitude("A1")? / a2) * v1_avg;
    Ok(Classical::new(
        vec![Quantity::new("v1_avg", v1_avg, "m/s", 3)],
        Quantity::new("v2", v2, "m/s", 3),
    ))
}

fn continuity_lane() -> Lane {
    Lane::chain(vec![
        Lane::ratio(Lane::input("A1"), Lane::input("A2")),
        Lane::samples(&["v1_1", "v1_2"]),
    ])
}

// ============================================================================
// L10 Faraday's law of induction
// ============================================================================

const FARADAY: [Input; 4] = [
    Input::new("N", 200.0, 0.02, "turns", ""),
    Input::new("Phi1", 0.012, 0.60, "Wb", "noisy first sample"),
    Input::new("Phi2", 0.004, 0.25, "Wb", "calmer second sample"),
    Input::new("dt", 0.040, 0.10, "s", "interval"),
];

fn faraday_classical(r: &Readings<'_>) -> Result<Classical, ScenarioError> {
    let dt = nonzero(r.magnitude("dt")?, "dt")?;
    let dphi_dt = (r.magnitude("Phi2")? - r.magnitude("Phi1")?) / dt;
    let emf = r.magnitude("N")? * dphi_dt.abs();
    Ok(Classical::new(
        vec![Quantity::new("dPhi/dt", dphi_dt, "Wb/s", 3)],
        Quantity::new("|eps|", emf, "V", 2),
    ))
}

fn faraday_lane() -> Lane {
    let flux_change = Lane::inputs(&["Phi1", "Phi2"]);
    Lane::chain(vec![
        Lane::input("N"),
        Lane::ratio(flux_change, Lane::input("dt")),
    ])
}
