//! The binaries, and the runner driving `law-scenario` children.

use std::process::Command;

use bounded_config::CONFIG_ENV;
use bounded_engine::{InProcess, Outcome, Runner, Subprocess, catalog};

use crate::common::{LAW_SCENARIO_BIN, RUN_ALL_LAWS_BIN, block_for, config_file, run_capture};

#[test]
fn law_scenario_prints_block_ending_in_result_line() {
    let output = Command::new(LAW_SCENARIO_BIN)
        .arg("scenario_L01_ohms_law")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Law L01: Ohm's Law\n"));
    assert_eq!(stdout.lines().last(), Some("SSM: m=11.8950, a=+0.5173"));
}

#[test]
fn law_scenario_rejects_unknown_and_missing_names() {
    let unknown = Command::new(LAW_SCENARIO_BIN).arg("L99").output().unwrap();
    assert_eq!(unknown.status.code(), Some(2));
    assert!(unknown.stdout.is_empty());
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("unknown scenario: L99"));

    let missing = Command::new(LAW_SCENARIO_BIN).output().unwrap();
    assert_eq!(missing.status.code(), Some(2));
}

#[test]
fn subprocess_agrees_with_in_process() {
    let subprocess = Subprocess::new(LAW_SCENARIO_BIN);
    for scenario in catalog::all() {
        let name = scenario.name();
        let child = Runner::new(subprocess.clone());
        let local = Runner::new(InProcess);
        let (_, child_records) = run_capture(&child, &[name.as_str()]);
        let (_, local_records) = run_capture(&local, &[name.as_str()]);

        let child = child_records[0].outcome.result().unwrap();
        let local = local_records[0].outcome.result().unwrap();
        assert!((child.alignment - local.alignment).abs() < 5e-5, "{name}");
        // The child prints the magnitude at display precision.
        let slack = 1e-2 * local.magnitude.abs().max(1.0);
        assert!((child.magnitude - local.magnitude).abs() < slack, "{name}");
    }
}

#[test]
fn subprocess_skips_unknown_names() {
    let runner = Runner::new(Subprocess::new(LAW_SCENARIO_BIN));
    let (output, records) = run_capture(&runner, &["nope", "L02"]);
    assert!(output.contains("[runner] ERROR: scenario not found: nope\n"));
    assert_eq!(records[0].outcome, Outcome::NotFound);
    assert!(matches!(records[1].outcome, Outcome::Parsed(_)));
}

#[test]
fn launch_failure_is_reported_and_unparsed() {
    let runner = Runner::new(Subprocess::new("/nonexistent/dir/law-scenario"));
    let (output, records) = run_capture(&runner, &["L01", "L02"]);
    let block = block_for(&output, "L01");
    assert!(block.contains("[runner] ERROR: could not launch /nonexistent/dir/law-scenario"));
    assert!(block.ends_with("[runner] summary: could not parse\n\n"));
    assert_eq!(records.len(), 2);
    assert!(
        records
            .iter()
            .all(|r| matches!(r.outcome, Outcome::LaunchFailed { .. }))
    );
}

#[test]
fn run_all_laws_with_process_isolation_from_config() {
    let config = config_file(&format!(
        "[runner]\nisolation = \"process\"\nformat = \"json\"\nscenario_bin = {LAW_SCENARIO_BIN:?}\n"
    ));
    let output = Command::new(RUN_ALL_LAWS_BIN)
        .args(["L05", "L99"])
        .env(CONFIG_ENV, config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Law L05: Conservation of Energy\n"));
    assert!(stdout.contains("[runner] summary: m=51.3900, a=+0.6810 [A- (stressed)]\n"));
    assert!(stdout.contains("[runner] ERROR: scenario not found: L99\n"));

    let start = stdout.rfind("\n{").map(|i| i + 1).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout[start..]).unwrap();
    assert_eq!(summary["scenarios"][0]["status"], "ok");
    assert_eq!(summary["scenarios"][1]["status"], "not-found");
}

#[test]
fn run_all_laws_falls_back_to_defaults_on_broken_config() {
    let config = config_file("[runner\n");
    let output = Command::new(RUN_ALL_LAWS_BIN)
        .arg("L01")
        .env(CONFIG_ENV, config.path())
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[runner] summary: m=11.8950, a=+0.5173 [A- (stressed)]\n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ignoring config"));
}
