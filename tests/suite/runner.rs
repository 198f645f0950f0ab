//! Full in-process batches.

use bounded_config::OutputFormat;
use bounded_engine::{BANNER, InProcess, Outcome, Runner, catalog};

use crate::common::{block_for, run_capture};

#[test]
fn default_batch_summarizes_all_ten() {
    let (output, records) = run_capture(&Runner::new(InProcess), &[]);

    assert!(output.starts_with(&format!("{BANNER}\n\n")));
    assert_eq!(records.len(), 10);
    assert!(records.iter().all(|r| matches!(r.outcome, Outcome::Parsed(_))));

    let summaries: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("[runner] summary:"))
        .collect();
    assert_eq!(
        summaries,
        [
            "[runner] summary: m=11.8950, a=+0.5173 [A- (stressed)]",
            "[runner] summary: m=20.0000, a=+0.4253 [A0 (borderline)]",
            "[runner] summary: m=10.0000, a=+0.4197 [A0 (borderline)]",
            "[runner] summary: m=249420.0000, a=+0.2775 [A0 (borderline)]",
            "[runner] summary: m=51.3900, a=+0.6810 [A- (stressed)]",
            "[runner] summary: m=0.2500, a=+0.6744 [A- (stressed)]",
            "[runner] summary: m=196625.0000, a=+0.1039 [A+ (calm)]",
            "[runner] summary: m=1.5396, a=+0.1577 [A+ (calm)]",
            "[runner] summary: m=3.1667, a=+0.2780 [A0 (borderline)]",
            "[runner] summary: m=40.0000, a=+0.7005 [A- (stressed)]",
        ]
    );
}

#[test]
fn each_block_echoes_the_scenario_output() {
    let (output, _) = run_capture(&Runner::new(InProcess), &["L07"]);
    let block = block_for(&output, "L07");
    assert!(block.contains("Law L07: Bernoulli's Equation\n"));
    assert!(block.contains("SSM: m=196625, a=+0.1039\n[runner] summary:"));
    assert!(!block.contains("[runner] STDERR:"));
}

#[test]
fn subset_runs_in_request_order() {
    let names = ["faraday_induction", "L02", "scenario_L01_ohms_law"];
    let (output, records) = run_capture(&Runner::new(InProcess), &names);
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("--- ")).collect();
    assert_eq!(
        headers,
        [
            "--- faraday_induction ---",
            "--- L02 ---",
            "--- scenario_L01_ohms_law ---"
        ]
    );
    assert_eq!(records.len(), 3);
}

#[test]
fn unknown_name_does_not_stop_the_batch() {
    let (output, records) =
        run_capture(&Runner::new(InProcess), &["L01", "scenario_L11_gravity", "L03"]);
    assert!(
        block_for(&output, "scenario_L11_gravity")
            .ends_with("[runner] ERROR: scenario not found: scenario_L11_gravity\n\n")
    );
    assert_eq!(records[1].outcome, Outcome::NotFound);
    assert!(matches!(records[2].outcome, Outcome::Parsed(_)));
}

#[test]
fn json_format_appends_summary_document() {
    let runner = Runner::new(InProcess).with_format(OutputFormat::Json);
    let (output, _) = run_capture(&runner, &[]);
    let start = output.rfind("\n{").map(|i| i + 1).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&output[start..]).unwrap();
    let scenarios = summary["scenarios"].as_array().unwrap();
    assert_eq!(scenarios.len(), 10);
    for (entry, name) in scenarios.iter().zip(catalog::default_names()) {
        assert_eq!(entry["name"], name.as_str());
        assert_eq!(entry["status"], "ok");
    }
    assert_eq!(scenarios[6]["band"], "calm");
    assert_eq!(scenarios[9]["band"], "stressed");
}
