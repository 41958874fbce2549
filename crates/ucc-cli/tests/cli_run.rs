use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_uccmon"))
}

fn repo_root() -> PathBuf {
    // crates/ucc-cli -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").canonicalize().unwrap()
}

fn fixture_path(name: &str) -> PathBuf {
    repo_root().join("tests/fixtures").join(name)
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("uccmon_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn assert_report_contract(v: &serde_json::Value) {
    let summary = v.get("summary").expect("report should have a summary");
    assert_eq!(summary["events"], 6, "all fixture events should be counted");
    assert_eq!(summary["fired"], 3, "three fixture events match, ran and accepted");
    assert_eq!(summary["cluster_samples"], 2);
    assert_eq!(summary["et_samples"], 3);
    assert_eq!(summary["missing_trigger_results"], 1);

    let histograms = v
        .get("histograms")
        .and_then(|x| x.as_array())
        .expect("histograms should be an array");
    assert_eq!(histograms.len(), 2, "exactly two histograms are booked");

    for entry in histograms {
        assert_eq!(entry["folder"], "HLT/HI/HLT_UCC");
    }

    let by_name = |name: &str| {
        histograms
            .iter()
            .find(|e| e["histogram"]["name"] == name)
            .unwrap_or_else(|| panic!("missing histogram {name}"))
    };

    let et = &by_name("h_SumEt")["histogram"];
    assert_eq!(et["n_bins"], 200);
    assert_eq!(et["x_min"], 0.0);
    assert_eq!(et["x_max"], 400.0);
    assert_eq!(et["entries"], 3);

    let cl = &by_name("h_SiPixelClusters")["histogram"];
    assert_eq!(cl["n_bins"], 100);
    assert_eq!(cl["x_max"], 10000.0);
    assert_eq!(cl["entries"], 2);
}

#[test]
fn version_smoke() {
    let out = run(&["version"]);
    assert!(out.status.success(), "version should succeed");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("uccmon "), "unexpected stdout: {}", stdout);
}

#[test]
fn run_writes_valid_report_to_stdout() {
    let config = fixture_path("ucc_config.json");
    let events = fixture_path("ucc_events.jsonl");
    assert!(config.exists(), "missing fixture: {}", config.display());
    assert!(events.exists(), "missing fixture: {}", events.display());

    let out = run(&[
        "run",
        "--config",
        config.to_string_lossy().as_ref(),
        "--events",
        events.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "run should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON");
    assert_report_contract(&v);
}

#[test]
fn run_writes_valid_report_to_file() {
    let config = fixture_path("ucc_config.json");
    let events = fixture_path("ucc_events.jsonl");
    let output = tmp_path("report.json");

    let out = run(&[
        "run",
        "--config",
        config.to_string_lossy().as_ref(),
        "--events",
        events.to_string_lossy().as_ref(),
        "--output",
        output.to_string_lossy().as_ref(),
    ]);
    assert!(
        out.status.success(),
        "run should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(output.exists(), "expected output file to exist: {}", output.display());

    let bytes = std::fs::read(&output).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&bytes).expect("output file should be JSON");
    assert_report_contract(&v);

    let _ = std::fs::remove_file(&output);
}

#[test]
fn run_errors_on_missing_config() {
    let missing = tmp_path("does_not_exist.json");
    let events = fixture_path("ucc_events.jsonl");
    let out = run(&[
        "run",
        "--config",
        missing.to_string_lossy().as_ref(),
        "--events",
        events.to_string_lossy().as_ref(),
    ]);
    assert!(!out.status.success(), "expected failure for missing config");
}

#[test]
fn run_errors_on_malformed_event_line() {
    let config = fixture_path("ucc_config.json");
    let events = tmp_path("bad_events.jsonl");
    std::fs::write(&events, "{not json\n").unwrap();

    let out = run(&[
        "run",
        "--config",
        config.to_string_lossy().as_ref(),
        "--events",
        events.to_string_lossy().as_ref(),
    ]);
    assert!(!out.status.success(), "expected failure for malformed event line");
    let stderr = String::from_utf8_lossy(&out.stderr).to_lowercase();
    assert!(stderr.contains("line 1"), "unexpected stderr: {}", stderr);

    let _ = std::fs::remove_file(&events);
}

#[test]
fn validate_prints_the_output_folder() {
    let config = fixture_path("ucc_config.json");
    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "validate should succeed");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("HLT/HI/HLT_UCC"), "unexpected stdout: {}", stdout);
}

#[test]
fn validate_errors_on_missing_key() {
    let config = fixture_path("bad_config_missing_key.json");
    assert!(config.exists(), "missing fixture: {}", config.display());

    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "expected failure for missing key");
    let stderr = String::from_utf8_lossy(&out.stderr).to_lowercase();
    assert!(
        stderr.contains("triggerpath") || stderr.contains("configuration"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn validate_errors_on_wrong_type() {
    let config = fixture_path("bad_config_wrong_type.json");
    let out = run(&["validate", "--config", config.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "expected failure for wrong type");
}
