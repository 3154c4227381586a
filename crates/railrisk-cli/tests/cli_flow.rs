use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures")
        .join(name)
}

fn railrisk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_railrisk"))
        .env_remove("RAILRISK_DATA_PATH")
        .env_remove("RAILRISK_CLASSIFIER_MODEL")
        .env_remove("RAILRISK_LIFETIME_MODEL")
        .env_remove("RAILRISK_LOG")
        .arg("--data")
        .arg(fixture("part-data.csv"))
        .arg("--classifier-model")
        .arg(fixture("rf_classifier.json"))
        .arg("--lifetime-model")
        .arg(fixture("lifetime_regressor.json"))
        .args(args)
        .output()
        .expect("spawn railrisk")
}

fn json_of(output: &Output) -> Value {
    assert!(output.status.success(), "exit status {:?}", output.status);
    assert!(output.stderr.is_empty(), "stderr should stay quiet by default");
    let stdout = String::from_utf8(output.stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(stdout.trim()).expect("stdout is one json object")
}

#[test]
fn assess_spotless_exact_history_is_approved() {
    let value = json_of(&railrisk(&["assess"]));
    assert_eq!(value["historical_data"]["data_source"], "exact matches (3 components)");
    assert_eq!(value["historical_data"]["confidence_base"], 90.0);
    assert_eq!(value["prediction"], "APPROVED");
    assert_eq!(value["status"], "pass");
    assert_eq!(value["risk_score"], 5.0);
    assert_eq!(value["probability"], 90.0);
    assert_eq!(value["model_info"]["training_data_size"], 10);
    let factors = value["risk_factors"].as_array().expect("factors");
    assert!(factors
        .iter()
        .any(|f| f == "Identical components have perfect record (3 samples)"));
}

#[test]
fn assess_unknown_combination_uses_default_estimate() {
    let value = json_of(&railrisk(&["assess", "999", "Liner", "2", "1000", "North", "Passenger"]));
    // Liner rows exist (vendor 400, material 5), so the part-type tier applies.
    assert_eq!(value["historical_data"]["data_source"], "part type average (1 components)");

    let empty = tempfile::NamedTempFile::new().expect("tempfile");
    std::fs::write(
        empty.path(),
        "Vendor ID,Part type,material,Defect,Lifetime (Days),Region,Route Type,Warranty (Years)\n",
    )
    .expect("write header");
    let output = Command::new(env!("CARGO_BIN_EXE_railrisk"))
        .env_remove("RAILRISK_LOG")
        .arg("--data")
        .arg(empty.path())
        .args(["assess", "100", "Rail Clips", "1", "1000", "North", "Passenger"])
        .output()
        .expect("spawn railrisk");
    let value = json_of(&output);
    assert_eq!(
        value["historical_data"]["data_source"],
        "default estimate (no historical data)"
    );
    assert_eq!(value["historical_data"]["base_lifetime_days"], 1200.0);
    assert_eq!(value["historical_data"]["defect_rate"], 10.0);
}

#[test]
fn missing_reference_data_still_prints_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_railrisk"))
        .env_remove("RAILRISK_LOG")
        .args(["--data", "/no/such/part-data.csv", "assess"])
        .output()
        .expect("spawn railrisk");
    let value = json_of(&output);
    assert_eq!(value["prediction"], "PASS");
    assert_eq!(value["probability"], 75.0);
    assert!(value["error"]
        .as_str()
        .is_some_and(|e| e.contains("/no/such/part-data.csv")));
}

#[test]
fn malformed_number_becomes_fallback() {
    let value = json_of(&railrisk(&["lifetime", "100", "Rail Clips", "lot-7"]));
    assert_eq!(value["model_type"], "Error Fallback");
    assert_eq!(value["risk_assessment"], "Unknown");
    assert!(value["error"].as_str().is_some_and(|e| e.contains("lot_number")));
}

#[test]
fn usage_errors_become_fallback() {
    let value = json_of(&railrisk(&["lifetime-model", "--bogus"]));
    assert_eq!(value["model_type"], "Error Fallback");
    assert!(value["error"].is_string());
}

#[test]
fn lifetime_from_reference_data() {
    let value = json_of(&railrisk(&["lifetime"]));
    // 1300 day exact-match mean plus 15% for material grade 1.
    assert_eq!(value["predicted_lifetime_days"], 1495);
    assert_eq!(value["historical_data"]["data_source"], "exact matches (3 components)");
    assert_eq!(value["model_type"], "Data-Driven Lifetime Prediction");
}

#[test]
fn extreme_lifetimes_in_reference_data_still_print_json() {
    let big = tempfile::NamedTempFile::new().expect("tempfile");
    std::fs::write(
        big.path(),
        "Vendor ID,Part type,material,Defect,Lifetime (Days),Region,Route Type,Warranty (Years)\n\
         100,1,1,0,9223372036854775807,1,2,2\n\
         100,1,1,0,9223372036854775807,1,2,2\n",
    )
    .expect("write rows");
    let run = |command: &str| {
        Command::new(env!("CARGO_BIN_EXE_railrisk"))
            .env_remove("RAILRISK_LOG")
            .arg("--data")
            .arg(big.path())
            .arg(command)
            .output()
            .expect("spawn railrisk")
    };

    let assessed = json_of(&run("assess"));
    assert_eq!(
        assessed["historical_data"]["data_source"],
        "exact matches (2 components)"
    );
    let score = assessed["risk_score"].as_f64().expect("numeric score");
    assert!((0.0..=100.0).contains(&score));

    let lifetime = json_of(&run("lifetime"));
    assert_eq!(lifetime["predicted_lifetime_days"], i64::MAX);
}

#[test]
fn predict_reports_bare_verdict() {
    let value = json_of(&railrisk(&["predict", "100", "1", "1", "1000", "1", "2"]));
    assert_eq!(value["prediction"], "PASS");
    assert_eq!(value["probability"], 85.0);
    assert_eq!(value["status"], "pass");
    assert!(value.get("risk_factors").is_none());
}

#[test]
fn classify_combines_verdict_with_history() {
    let value = json_of(&railrisk(&["classify", "300", "Sleeper", "8", "500", "South", "Freight"]));
    assert_eq!(value["prediction"], "BROKE");
    assert_eq!(value["status"], "fail");
    assert_eq!(value["probability"], 65.0);
    assert_eq!(value["historical_performance"]["total_parts_supplied"], 2);
    assert_eq!(value["historical_performance"]["historical_defect_rate"], 100.0);
    assert_eq!(value["model_info"]["model_type"], "RandomForestClassifier");
    assert_eq!(value["model_info"]["features_used"], 6);
}

#[test]
fn lifetime_model_reviews_regressor_hours() {
    let value = json_of(&railrisk(&["lifetime-model"]));
    assert_eq!(value["predicted_lifetime_hours"], 22000.0);
    assert_eq!(value["model_type"], "VotingRegressor");
    assert_eq!(value["confidence"], 73.5);
    assert_eq!(value["risk_assessment"], "Medium");
}

#[test]
fn inspect_model_describes_artifact() {
    let path = fixture("lifetime_regressor.json");
    let value = json_of(&railrisk(&["inspect-model", path.to_str().expect("utf8 path")]));
    assert_eq!(value["kind"], "regressor");
    assert_eq!(value["n_features"], 10);
    assert_eq!(value["sample_prediction"], 15000.0);

    let value = json_of(&railrisk(&["inspect-model", "/no/such/model.json"]));
    assert!(value["error"].is_string());
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(1));
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let output = railrisk(&["-vv", "assess"]);
    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let value: Value = serde_json::from_str(stdout.trim()).expect("json");
    assert_eq!(value["prediction"], "APPROVED");
}

#[test]
fn help_prints_usage_and_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_railrisk"))
        .arg("--help")
        .output()
        .expect("spawn railrisk");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("inspect-model"));
}
