//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `powercurve` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! All tests set `current_dir` to the workspace root so that relative
//! paths to the shared fixtures resolve correctly.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = "fixtures/generic-120-3-alpha-3.json";

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `powercurve` binary, rooted at workspace.
fn powercurve() -> Command {
    let mut cmd = cargo_bin_cmd!("powercurve");
    cmd.current_dir(workspace_root());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A cut-down alpha-6 schema: enough to tell migrated documents apart
/// from unmigrated ones.
fn write_schema(dir: &Path) -> PathBuf {
    let schema = serde_json::json!({
        "type": "object",
        "required": ["turbine", "power_curves"],
        "properties": {
            "turbine": {
                "type": "object",
                "required": ["power_reference_location"],
                "properties": {
                    "power_reference_location": {
                        "enum": ["low-voltage", "medium-voltage", "high-voltage"]
                    }
                }
            },
            "document": {
                "type": "object",
                "properties": {
                    "metadata": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["term_name", "value"],
                            "not": {"required": ["term"]}
                        }
                    }
                }
            }
        }
    });
    let path = dir.join("schema.json");
    fs::write(&path, serde_json::to_string_pretty(&schema).unwrap()).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    powercurve()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Power curve document migration toolkit",
        ));
}

#[test]
fn version_exits_0() {
    powercurve()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("powercurve"));
}

#[test]
fn migrate_help_lists_flags() {
    powercurve()
        .args(["migrate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--power-reference-location"));
}

// ──────────────────────────────────────────────
// 2. Migrate subcommand
// ──────────────────────────────────────────────

#[test]
fn migrate_fixture_to_current_version() {
    let assert = powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-3"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["turbine"]["power_reference_location"], "low-voltage");
    assert_eq!(doc["document"]["metadata"][0]["term_name"], "identifier");
    assert_eq!(
        doc["power_curves"]["operating_modes"][0]["parameters"][0],
        serde_json::json!({"label": "air-density", "value": 1.225})
    );
}

#[test]
fn migrate_to_intermediate_version() {
    let assert = powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-3", "--to", "alpha-4"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["turbine"]["available_hub_heights"], serde_json::json!([90, 120, 140]));
    assert_eq!(doc["document"]["metadata"][0]["term"], "Identifier");
}

#[test]
fn migrate_writes_out_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("migrated.json");

    powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-3", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated alpha-3 -> alpha-6"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["turbine"]["power_reference_location"], "low-voltage");
}

#[test]
fn migrate_with_power_reference_location_flag() {
    powercurve()
        .args([
            "migrate",
            FIXTURE,
            "--from",
            "alpha-3",
            "--power-reference-location",
            "high-voltage",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"high-voltage\""));
}

#[test]
fn migrate_validates_against_schema() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());

    powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-3", "--schema"])
        .arg(&schema)
        .assert()
        .success();
}

#[test]
fn migrate_schema_failure_exits_1() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());

    // alpha-4 still carries `term`, which the schema forbids.
    powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-3", "--to", "alpha-4", "--schema"])
        .arg(&schema)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid document"));
}

#[test]
fn migrate_unknown_version_exits_1() {
    powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown schema version 'alpha-2'"));
}

#[test]
fn migrate_downgrade_exits_1() {
    powercurve()
        .args(["migrate", FIXTURE, "--from", "alpha-6", "--to", "alpha-3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no migration path"));
}

#[test]
fn migrate_reports_failing_lens_and_transform() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doc.json");
    fs::write(
        &path,
        r#"{"turbine": {"power_reference_location": "high-voltage"}, "power_curves": {"operating_modes": []}}"#,
    )
    .unwrap();

    powercurve()
        .args(["migrate", "--from", "alpha-3"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("lens alpha-3 -> alpha-4 failed"))
        .stderr(predicate::str::contains("add_power_reference_location"));
}

#[test]
fn migrate_nonexistent_file_exits_1() {
    powercurve()
        .args(["migrate", "nonexistent_file_xyz.json", "--from", "alpha-3"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn migrate_json_error_output() {
    powercurve()
        .args(["--output", "json", "migrate", FIXTURE, "--from", "beta"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("{\"error\":"));
}

#[test]
fn migrate_verbose_logs_lenses() {
    powercurve()
        .args(["-v", "migrate", FIXTURE, "--from", "alpha-3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("applying lens"));
}

#[test]
fn migrate_verbose_logs_each_transform() {
    powercurve()
        .args(["-v", "migrate", FIXTURE, "--from", "alpha-3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("added power reference location"))
        .stderr(predicate::str::contains("relabelled shear coefficient parameters"))
        .stderr(predicate::str::contains("grouped hub heights by override"))
        .stderr(predicate::str::contains("relocated hub height override"))
        .stderr(predicate::str::contains("renamed parameter dimensions to axes"))
        .stderr(predicate::str::contains("collapsed singleton axes"))
        .stderr(predicate::str::contains("renamed metadata terms"));
}

// ──────────────────────────────────────────────
// 3. Validate subcommand
// ──────────────────────────────────────────────

#[test]
fn validate_migrated_document_exits_0() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());
    let out = tmp.path().join("migrated.json");

    powercurve()
        .args(["--quiet", "migrate", FIXTURE, "--from", "alpha-3", "--out"])
        .arg(&out)
        .assert()
        .success();

    powercurve()
        .arg("validate")
        .arg(&out)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_unmigrated_document_exits_1() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());

    powercurve()
        .args(["validate", FIXTURE, "--schema"])
        .arg(&schema)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid document"));
}

#[test]
fn validate_json_output_lists_errors() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());

    powercurve()
        .args(["--output", "json", "validate", FIXTURE, "--schema"])
        .arg(&schema)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"valid\": false"))
        .stderr(predicate::str::contains("\"errors\""));
}

#[test]
fn validate_without_schema_exits_1() {
    powercurve()
        .args(["validate", FIXTURE])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no schema given"));
}

#[test]
fn validate_invalid_json_exits_1() {
    let tmp = TempDir::new().unwrap();
    let schema = write_schema(tmp.path());
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{not json").unwrap();

    powercurve()
        .arg("validate")
        .arg(&path)
        .arg("--schema")
        .arg(&schema)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error parsing JSON"));
}

// ──────────────────────────────────────────────
// 4. Versions subcommand
// ──────────────────────────────────────────────

#[test]
fn versions_lists_chain() {
    powercurve()
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha-3"))
        .stdout(predicate::str::contains("alpha-6 (current)"))
        .stdout(predicate::str::contains("group_hub_heights_by_override"));
}

#[test]
fn versions_json_output() {
    let assert = powercurve()
        .args(["--output", "json", "versions"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["current"], "alpha-6");
    assert_eq!(json["versions"].as_array().unwrap().len(), 4);
    assert_eq!(json["lenses"].as_array().unwrap().len(), 3);
}

// ──────────────────────────────────────────────
// 5. Configuration file
// ──────────────────────────────────────────────

#[test]
fn config_supplies_target_and_location() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("powercurve.toml");
    fs::write(
        &config,
        "[migrate]\ntarget = \"alpha-4\"\npower_reference_location = \"medium-voltage\"\n",
    )
    .unwrap();

    let assert = powercurve()
        .arg("--config")
        .arg(&config)
        .args(["migrate", FIXTURE, "--from", "alpha-3"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["turbine"]["power_reference_location"], "medium-voltage");
    // still alpha-4: metadata not renamed yet
    assert_eq!(doc["document"]["metadata"][0]["term"], "Identifier");
}

#[test]
fn flags_override_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("powercurve.toml");
    fs::write(&config, "[migrate]\ntarget = \"alpha-4\"\n").unwrap();

    let assert = powercurve()
        .arg("--config")
        .arg(&config)
        .args(["migrate", FIXTURE, "--from", "alpha-3", "--to", "alpha-6"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["document"]["metadata"][0]["term_name"], "identifier");
}

#[test]
fn config_schema_path_is_relative_to_config_file() {
    let tmp = TempDir::new().unwrap();
    write_schema(tmp.path());
    let config = tmp.path().join("powercurve.toml");
    fs::write(&config, "[validate]\nschema = \"schema.json\"\n").unwrap();

    powercurve()
        .arg("--config")
        .arg(&config)
        .args(["validate", FIXTURE])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid document"));
}

#[test]
fn malformed_config_exits_1() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("powercurve.toml");
    fs::write(&config, "[migrate\n").unwrap();

    powercurve()
        .arg("--config")
        .arg(&config)
        .arg("versions")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not parse"));
}
