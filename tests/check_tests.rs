//! Integration tests for the checker against fixture files
//!
//! Each fixture lives in `tests/fixtures/<name>/openapi.json`.

use openapi_check::checker::check_openapi_json;
use openapi_check::{CheckConfig, Diagnostics, FindingKind, Location, Summary};
use std::path::PathBuf;

fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn check_fixture(name: &str) -> (Summary, Diagnostics<Vec<u8>>) {
    let config = CheckConfig::for_directory(fixture_dir(name));
    let mut diag = Diagnostics::new(Vec::new(), false);
    let summary = check_openapi_json(&config.spec_path(), &mut diag).unwrap();
    (summary, diag)
}

#[test]
fn test_documented_pet_store_passes() {
    let (summary, diag) = check_fixture("documented_pet_store");
    assert_eq!(summary, Summary::new(1, 0));
    assert!(diag.findings().is_empty(), "{:?}", diag.findings());
}

#[test]
fn test_undocumented_pet_store_reports_everything() {
    let (summary, diag) = check_fixture("undocumented_pet_store");
    assert_eq!(summary, Summary::new(0, 7));

    let locations: Vec<_> = diag
        .findings()
        .iter()
        .map(|f| f.location.to_string())
        .collect();
    assert_eq!(
        locations,
        vec![
            "info",
            "/pets get",
            "/pets get parameter limit",
            "/pets get parameter <unnamed>",
            "/pets get response default",
            "/pets post",
            "/pets post response 201",
        ]
    );

    let blank = diag
        .findings()
        .iter()
        .filter(|f| f.kind == FindingKind::BlankDescription)
        .count();
    assert_eq!(blank, 4);
}

#[test]
fn test_missing_info_node() {
    let (summary, diag) = check_fixture("missing_info");
    assert_eq!(summary, Summary::new(0, 1));
    assert_eq!(diag.findings()[0].kind, FindingKind::MissingInfo);
}

#[test]
fn test_parameter_fixture_names_parameter() {
    let (summary, diag) = check_fixture("parameter_without_description");
    assert_eq!(summary, Summary::new(0, 1));
    assert_eq!(
        diag.findings()[0].location,
        Location::Parameter {
            path: "/a".to_string(),
            method: "get".to_string(),
            name: "id".to_string(),
        }
    );
}

#[test]
fn test_not_json_fixture() {
    let (summary, diag) = check_fixture("not_json");
    assert_eq!(summary, Summary::new(0, 1));
    assert_eq!(diag.findings()[0].kind, FindingKind::InvalidJson);

    let output = String::from_utf8(diag.finish().unwrap()).unwrap();
    assert!(output.lines().next().unwrap().ends_with("has invalid JSON format"));
    assert_eq!(output.lines().count(), 2);
}

#[test]
fn test_repeated_runs_are_identical() {
    let (first_summary, first) = check_fixture("undocumented_pet_store");
    let (second_summary, second) = check_fixture("undocumented_pet_store");
    assert_eq!(first_summary, second_summary);
    assert_eq!(first.findings(), second.findings());
    assert_eq!(first.finish().unwrap(), second.finish().unwrap());
}
