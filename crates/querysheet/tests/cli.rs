use clap::Parser;
use querysheet::cli::{execute, Cli};
use querysheet::Catalog;
use serde_json::Value;

fn invoke(args: &[&str]) -> (bool, String) {
    let cli = Cli::try_parse_from(std::iter::once("querysheet").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let passed = execute(&cli, &Catalog::new(), &mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[test]
fn list_shows_annotations() {
    let (passed, out) = invoke(&["list", "--section", "sum"]);
    assert!(passed);
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("sum "));
    assert!(first.contains("sum_numbers"));
    assert!(first.ends_with("15"));
    assert_eq!(out.lines().count(), 6);
}

#[test]
fn run_single_snippet_as_text() {
    let (passed, out) = invoke(&["run", "order_employees_by_salary_then_name"]);
    assert!(passed);
    assert_eq!(
        out,
        "order_employees_by_salary_then_name: [Bob, Diana, Charlie, Alice]\n"
    );
}

#[test]
fn run_as_json_tags_outcomes() {
    let (_, out) = invoke(&["run", "--format", "json", "first_of_empty"]);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["section"], "first");
    assert_eq!(json[0]["outcome"]["kind"], "failure");
    assert_eq!(json[0]["outcome"]["value"], "sequence contains no elements");
}

#[test]
fn verify_reports_success() {
    let (passed, out) = invoke(&["verify"]);
    assert!(passed);
    assert!(out.trim_end().ends_with("0 failed"));
    assert!(!out.contains("FAILED"));
}

#[test]
fn verify_as_json_summarises() {
    let (passed, out) = invoke(&["verify", "-s", "count", "--format", "json"]);
    assert!(passed);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["failed"], 0);
    assert_eq!(json["total"], json["passed"]);
    assert_eq!(json["reports"].as_array().unwrap().len(), 5);
}

#[test]
fn section_mismatch_is_an_error() {
    let cli = Cli::try_parse_from(["querysheet", "run", "-s", "any", "sum_numbers"]).unwrap();
    let mut out = Vec::new();
    let err = execute(&cli, &Catalog::new(), &mut out).unwrap_err();
    assert!(err.to_string().contains("belongs to section 'sum'"));
}
