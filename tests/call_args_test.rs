//! CLI argument-to-payload parsing tests

use serde_json::{json, Value};
use toolgate::cli::call::parse_call_args;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_colon_separated_pairs() {
    let parsed = parse_call_args(&strings(&["title:buy milk", "priority:2"])).unwrap();
    assert_eq!(parsed["title"], "buy milk");
    assert_eq!(parsed["priority"], 2);
}

#[test]
fn test_equals_separated_pairs() {
    let parsed = parse_call_args(&strings(&["completed=true", "name=groceries"])).unwrap();
    assert_eq!(parsed["completed"], true);
    assert_eq!(parsed["name"], "groceries");
}

#[test]
fn test_json_values_pass_through() {
    let parsed = parse_call_args(&strings(&[
        r#"tags:["home","urgent"]"#,
        r#"meta:{"color":"red"}"#,
        "note:null",
    ]))
    .unwrap();
    assert_eq!(parsed["tags"], json!(["home", "urgent"]));
    assert_eq!(parsed["meta"]["color"], "red");
    assert_eq!(parsed["note"], Value::Null);
}

#[test]
fn test_bare_argument_becomes_flag() {
    let parsed = parse_call_args(&strings(&["force"])).unwrap();
    assert_eq!(parsed["force"], true);
}

#[test]
fn test_empty_args_yield_empty_object() {
    let parsed = parse_call_args(&[]).unwrap();
    assert_eq!(parsed, json!({}));
}

#[test]
fn test_value_may_contain_separator() {
    let parsed = parse_call_args(&strings(&["url:http://localhost:4100"])).unwrap();
    assert_eq!(parsed["url"], "http://localhost:4100");
}
