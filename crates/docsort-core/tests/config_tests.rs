//! Integration tests for the model YAML pipeline.

use docsort_core::{ConfigLayout, Error, sort_config_text};
use pretty_assertions::assert_eq;
use serde_yaml::{Mapping, Value};

const TO_SORT: &str = r#"models:
  - name: stg_payments
    description: Payments staged from the raw layer.
  - name: stg_orders
    columns:
      - name: order_id
      - name: customer_id
version: 2
sources:
  - name: shop
    tables:
      - name: orders
      - name: customers
  - name: crm
    tables:
      - name: leads
config:
  materialized: view
"#;

fn parse(text: &str) -> Mapping {
    serde_yaml::from_str(text).unwrap()
}

fn keys(mapping: &Mapping) -> Vec<String> {
    mapping
        .keys()
        .map(|k| k.as_str().unwrap().to_string())
        .collect()
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_sequence()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_key_partition_scenario() {
    let text = "models:\n  - name: z\n  - name: a\nowner: x\nteam: y\n";
    let outcome = sort_config_text(text, &ConfigLayout::default()).unwrap();
    assert!(outcome.changed);

    let sorted = parse(&outcome.content);
    assert_eq!(keys(&sorted), ["owner", "team", "models"]);
    assert_eq!(names(sorted.get("models").unwrap()), ["a", "z"]);
}

#[test]
fn test_full_document() {
    let outcome = sort_config_text(TO_SORT, &ConfigLayout::default()).unwrap();
    assert!(outcome.changed);

    let sorted = parse(&outcome.content);
    assert_eq!(keys(&sorted), ["config", "version", "sources", "models"]);

    let sources = sorted.get("sources").unwrap();
    assert_eq!(names(sources), ["crm", "shop"]);
    assert_eq!(names(&sources[1]["tables"]), ["customers", "orders"]);

    let models = sorted.get("models").unwrap();
    assert_eq!(names(models), ["stg_orders", "stg_payments"]);
    // Model columns are not a reserved collection and keep their order.
    assert_eq!(names(&models[0]["columns"]), ["order_id", "customer_id"]);
}

#[test]
fn test_sorted_output_is_stable() {
    let first = sort_config_text(TO_SORT, &ConfigLayout::default()).unwrap();
    let second = sort_config_text(&first.content, &ConfigLayout::default()).unwrap();
    assert!(!second.changed);
    assert_eq!(second.content, first.content);
}

#[test]
fn test_already_sorted_document_is_untouched() {
    let text = "owner: x\nteam: y\nmodels:\n  - name: a\n  - name: z\n";
    let outcome = sort_config_text(text, &ConfigLayout::default()).unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.content, text);
}

#[test]
fn test_missing_reserved_keys_are_omitted() {
    let outcome = sort_config_text("b: 1\na: 2\n", &ConfigLayout::default()).unwrap();
    let sorted = parse(&outcome.content);
    assert_eq!(keys(&sorted), ["a", "b"]);
}

#[test]
fn test_missing_name_propagates() {
    let text = "models:\n  - name: a\n  - description: no name\n";
    let err = sort_config_text(text, &ConfigLayout::default()).unwrap_err();
    assert!(matches!(err, Error::MissingSortKey { index: 1, .. }));
    assert_eq!(err.to_string(), "Entry 1 of `models` has no `name` field");
}

#[test]
fn test_parse_error_propagates() {
    let err = sort_config_text("models: [unclosed", &ConfigLayout::default()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse YAML content"));
}
