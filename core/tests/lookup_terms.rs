use std::collections::HashMap;

use pluck_core::generate_error_report;
use pluck_core::lookup::terms::{listify_term, parse_terms};
use pluck_core::value::{Value, json_to_value};

fn record(fields: &[(&str, &str)]) -> Value {
    let mut map = HashMap::new();
    for (k, v) in fields {
        map.insert(k.to_string(), Value::Str(v.to_string()));
    }
    Value::Object(map)
}

fn data_term() -> Value {
    Value::Array(vec![
        record(&[("name", "jdoe"), ("role", "admin")]),
        record(&[("name", "ajones"), ("role", "crackpot")]),
    ])
}

fn str_term(s: &str) -> Value {
    Value::Str(s.to_string())
}

fn flags_term(entries: &[(&str, Value)]) -> Value {
    let mut map = HashMap::new();
    for (k, v) in entries {
        map.insert(k.to_string(), v.clone());
    }
    Value::Object(map)
}

#[test]
fn two_terms_is_invalid() {
    let err = parse_terms(&[data_term(), str_term("jdoe")]).expect_err("parse should fail");
    assert!(
        err.to_string().contains("pluck lookup expects"),
        "message should quote the expected call shape, got: {}",
        err
    );
}

#[test]
fn invalid_terms_render_an_error_report() {
    let err = parse_terms(&[data_term()]).expect_err("parse should fail");
    let report = generate_error_report(&err);
    assert!(
        report.starts_with("PLUCK | ERROR | pluck.lookup.terms"),
        "unexpected report: {}",
        report
    );
}

#[test]
fn five_terms_is_invalid() {
    let terms = vec![
        data_term(),
        str_term("jdoe"),
        str_term("role"),
        flags_term(&[]),
        str_term("extra"),
    ];
    parse_terms(&terms).expect_err("parse should fail with five terms");
}

#[test]
fn string_data_term_is_invalid() {
    let err = parse_terms(&[str_term("not-records"), str_term("jdoe"), str_term("role")])
        .expect_err("parse should fail");
    assert!(
        err.to_string().contains("list of objects"),
        "message should name the data shape, got: {}",
        err
    );
}

#[test]
fn non_string_select_value_is_invalid() {
    let err = parse_terms(&[data_term(), Value::Int(7), str_term("role")])
        .expect_err("parse should fail");
    assert!(err.to_string().contains("Select value must be a string"));
}

#[test]
fn non_string_result_field_is_invalid() {
    let err = parse_terms(&[data_term(), str_term("jdoe"), Value::Null])
        .expect_err("parse should fail");
    assert!(err.to_string().contains("Result field must be a string"));
}

#[test]
fn single_object_data_is_one_element_sequence() {
    let single = record(&[("name", "jdoe"), ("role", "admin")]);
    let query = parse_terms(&[single.clone(), str_term("jdoe"), str_term("role")])
        .expect("parse should succeed");
    assert_eq!(query.items, vec![single]);
}

#[test]
fn flags_term_must_be_object() {
    let terms = vec![data_term(), str_term("jdoe"), str_term("role"), str_term("role")];
    let err = parse_terms(&terms).expect_err("parse should fail");
    assert!(
        err.to_string().contains("fourth term"),
        "message should point at the flags term, got: {}",
        err
    );
}

#[test]
fn unrecognized_flag_is_ignored() {
    let terms = vec![
        data_term(),
        str_term("jdoe"),
        str_term("role"),
        flags_term(&[("sort_order", str_term("asc"))]),
    ];
    let query = parse_terms(&terms).expect("unrecognized flags are not fatal");
    assert_eq!(query.select_key, None);
}

#[test]
fn select_key_flag_overrides_match_field() {
    let terms = vec![
        data_term(),
        str_term("admin"),
        str_term("name"),
        flags_term(&[("select_key", str_term("role"))]),
    ];
    let query = parse_terms(&terms).expect("parse should succeed");
    assert_eq!(query.match_field(), "role");
}

#[test]
fn empty_select_key_falls_back_to_default() {
    let terms = vec![
        data_term(),
        str_term("jdoe"),
        str_term("role"),
        flags_term(&[("select_key", str_term(""))]),
    ];
    let query = parse_terms(&terms).expect("parse should succeed");
    assert_eq!(query.match_field(), "name");
}

#[test]
fn non_string_select_key_is_invalid() {
    let terms = vec![
        data_term(),
        str_term("jdoe"),
        str_term("role"),
        flags_term(&[("select_key", Value::Int(1))]),
    ];
    let err = parse_terms(&terms).expect_err("parse should fail");
    assert!(err.to_string().contains("'select_key' flag must be a string"));
}

#[test]
fn listify_wraps_single_object() {
    let single = record(&[("name", "jdoe")]);
    assert_eq!(listify_term(&single), vec![single]);
}

#[test]
fn json_records_flow_through_parse() {
    let data = serde_json::json!([
        { "name": "jdoe", "role": "admin" },
        { "name": "ajones", "role": "crackpot" }
    ]);
    let terms = vec![json_to_value(&data), str_term("jdoe"), str_term("role")];
    let query = parse_terms(&terms).expect("parse should succeed");
    assert_eq!(query.items.len(), 2);
    assert_eq!(query.result_field, "role");
}
