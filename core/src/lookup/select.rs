//! file: core/src/lookup/select.rs
//! description: the record selector evaluated by the `pluck` lookup.
//!
//! A single ordered pass over the record sequence: the first record whose
//! match field equals the select value decides the outcome. A matching
//! record that lacks the result field is terminal, not skipped.

use log::{debug, trace};

use crate::lookup::err::NoMatchFound;
use crate::value::Value;

/// Default field compared against the select value.
pub const DEFAULT_SELECT_KEY: &str = "name";

/// One fully-validated lookup invocation. Built by `terms::parse_terms`,
/// consumed by `select`, never mutated.
#[derive(Debug, Clone)]
pub struct Query {
    pub items: Vec<Value>,
    pub select_value: String,
    pub result_field: String,
    pub select_key: Option<String>,
}

impl Query {
    /// Field name compared against the select value.
    pub fn match_field(&self) -> &str {
        self.select_key.as_deref().unwrap_or(DEFAULT_SELECT_KEY)
    }
}

/// Scan `query.items` in order and return the result-field value of the
/// first record whose match field equals the select value, wrapped as a
/// one-element result list.
pub fn select(query: &Query) -> Result<Vec<Value>, NoMatchFound> {
    let match_field = query.match_field();
    match &query.select_key {
        Some(key) => debug!(
            "match field default '{}' overridden with '{}'",
            DEFAULT_SELECT_KEY, key
        ),
        None => debug!("match field set to default '{}'", DEFAULT_SELECT_KEY),
    }

    for item in &query.items {
        let record = match item.as_object() {
            Some(r) => r,
            None => continue,
        };
        // A record without the match field, or with a non-string value
        // there, cannot match; keep scanning.
        let candidate = match record.get(match_field).and_then(Value::as_str) {
            Some(c) => c,
            None => continue,
        };
        trace!("comparing '{}' with '{}'", candidate, query.select_value);

        if candidate == query.select_value {
            if let Some(found) = record.get(&query.result_field) {
                debug!(
                    "found match for '{}: {}' with '{}: {:?}'",
                    match_field, query.select_value, query.result_field, found
                );
                return Ok(vec![found.clone()]);
            }
            // First matching record lacks the result field: stop scanning.
            break;
        }
    }

    Err(NoMatchFound::new(
        match_field,
        &query.select_value,
        &query.result_field,
    ))
}
