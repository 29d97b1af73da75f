//! file: core/src/lookup/terms.rs
//! description: raw term normalization & validation.
//!
//! The host hands lookups a flat list of already-templated terms. This
//! module is the adapter between that convention and the typed `Query`
//! consumed by the selector: it flattens the data term, checks arity and
//! types, and parses the optional flags term.

use log::warn;

use crate::lookup::err::InvalidArguments;
use crate::lookup::select::Query;
use crate::value::Value;

/// Keys recognized in the optional flags term.
const FLAGS: &[&str] = &["select_key"];

/// Flatten the data term into a plain record sequence. An array flattens to
/// its elements; a single object is treated as a one-element sequence.
/// Anything else passes through for `parse_terms` to reject.
pub fn listify_term(term: &Value) -> Vec<Value> {
    match term {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

/// Validate the raw terms of a pluck call and build the `Query` they
/// describe. Every failure carries the expected call shape.
pub fn parse_terms(terms: &[Value]) -> Result<Query, InvalidArguments> {
    // check lookup terms - check number of terms
    if !(3..=4).contains(&terms.len()) {
        return Err(InvalidArguments::new(format!("Got {} terms.", terms.len())));
    }

    let items = listify_term(&terms[0]);
    if let Some(bad) = items.iter().find(|item| item.as_object().is_none()) {
        return Err(InvalidArguments::new(format!(
            "Data must be a list of objects, got {}.",
            bad.type_name()
        )));
    }

    let select_value = terms[1].as_str().ok_or_else(|| {
        InvalidArguments::new(format!(
            "Select value must be a string, got {}.",
            terms[1].type_name()
        ))
    })?;
    let result_field = terms[2].as_str().ok_or_else(|| {
        InvalidArguments::new(format!(
            "Result field must be a string, got {}.",
            terms[2].type_name()
        ))
    })?;

    let mut select_key = None;
    if let Some(flags_term) = terms.get(3) {
        let flags = flags_term.as_object().ok_or_else(|| {
            InvalidArguments::new(format!(
                "The optional fourth term must be an object with flags {:?}.",
                FLAGS
            ))
        })?;

        for key in flags.keys() {
            if !FLAGS.contains(&key.as_str()) {
                warn!("ignoring unrecognized flag '{}'", key);
            }
        }

        match flags.get("select_key") {
            // An empty override falls back to the default match field.
            Some(Value::Str(key)) if !key.is_empty() => select_key = Some(key.clone()),
            Some(Value::Str(_)) => {}
            Some(other) => {
                return Err(InvalidArguments::new(format!(
                    "The 'select_key' flag must be a string, got {}.",
                    other.type_name()
                )));
            }
            None => {}
        }
    }

    Ok(Query {
        items,
        select_value: select_value.to_string(),
        result_field: result_field.to_string(),
        select_key,
    })
}
