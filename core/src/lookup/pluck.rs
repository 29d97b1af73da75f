//! file: core/src/lookup/pluck.rs
//! description: built-in record-select lookup.
//!
//! Returns one field value from the first record whose match field equals
//! the select value. The match field defaults to `name` and can be
//! overridden with the `select_key` flag.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::lookup::plugin::{Lookup, LookupMetadata, OptionSpec};
use crate::lookup::select;
use crate::lookup::terms;
use crate::value::Value;

pub struct PluckLookup;

impl PluckLookup {
    pub fn new() -> Self {
        PluckLookup
    }
}

impl Default for PluckLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup for PluckLookup {
    fn name(&self) -> &str {
        "pluck"
    }

    async fn run(
        &self,
        terms: Vec<Value>,
        _variables: &HashMap<String, Value>,
    ) -> Result<Vec<Value>, String> {
        let query = terms::parse_terms(&terms).map_err(|e| e.to_string())?;
        select::select(&query).map_err(|e| e.to_string())
    }

    fn metadata(&self) -> LookupMetadata {
        LookupMetadata {
            description: "Return a selected field value from the first matching record".to_string(),
            version: "0.1.0".to_string(),
            terms: vec![
                "data: list of records (objects), or a single record".to_string(),
                "select value: matched against each record's match field".to_string(),
                "result field: field returned from the matching record".to_string(),
            ],
            options: vec![OptionSpec {
                name: "select_key".to_string(),
                description: "Override the default 'name' match field".to_string(),
                required: false,
            }],
        }
    }
}
