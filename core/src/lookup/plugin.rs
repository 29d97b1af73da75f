//! file: core/src/lookup/plugin.rs
//! description: lookup plugin trait & runtime lookup registry.
//!
//! Defines the `Lookup` trait implemented by lookup plugins, the metadata
//! types describing their documentation surface, and `LookupRegistry` used
//! by the host to resolve lookups by name at evaluation time.

use crate::value::Value;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait Lookup: Send + Sync {
    /// Name of the lookup (e.g. "pluck").
    fn name(&self) -> &str;

    /// Called by the host to evaluate a lookup expression.
    /// `terms` are the already-templated positional terms, `variables` the
    /// host's current variable scope. Lookups always return a list of results.
    async fn run(
        &self,
        terms: Vec<Value>,
        variables: &HashMap<String, Value>,
    ) -> Result<Vec<Value>, String>;

    /// Optional metadata for documentation, versioning, etc.
    fn metadata(&self) -> LookupMetadata { LookupMetadata::default() }
}

use serde::{Deserialize, Serialize};

/// One recognized key in a lookup's optional flags term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupMetadata {
    pub description: String,
    pub version: String,
    /// Positional-term descriptions, in call order.
    pub terms: Vec<String>,
    pub options: Vec<OptionSpec>,
}

use log::info;
use std::sync::Arc;

pub struct LookupRegistry {
    lookups: HashMap<String, Arc<dyn Lookup>>,
}

impl LookupRegistry {
    pub fn new() -> Self { Self { lookups: HashMap::new() } }

    /// Register a runtime lookup instance.
    pub fn register(&mut self, lookup: Arc<dyn Lookup>) {
        info!("registered lookup '{}'", lookup.name());
        self.lookups.insert(lookup.name().to_string(), lookup);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Lookup>> {
        self.lookups.get(name).cloned()
    }

    /// Return the list of currently registered lookup names.
    pub fn registered_names(&self) -> Vec<String> {
        self.lookups.keys().cloned().collect()
    }

    pub fn unregister(&mut self, name: &str) {
        self.lookups.remove(name);
    }
}
