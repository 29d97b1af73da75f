//! file: core/src/lookup/mod.rs
//! description: host facade owning the lookup registry.

pub mod err;
pub mod plugin;
pub mod pluck;
pub mod select;
pub mod terms;

use futures::executor::block_on;
use std::collections::HashMap;
use std::sync::Arc;

use crate::value::Value;

pub struct Host
{
    lookups: plugin::LookupRegistry,
}

impl Host
{
    pub fn new() -> Self
    {
        Host {
            lookups: plugin::LookupRegistry::new(),
        }
    }

    /// Host with the built-in lookups already registered.
    pub fn with_builtins() -> Self
    {
        let mut host = Host::new();
        host.register_lookup(Arc::new(pluck::PluckLookup::new()));
        host
    }

    /// Resolve `name` and evaluate it against `terms`.
    pub fn run_lookup(
        &self,
        name: &str,
        terms: Vec<Value>,
        variables: &HashMap<String, Value>,
    ) -> Result<Vec<Value>, String>
    {
        match self.lookups.get(name) {
            Some(lookup) => block_on(lookup.run(terms, variables)),
            None => Err(format!("unknown lookup '{}'", name)),
        }
    }

    pub fn register_lookup(&mut self, lookup: Arc<dyn plugin::Lookup>)
    {
        self.lookups.register(lookup);
    }

    pub fn unregister_lookup(&mut self, name: &str)
    {
        self.lookups.unregister(name);
    }

    /// Return the list of currently registered lookup names.
    pub fn registered_lookup_names(&self) -> Vec<String>
    {
        self.lookups.registered_names()
    }

    pub fn lookup_metadata(&self, name: &str) -> Option<plugin::LookupMetadata>
    {
        self.lookups.get(name).map(|l| l.metadata())
    }
}

impl Default for Host
{
    fn default() -> Self
    {
        Self::new()
    }
}
