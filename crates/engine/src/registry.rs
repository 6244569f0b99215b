//! Trait registry
//!
//! Maps trait names to their definitions. The mapping is write-once per key:
//! a bound name is never rebound, and looking up an unbound name is an error
//! rather than an empty result.
//!
//! ## Usage
//!
//! ```rust
//! use traitmix_core::Value;
//! use traitmix_engine::TraitRegistry;
//!
//! let registry = TraitRegistry::new();
//! registry.define("HasProp", Value::object([("value", Value::from("v"))])).unwrap();
//!
//! let def = registry.lookup("HasProp").unwrap();
//! assert_eq!(def.name(), "HasProp");
//! assert!(registry.define("HasProp", Value::object([("value", Value::Null)])).is_err());
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use traitmix_core::{Error, Result, TraitDefinition, TraitHandle, TraitRef, Value};

/// Process-wide registry backing the facade functions
static GLOBAL_REGISTRY: Lazy<TraitRegistry> = Lazy::new(TraitRegistry::new);

/// Registry of trait definitions keyed by name
#[derive(Default)]
pub struct TraitRegistry {
    traits: RwLock<HashMap<String, TraitHandle>>,
}

impl TraitRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TraitRegistry {
            traits: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry
    ///
    /// Lives for the whole process and is never torn down. Prefer an explicit
    /// registry wherever one can be passed around.
    pub fn global() -> &'static TraitRegistry {
        &GLOBAL_REGISTRY
    }

    /// Define a trait, or look one up when `structure` is `None`
    ///
    /// Checks run in a fixed order:
    /// 1. no structure: return the bound definition or [`Error::NoSuchTrait`]
    /// 2. name already bound: [`Error::AlreadyDefined`]
    /// 3. structure not an object: [`Error::TraitStructure`]
    /// 4. copy the structure, bind it, and return the new definition
    ///
    /// Only step 4 mutates the registry. Steps 2-4 run under one write lock,
    /// so two racing definitions of the same name cannot both succeed.
    pub fn define_or_lookup(&self, name: &str, structure: Option<&Value>) -> Result<TraitHandle> {
        let Some(structure) = structure else {
            return self.lookup(name);
        };

        let mut traits = self.traits.write();
        if traits.contains_key(name) {
            return Err(Error::AlreadyDefined(name.to_string()));
        }

        let definition = Arc::new(TraitDefinition::from_structure(name, structure)?);
        traits.insert(name.to_string(), Arc::clone(&definition));
        debug!(
            target: "traitmix::registry",
            trait_name = name,
            members = definition.len(),
            "Registered trait"
        );
        Ok(definition)
    }

    /// Register a new trait
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyDefined`] if `name` is bound, or
    /// [`Error::TraitStructure`] if `structure` is not an object.
    pub fn define(&self, name: &str, structure: impl Into<Value>) -> Result<TraitHandle> {
        let structure = structure.into();
        self.define_or_lookup(name, Some(&structure))
    }

    /// Look up a registered trait
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchTrait`] if `name` is not bound.
    pub fn lookup(&self, name: &str) -> Result<TraitHandle> {
        trace!(target: "traitmix::registry", trait_name = name, "Looking up trait");
        self.traits
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NoSuchTrait(name.to_string()))
    }

    /// Resolve a reference to a definition
    ///
    /// Names go through [`lookup`](Self::lookup). A definition handle is used
    /// as given when its name is unbound here or bound to that same handle.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchTrait`] for unbound names, [`Error::ForeignDefinition`]
    /// for a handle whose name is bound here to a different definition,
    /// [`Error::NotATrait`] for references that are neither.
    pub fn resolve(&self, reference: &TraitRef) -> Result<TraitHandle> {
        match reference {
            TraitRef::Name(name) => self.lookup(name),
            TraitRef::Definition(def) => match self.traits.read().get(def.name()) {
                Some(bound) if !Arc::ptr_eq(bound, def) => {
                    warn!(
                        target: "traitmix::registry",
                        trait_name = def.name(),
                        "Rejected foreign definition handle"
                    );
                    Err(Error::ForeignDefinition(def.name().to_string()))
                }
                _ => Ok(Arc::clone(def)),
            },
            TraitRef::Invalid(value) => Err(Error::NotATrait(value.clone())),
        }
    }

    /// Check if a name is bound
    pub fn contains(&self, name: &str) -> bool {
        self.traits.read().contains_key(name)
    }

    /// Get all bound names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.traits.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered traits
    pub fn len(&self) -> usize {
        self.traits.read().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.traits.read().is_empty()
    }
}

impl std::fmt::Debug for TraitRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraitRegistry")
            .field("trait_count", &self.len())
            .field("names", &self.names())
            .finish()
    }
}
