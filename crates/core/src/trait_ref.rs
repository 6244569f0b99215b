//! References to traits
//!
//! Composition and membership queries accept traits either by name or by
//! definition handle. Anything else is kept as [`TraitRef::Invalid`] so the
//! operation that receives it can report the offending value.

use std::sync::Arc;

use crate::definition::TraitHandle;
use crate::value::Value;

/// A trait given by name, by handle, or not a trait at all
#[derive(Debug, Clone, PartialEq)]
pub enum TraitRef {
    /// Registered name, resolved through a registry
    Name(String),
    /// Definition used directly
    Definition(TraitHandle),
    /// Neither a name nor a definition
    Invalid(Value),
}

impl TraitRef {
    /// The trait name this reference stands for
    ///
    /// `None` for invalid references.
    pub fn canonical_name(&self) -> Option<&str> {
        match self {
            TraitRef::Name(name) => Some(name),
            TraitRef::Definition(def) => Some(def.name()),
            TraitRef::Invalid(_) => None,
        }
    }

    /// Whether this reference can name a trait at all
    pub fn is_valid(&self) -> bool {
        !matches!(self, TraitRef::Invalid(_))
    }
}

impl From<&str> for TraitRef {
    fn from(name: &str) -> Self {
        TraitRef::Name(name.to_string())
    }
}

impl From<String> for TraitRef {
    fn from(name: String) -> Self {
        TraitRef::Name(name)
    }
}

impl From<&String> for TraitRef {
    fn from(name: &String) -> Self {
        TraitRef::Name(name.clone())
    }
}

impl From<TraitHandle> for TraitRef {
    fn from(def: TraitHandle) -> Self {
        TraitRef::Definition(def)
    }
}

impl From<&TraitHandle> for TraitRef {
    fn from(def: &TraitHandle) -> Self {
        TraitRef::Definition(Arc::clone(def))
    }
}

impl From<&TraitRef> for TraitRef {
    fn from(reference: &TraitRef) -> Self {
        reference.clone()
    }
}

impl From<Value> for TraitRef {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => TraitRef::Name(name),
            other => TraitRef::Invalid(other),
        }
    }
}
