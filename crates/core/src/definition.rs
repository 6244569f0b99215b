//! Trait definitions
//!
//! A definition is an immutable, named member set. It is created once from a
//! caller-supplied object and shared as a [`TraitHandle`]; the entries are
//! copied on creation, so mutating the source object afterwards never reaches
//! the stored definition.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::object::MemberAccess;
use crate::value::Value;

/// Shared handle to a registered definition
pub type TraitHandle = Arc<TraitDefinition>;

/// Named, immutable bundle of members
#[derive(Debug, Clone)]
pub struct TraitDefinition {
    name: String,
    members: HashMap<String, Value>,
}

impl TraitDefinition {
    /// Build a definition from a trait structure
    ///
    /// # Errors
    ///
    /// Returns [`Error::TraitStructure`] with the received type name if
    /// `structure` is not a `Value::Object`.
    pub fn from_structure(name: impl Into<String>, structure: &Value) -> Result<Self> {
        match structure {
            Value::Object(members) => Ok(TraitDefinition {
                name: name.into(),
                members: members.clone(),
            }),
            other => Err(Error::TraitStructure(other.type_name().to_string())),
        }
    }

    /// Registration name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All members
    pub fn members(&self) -> &HashMap<String, Value> {
        &self.members
    }

    /// Member names, sorted
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the trait carries no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl MemberAccess for TraitDefinition {
    fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }
}

// Identity is the registration name; the registry keeps names unique.
impl PartialEq for TraitDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TraitDefinition {}

impl fmt::Display for TraitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trait({})", self.name)
    }
}
