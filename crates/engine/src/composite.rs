//! Composite types
//!
//! A composite is the merged member set of one or more traits plus the
//! provenance record of which traits contributed. It is the base that
//! concrete [`DerivedType`](crate::instance::DerivedType)s extend.

use std::collections::HashMap;
use std::sync::Arc;

use traitmix_core::{Composed, MemberAccess, Provenance, Value};

use crate::instance::Instance;

/// Merged members of the composed traits
#[derive(Debug, Clone)]
pub struct CompositeType {
    name: String,
    members: HashMap<String, Value>,
    /// Trait names the composite was built from, in composition order
    pub provenance: Provenance,
}

impl CompositeType {
    pub(crate) fn new(members: HashMap<String, Value>, provenance: Provenance) -> Self {
        let name = provenance.names().join("_");
        CompositeType {
            name,
            members,
            provenance,
        }
    }

    /// Contributing trait names joined with `_`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merged members
    pub fn members(&self) -> &HashMap<String, Value> {
        &self.members
    }

    /// Create an instance of the composite itself, with no derived members
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance::of_composite(Arc::clone(self))
    }
}

impl MemberAccess for CompositeType {
    fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }
}

impl Composed for CompositeType {
    fn provenance(&self) -> Option<&Provenance> {
        Some(&self.provenance)
    }
}
