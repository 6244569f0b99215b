//! Derived types and instances
//!
//! A [`DerivedType`] extends a composite with members of its own, the way a
//! concrete class extends `Traits(...)`. An [`Instance`] carries its own
//! fields on top of its type.
//!
//! Member lookup walks, in order:
//! 1. instance fields
//! 2. derived type members
//! 3. composite members
//!
//! Provenance always comes from the composite at the bottom of the chain.

use std::collections::HashMap;
use std::sync::Arc;

use traitmix_core::{Composed, Error, MemberAccess, Provenance, Result, Value};

use crate::composite::CompositeType;

/// Concrete type extending a composite
#[derive(Debug, Clone)]
pub struct DerivedType {
    name: String,
    base: Arc<CompositeType>,
    members: HashMap<String, Value>,
}

impl DerivedType {
    /// Create a type named `name` extending `base`
    pub fn new(name: impl Into<String>, base: Arc<CompositeType>) -> Self {
        DerivedType {
            name: name.into(),
            base,
            members: HashMap::new(),
        }
    }

    /// Add a member that shadows any same-named composite member
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The composite this type extends
    pub fn base(&self) -> &Arc<CompositeType> {
        &self.base
    }

    /// Members declared on this type (not the inherited ones)
    pub fn own_members(&self) -> &HashMap<String, Value> {
        &self.members
    }

    /// Create an instance with no fields of its own
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        Instance {
            origin: Origin::Derived(Arc::clone(self)),
            fields: HashMap::new(),
        }
    }
}

impl MemberAccess for DerivedType {
    fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name).or_else(|| self.base.member(name))
    }
}

impl Composed for DerivedType {
    fn provenance(&self) -> Option<&Provenance> {
        self.base.provenance()
    }
}

#[derive(Debug, Clone)]
enum Origin {
    Composite(Arc<CompositeType>),
    Derived(Arc<DerivedType>),
}

/// A value created from a derived type or directly from a composite
#[derive(Debug, Clone)]
pub struct Instance {
    origin: Origin,
    fields: HashMap<String, Value>,
}

impl Instance {
    pub(crate) fn of_composite(composite: Arc<CompositeType>) -> Self {
        Instance {
            origin: Origin::Composite(composite),
            fields: HashMap::new(),
        }
    }

    /// Name of the type this instance was created from
    pub fn type_name(&self) -> &str {
        match &self.origin {
            Origin::Composite(c) => c.name(),
            Origin::Derived(d) => d.name(),
        }
    }

    /// Resolve a member through fields, type and composite
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.member(name)
    }

    /// Set an own field, shadowing the type's member of the same name
    ///
    /// Returns the previous own field, if any.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Fields set on this instance
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Call a method member with this instance as the receiver
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchMember`] if `name` does not resolve,
    /// [`Error::NotCallable`] if it resolves to data, or whatever the method
    /// itself returns.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.member(name) {
            Some(Value::Method(method)) => method.invoke(self, args),
            Some(other) => Err(Error::NotCallable {
                member: name.to_string(),
                actual: other.type_name().to_string(),
            }),
            None => Err(Error::NoSuchMember(name.to_string())),
        }
    }
}

impl MemberAccess for Instance {
    fn member(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).or_else(|| match &self.origin {
            Origin::Composite(c) => c.member(name),
            Origin::Derived(d) => d.member(name),
        })
    }
}

impl Composed for Instance {
    fn provenance(&self) -> Option<&Provenance> {
        match &self.origin {
            Origin::Composite(c) => c.provenance(),
            Origin::Derived(d) => d.provenance(),
        }
    }
}
