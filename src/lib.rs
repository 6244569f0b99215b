//! traitmix - runtime composition of named behavior bundles
//!
//! Traits are named, immutable member sets registered once. A composite
//! merges several traits' members (last listed wins) and records which traits
//! contributed; types extending the composite, and their instances, can then
//! be tested for trait membership.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use traitmix::{define_trait, has_traits, traits, DerivedType, Method, Value};
//!
//! define_trait("Doc_HasProp", Value::object([("value", Value::from("this is value"))]))?;
//! define_trait(
//!     "Doc_HasMethod",
//!     Value::object([("method", Value::from(Method::new(|_, _| Ok(Value::Bool(true)))))]),
//! )?;
//!
//! let base = Arc::new(traits(["Doc_HasProp", "Doc_HasMethod"])?);
//! let test_class = Arc::new(DerivedType::new("TestClass", base));
//! let instance = test_class.instantiate();
//!
//! assert_eq!(instance.get("value"), Some(&Value::from("this is value")));
//! assert_eq!(instance.call("method", &[])?, Value::Bool(true));
//! assert!(has_traits(&instance, ["Doc_HasProp", "Doc_HasMethod"]));
//! # Ok::<(), traitmix::Error>(())
//! ```
//!
//! # Architecture
//!
//! The free functions here are bound to the process-wide registry, which
//! lives as long as the process. Code that needs isolation (tests, plugins,
//! anything that registers names dynamically) should own a
//! [`TraitRegistry`] and go through a [`Composer`] instead.

pub use traitmix_core::{
    Composed, Error, MemberAccess, Method, Provenance, Result, TraitDefinition, TraitHandle,
    TraitRef, Value,
};
pub use traitmix_engine::{
    has_all_traits, has_traits, is_instance_of_composite, is_instance_of_trait, Composer,
    ComposerConfig, CompositeType, DerivedType, Instance, ProvenancePolicy, TraitRegistry,
    CONFIG_FILE_NAME,
};

/// Define a trait in the process-wide registry, or look it up when
/// `structure` is `None`
///
/// See [`TraitRegistry::define_or_lookup`] for the order of checks.
pub fn trait_definition(name: &str, structure: Option<Value>) -> Result<TraitHandle> {
    TraitRegistry::global().define_or_lookup(name, structure.as_ref())
}

/// Register a trait in the process-wide registry
pub fn define_trait(name: &str, structure: impl Into<Value>) -> Result<TraitHandle> {
    TraitRegistry::global().define(name, structure)
}

/// Look up a trait in the process-wide registry
pub fn lookup_trait(name: &str) -> Result<TraitHandle> {
    TraitRegistry::global().lookup(name)
}

/// Compose traits from the process-wide registry with the default
/// configuration
pub fn traits<I, R>(refs: I) -> Result<CompositeType>
where
    I: IntoIterator<Item = R>,
    R: Into<TraitRef>,
{
    Composer::new(TraitRegistry::global()).compose(refs)
}
