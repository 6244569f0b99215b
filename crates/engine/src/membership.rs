//! Membership queries over provenance
//!
//! Every query reads the candidate's provenance through [`Composed`], so the
//! same functions answer for instances, derived types, composites and plain
//! values. A value without provenance is treated as composed from nothing.
//!
//! [`has_traits`] answers "were this value's traits all drawn from the given
//! list" (`provenance ⊆ query`). [`has_all_traits`] answers the other
//! question, "does this value carry at least these traits"
//! (`query ⊆ provenance`). The two differ and are not interchangeable.

use std::collections::HashSet;

use traitmix_core::{Composed, Provenance, TraitDefinition, TraitRef};

use crate::composite::CompositeType;

static EMPTY: Provenance = Provenance::EMPTY;

fn provenance_of<V: Composed + ?Sized>(value: &V) -> &Provenance {
    value.provenance().unwrap_or(&EMPTY)
}

fn query_names(refs: &[TraitRef]) -> HashSet<&str> {
    // Invalid references name no trait and add nothing to the query.
    refs.iter().filter_map(TraitRef::canonical_name).collect()
}

/// Whether `value` was composed from `definition`
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use traitmix_core::Value;
/// use traitmix_engine::{is_instance_of_trait, Composer, DerivedType, TraitRegistry};
///
/// let registry = TraitRegistry::new();
/// let has_prop = registry.define("HasProp", Value::object([("value", Value::Int(1))])).unwrap();
/// let other = registry.define("Other", Value::object([("x", Value::Null)])).unwrap();
///
/// let base = Arc::new(Composer::new(&registry).compose(["HasProp"]).unwrap());
/// let instance = Arc::new(DerivedType::new("TestClass", base)).instantiate();
///
/// assert!(is_instance_of_trait(&instance, &has_prop));
/// assert!(!is_instance_of_trait(&instance, &other));
/// ```
pub fn is_instance_of_trait<V: Composed + ?Sized>(value: &V, definition: &TraitDefinition) -> bool {
    provenance_of(value).contains(definition.name())
}

/// Whether `value` carries every trait `composite` was built from
///
/// Mirrors testing an instance against a freshly composed type: an instance
/// of a type extending `Traits("A", "B")` is an instance of `Traits("A")`.
/// A composite built from no traits has no instances.
pub fn is_instance_of_composite<V: Composed + ?Sized>(value: &V, composite: &CompositeType) -> bool {
    !composite.provenance.is_empty()
        && provenance_of(value).contains_all(composite.provenance.iter())
}

/// Whether every trait `value` was composed from appears in `refs`
///
/// Names pass through, definitions contribute their stored name. The
/// containment direction is `provenance ⊆ refs`: an instance of
/// `Traits("HasProp")` satisfies `has_traits(&i, ["HasProp", "HasMethod"])`
/// but not an empty query, while a value with no provenance satisfies any
/// query, the empty one included.
pub fn has_traits<V, I, R>(value: &V, refs: I) -> bool
where
    V: Composed + ?Sized,
    I: IntoIterator<Item = R>,
    R: Into<TraitRef>,
{
    let refs: Vec<TraitRef> = refs.into_iter().map(Into::into).collect();
    provenance_of(value).is_subset_of(&query_names(&refs))
}

/// Whether `value` was composed from at least every trait in `refs`
///
/// The `refs ⊆ provenance` reading. Invalid references can never be
/// satisfied, so any of them makes the answer false.
pub fn has_all_traits<V, I, R>(value: &V, refs: I) -> bool
where
    V: Composed + ?Sized,
    I: IntoIterator<Item = R>,
    R: Into<TraitRef>,
{
    let provenance = provenance_of(value);
    refs.into_iter()
        .map(Into::<TraitRef>::into)
        .all(|r| match r.canonical_name() {
            Some(name) => provenance.contains(name),
            None => false,
        })
}
