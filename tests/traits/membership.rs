//! Membership: single-trait instance tests and the multi-trait queries.

use std::sync::Arc;

use crate::common::*;
use traitmix::{
    has_all_traits, has_traits, is_instance_of_composite, is_instance_of_trait, Composed,
};

#[test]
fn works_like_instanceof() {
    let registry = fixture_registry();
    let instance = instance_of(&registry, &["HasProp"]);
    let composer = Composer::new(&registry);

    assert!(is_instance_of_composite(&instance, &composer.compose(["HasProp"]).unwrap()));
    assert!(is_instance_of_trait(&instance, &registry.lookup("HasProp").unwrap()));
    assert!(!is_instance_of_trait(&instance, &registry.lookup("HasMethod").unwrap()));
}

#[test]
fn nothing_is_an_instance_of_an_empty_composite() {
    let registry = fixture_registry();
    let empty = Composer::new(&registry)
        .compose(Vec::<TraitRef>::new())
        .unwrap();

    assert!(!is_instance_of_composite(&Value::Int(3), &empty));
    assert!(!is_instance_of_composite(&instance_of(&registry, &["HasProp"]), &empty));
    assert!(!is_instance_of_composite(&instance_of(&registry, &[]), &empty));
}

#[test]
fn reports_every_contributor_and_nothing_else() {
    let registry = fixture_registry();
    let instance = instance_of(&registry, &["HasProp", "HasMethod"]);

    assert!(is_instance_of_trait(&instance, &registry.lookup("HasProp").unwrap()));
    assert!(is_instance_of_trait(&instance, &registry.lookup("HasMethod").unwrap()));
    assert!(!is_instance_of_trait(&instance, &registry.lookup("Other").unwrap()));
}

#[test]
fn types_can_be_tested_directly() {
    let registry = fixture_registry();
    let base = Arc::new(Composer::new(&registry).compose(["HasMethod"]).unwrap());
    let ty = Arc::new(DerivedType::new("TestClass", Arc::clone(&base)));
    let has_method = registry.lookup("HasMethod").unwrap();

    assert!(is_instance_of_trait(&base, &has_method));
    assert!(is_instance_of_trait(&ty, &has_method));
    assert!(is_instance_of_trait(&ty.instantiate(), &has_method));
}

#[test]
fn has_traits_checks_provenance_is_within_query() {
    let registry = fixture_registry();
    let instance = instance_of(&registry, &["HasProp"]);

    assert!(has_traits(&instance, ["HasProp", "HasMethod"]));
    assert!(has_traits(&instance, ["HasProp"]));
    assert!(!has_traits(&instance, Vec::<TraitRef>::new()));
    assert!(!has_traits(&instance, ["Other"]));
}

#[test]
fn has_traits_mixes_names_and_definitions() {
    let registry = fixture_registry();
    let instance = instance_of(&registry, &["HasProp", "HasMethod"]);
    let has_method = registry.lookup("HasMethod").unwrap();

    assert!(has_traits(&instance, [TraitRef::from("HasProp"), TraitRef::from(&has_method)]));
    assert!(!has_traits(&instance, [TraitRef::from(&has_method)]));
}

#[test]
fn plain_values_satisfy_has_traits_vacuously() {
    let plain = Value::object([("value", Value::from(TEST_VALUE))]);
    assert!(plain.provenance().is_none());
    assert!(has_traits(&plain, Vec::<TraitRef>::new()));
    assert!(has_traits(&plain, ["HasProp"]));
}

#[test]
fn has_all_traits_is_the_superset_reading() {
    let registry = fixture_registry();
    let instance = instance_of(&registry, &["HasProp"]);

    // The two predicates disagree on this pair in both directions.
    assert!(has_traits(&instance, ["HasProp", "HasMethod"]));
    assert!(!has_all_traits(&instance, ["HasProp", "HasMethod"]));

    let wide = instance_of(&registry, &["HasProp", "HasMethod"]);
    assert!(!has_traits(&wide, ["HasProp"]));
    assert!(has_all_traits(&wide, ["HasProp"]));
}
