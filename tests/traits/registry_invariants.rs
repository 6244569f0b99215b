//! Registry invariants: write-once keys, pure lookups, check order.

use std::sync::Arc;

use crate::common::*;
use proptest::prelude::*;
use serde_json::json;
use traitmix::TraitDefinition;

#[test]
fn lookup_returns_registered_members() {
    let registry = fixture_registry();
    let def = registry.define_or_lookup("HasProp", None).unwrap();
    assert_eq!(def.name(), "HasProp");
    assert_eq!(def.members().get("value"), Some(&Value::from(TEST_VALUE)));
}

#[test]
fn repeated_lookups_do_not_mutate() {
    let registry = fixture_registry();
    let before = registry.names();
    let first = registry.lookup("HasProp").unwrap();
    for _ in 0..5 {
        let again = registry.lookup("HasProp").unwrap();
        assert_eq!(again.members(), first.members());
    }
    assert_eq!(registry.names(), before);
}

#[test]
fn lookup_of_unknown_name_fails() {
    let registry = fixture_registry();
    match registry.define_or_lookup("Undefined", None) {
        Err(Error::NoSuchTrait(name)) => assert_eq!(name, "Undefined"),
        other => panic!("expected NoSuchTrait, got {:?}", other),
    }
}

#[test]
fn redefinition_fails_and_keeps_first() {
    let registry = fixture_registry();
    let err = registry
        .define("HasProp", Value::from(json!({"value": "replacement"})))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyDefined(ref n) if n == "HasProp"));

    let kept = registry.lookup("HasProp").unwrap();
    assert_eq!(kept.members().get("value"), Some(&Value::from(TEST_VALUE)));
}

#[test]
fn malformed_structures_rejected_without_side_effects() {
    let registry = fixture_registry();

    let err = registry.define("X", Value::from(json!([1, 2, 3]))).unwrap_err();
    assert!(matches!(err, Error::TraitStructure(ref t) if t == "Array"));

    let err = registry.define("X", "a string").unwrap_err();
    assert!(matches!(err, Error::TraitStructure(ref t) if t == "String"));

    assert!(!registry.contains("X"));
    registry
        .define("X", Value::from(json!({"x": true})))
        .expect("X must still be definable");
}

#[test]
fn redefinition_takes_precedence_over_malformed_structure() {
    let registry = fixture_registry();
    let err = registry.define("HasProp", Value::Int(1)).unwrap_err();
    assert!(err.is_already_defined());
}

#[test]
fn source_object_mutation_does_not_leak() {
    let registry = TraitRegistry::new();
    let mut source = Value::from(json!({"v": 1}));
    registry.define("Snapshot", source.clone()).unwrap();

    if let Value::Object(map) = &mut source {
        map.insert("v".to_string(), Value::Int(99));
    }
    assert_eq!(
        registry.lookup("Snapshot").unwrap().members().get("v"),
        Some(&Value::Int(1))
    );
}

#[test]
fn registries_are_isolated() {
    let a = TraitRegistry::new();
    let b = TraitRegistry::new();
    a.define("Shared", Value::from(json!({"from": "a"}))).unwrap();
    b.define("Shared", Value::from(json!({"from": "b"}))).unwrap();

    assert_eq!(
        a.lookup("Shared").unwrap().members().get("from"),
        Some(&Value::from("a"))
    );
    assert_eq!(
        b.lookup("Shared").unwrap().members().get("from"),
        Some(&Value::from("b"))
    );
}

#[test]
fn handle_reusing_a_bound_name_is_rejected() {
    let registry = fixture_registry();
    let shadow = Arc::new(
        TraitDefinition::from_structure("HasProp", &Value::from(json!({"value": 666}))).unwrap(),
    );

    let err = Composer::new(&registry)
        .compose([TraitRef::from(&shadow), TraitRef::from("HasMethod")])
        .unwrap_err();
    assert!(matches!(err, Error::ForeignDefinition(ref n) if n == "HasProp"));

    let real = registry.lookup("HasProp").unwrap();
    assert!(!Arc::ptr_eq(&real, &shadow));
    assert_eq!(real.members().get("value"), Some(&Value::from(TEST_VALUE)));

    // The registered handle itself still composes.
    let composite = Composer::new(&registry)
        .compose([TraitRef::from(&real)])
        .unwrap();
    assert_eq!(composite.provenance.names(), &["HasProp"]);
}

proptest! {
    #[test]
    fn second_definition_always_fails(
        name in "[A-Za-z][A-Za-z0-9_]{0,12}",
        first in 0i64..1000,
        second in 0i64..1000,
    ) {
        let registry = TraitRegistry::new();
        registry.define(&name, Value::object([("v", Value::Int(first))])).unwrap();

        let err = registry
            .define(&name, Value::object([("v", Value::Int(second))]))
            .unwrap_err();
        prop_assert!(err.is_already_defined());

        let kept = registry.lookup(&name).unwrap();
        prop_assert_eq!(kept.members().get("v"), Some(&Value::Int(first)));
        prop_assert_eq!(registry.len(), 1);
    }
}
