//! The free functions bound to the process-wide registry.
//!
//! Names here carry a `Facade` prefix: the global registry is shared by every
//! test in this binary and never cleared.

use std::sync::Arc;

use crate::common::*;
use serde_json::json;
use traitmix::{define_trait, has_traits, is_instance_of_trait, lookup_trait, trait_definition, traits};

#[test]
fn define_then_lookup() {
    init_tracing();
    let defined = define_trait("FacadeHasProp", Value::from(json!({"value": TEST_VALUE}))).unwrap();
    let looked_up = trait_definition("FacadeHasProp", None).unwrap();

    assert!(Arc::ptr_eq(&defined, &looked_up));
    assert!(Arc::ptr_eq(&lookup_trait("FacadeHasProp").unwrap(), &defined));
}

#[test]
fn redefinition_through_facade_fails() {
    trait_definition("FacadeOnce", Some(Value::from(json!({"v": 1})))).unwrap();
    let err = trait_definition("FacadeOnce", Some(Value::from(json!({"v": 2})))).unwrap_err();
    assert!(err.is_already_defined());
}

#[test]
fn unknown_and_malformed_through_facade() {
    assert!(lookup_trait("FacadeNeverDefined").unwrap_err().is_no_such_trait());
    assert!(trait_definition("FacadeMalformed", Some(Value::from(json!([1, 2, 3]))))
        .unwrap_err()
        .is_trait_structure());
    assert!(define_trait("FacadeMalformed", Value::from(json!({"ok": true}))).is_ok());
}

#[test]
fn compose_and_query_through_facade() {
    let has_method = define_trait(
        "FacadeHasMethod",
        Value::object([("method", Value::from(Method::new(|_, _| Ok(Value::Bool(true)))))]),
    )
    .unwrap();
    define_trait("FacadeHasValue", Value::from(json!({"value": TEST_VALUE}))).unwrap();

    let base = Arc::new(traits(["FacadeHasValue", "FacadeHasMethod"]).unwrap());
    let instance = Arc::new(DerivedType::new("TestClass", base)).instantiate();

    assert_eq!(instance.get("value"), Some(&Value::from(TEST_VALUE)));
    assert_eq!(instance.call("method", &[]).unwrap(), Value::Bool(true));
    assert!(is_instance_of_trait(&instance, &has_method));
    assert!(has_traits(&instance, ["FacadeHasValue", "FacadeHasMethod"]));
    assert!(traits(["FacadeUndefined"]).unwrap_err().is_no_such_trait());
    assert!(traits([Value::Int(42)]).unwrap_err().is_not_a_trait());
}
