//! Trait composition integration suite
//!
//! Each module checks one area against fresh registries, except
//! `global_facade`, which goes through the process-wide registry and so uses
//! names no other test registers.

#[path = "../common/mod.rs"]
mod common;

mod global_facade;
mod logging;
mod membership;
mod registry_invariants;
