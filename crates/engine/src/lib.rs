//! Composition engine for traitmix
//!
//! This crate provides:
//! - TraitRegistry: write-once name → definition store, with a process-wide instance
//! - Composer: builds composites from ordered trait references
//! - CompositeType, DerivedType, Instance: the types composition produces
//! - Membership queries: is_instance_of_trait, is_instance_of_composite,
//!   has_traits, has_all_traits
//! - ComposerConfig: `traitmix.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composer;
pub mod composite;
pub mod config;
pub mod instance;
pub mod membership;
pub mod registry;

pub use composer::Composer;
pub use composite::CompositeType;
pub use config::{ComposerConfig, ProvenancePolicy, CONFIG_FILE_NAME};
pub use instance::{DerivedType, Instance};
pub use membership::{has_all_traits, has_traits, is_instance_of_composite, is_instance_of_trait};
pub use registry::TraitRegistry;
