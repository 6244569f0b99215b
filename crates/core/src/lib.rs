//! Core types for traitmix
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum for trait members (data and behavior)
//! - Method: Callable behavior member
//! - TraitDefinition: Named, immutable member set
//! - TraitRef: A trait given by name or by definition handle
//! - Provenance: Ordered record of contributing trait names
//! - MemberAccess / Composed: Seams for member lookup and provenance access
//! - Error: Error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod definition;
pub mod error;
pub mod method;
pub mod object;
pub mod provenance;
pub mod trait_ref;
pub mod value;

pub use definition::{TraitDefinition, TraitHandle};
pub use error::{Error, Result};
pub use method::Method;
pub use object::{Composed, MemberAccess};
pub use provenance::Provenance;
pub use trait_ref::TraitRef;
pub use value::Value;
