//! Error types for trait registration, composition and invocation
//!
//! Every error is raised at the call site that detects it and is meant to
//! propagate: they signal programming mistakes (typos, double registration,
//! misuse), not transient conditions.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

use crate::value::Value;

/// Result type alias for trait operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for trait operations
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup of a trait name that was never registered
    #[error("No such trait defined: '{0}'")]
    NoSuchTrait(String),

    /// Registration under a name that is already bound
    #[error("Trait '{0}' is already defined elsewhere. Look it up by name to access it")]
    AlreadyDefined(String),

    /// Registration with a structure that is not a key-value object
    #[error("Trait structure must be an object, got {0}")]
    TraitStructure(String),

    /// Composition reference that is neither a name nor a definition
    #[error("Not a trait: {0:?}")]
    NotATrait(Value),

    /// Definition handle whose name is bound to a different definition
    #[error("Definition handle for '{0}' does not match the registered trait")]
    ForeignDefinition(String),

    /// Call of a member name that does not resolve
    #[error("No such member: '{0}'")]
    NoSuchMember(String),

    /// Call of a member that is not a method
    #[error("Member '{member}' is not callable (found {actual})")]
    NotCallable {
        /// Member name
        member: String,
        /// Type name of the member found
        actual: String,
    },

    /// Composition with no references while the composer forbids it
    #[error("Composition requires at least one trait")]
    EmptyComposition,

    /// Configuration could not be parsed or validated
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is a lookup of an unregistered trait
    pub fn is_no_such_trait(&self) -> bool {
        matches!(self, Error::NoSuchTrait(_))
    }

    /// Whether this is a rejected redefinition
    pub fn is_already_defined(&self) -> bool {
        matches!(self, Error::AlreadyDefined(_))
    }

    /// Whether this is a rejected, malformed structure
    pub fn is_trait_structure(&self) -> bool {
        matches!(self, Error::TraitStructure(_))
    }

    /// Whether this is a rejected composition reference
    pub fn is_not_a_trait(&self) -> bool {
        matches!(self, Error::NotATrait(_))
    }

    /// Whether this is a handle that disagrees with the registry
    pub fn is_foreign_definition(&self) -> bool {
        matches!(self, Error::ForeignDefinition(_))
    }
}
