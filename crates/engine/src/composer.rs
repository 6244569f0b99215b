//! Trait composition
//!
//! Builds a fresh [`CompositeType`] from an ordered list of trait references.
//! Members are copied, never linked: each definition's members are written
//! into the composite's member set left to right, so a later trait overwrites
//! same-named members from earlier ones.
//!
//! Composition only reads the registry. Nothing is registered and nothing is
//! cached; composing the same references twice yields two independent
//! composites.

use std::collections::HashMap;
use tracing::{debug, warn};

use traitmix_core::{Error, Provenance, Result, TraitRef};

use crate::composite::CompositeType;
use crate::config::{ComposerConfig, ProvenancePolicy};
use crate::registry::TraitRegistry;

/// Composes traits resolved through a registry
#[derive(Debug, Clone, Copy)]
pub struct Composer<'r> {
    registry: &'r TraitRegistry,
    config: ComposerConfig,
}

impl<'r> Composer<'r> {
    /// Create a composer with the default configuration
    pub fn new(registry: &'r TraitRegistry) -> Self {
        Self::with_config(registry, ComposerConfig::default())
    }

    /// Create a composer with an explicit configuration
    pub fn with_config(registry: &'r TraitRegistry, config: ComposerConfig) -> Self {
        Composer { registry, config }
    }

    /// The active configuration
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose the referenced traits into a new composite
    ///
    /// References are resolved left to right and the first failure aborts the
    /// composition.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSuchTrait`] for an unregistered name
    /// - [`Error::ForeignDefinition`] for a definition handle that disagrees
    ///   with the registry's binding of its name
    /// - [`Error::NotATrait`] for a reference that is neither a name nor a
    ///   definition
    /// - [`Error::EmptyComposition`] for an empty list when the configuration
    ///   forbids it
    pub fn compose<I, R>(&self, refs: I) -> Result<CompositeType>
    where
        I: IntoIterator<Item = R>,
        R: Into<TraitRef>,
    {
        let definitions = refs
            .into_iter()
            .map(|r| self.registry.resolve(&r.into()))
            .collect::<Result<Vec<_>>>()?;

        if definitions.is_empty() && !self.config.allow_empty {
            return Err(Error::EmptyComposition);
        }

        let mut members = HashMap::new();
        let mut provenance = Provenance::new();
        for definition in &definitions {
            for (name, value) in definition.members() {
                members.insert(name.clone(), value.clone());
            }
            provenance.push(definition.name());
        }

        if provenance.has_duplicates() {
            match self.config.provenance {
                ProvenancePolicy::KeepDuplicates => {
                    warn!(
                        target: "traitmix::compose",
                        %provenance,
                        "Trait listed more than once in composition"
                    );
                }
                ProvenancePolicy::FirstOccurrence => {
                    provenance = provenance.deduplicated();
                }
            }
        }

        debug!(
            target: "traitmix::compose",
            %provenance,
            members = members.len(),
            "Composed traits"
        );
        Ok(CompositeType::new(members, provenance))
    }
}
