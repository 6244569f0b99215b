//! Object seams shared by composites, derived types and instances
//!
//! - [`MemberAccess`]: member lookup by name, the receiver type of methods
//! - [`Composed`]: access to the provenance record used by membership queries
//!
//! Plain values implement both: an `Object` exposes its entries as members,
//! and no plain value carries provenance.

use crate::provenance::Provenance;
use crate::value::Value;

/// Member lookup by name
pub trait MemberAccess {
    /// Resolve a member, following whatever delegation the implementor has
    fn member(&self, name: &str) -> Option<&Value>;

    /// Whether `name` resolves to any member
    fn has_member(&self, name: &str) -> bool {
        self.member(name).is_some()
    }
}

/// Values that may have been built from traits
pub trait Composed {
    /// Ordered trait names this value was composed from
    ///
    /// `None` means the value never went through composition; membership
    /// queries treat that as an empty record.
    fn provenance(&self) -> Option<&Provenance>;
}

impl MemberAccess for Value {
    fn member(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(name))
    }
}

impl Composed for Value {
    fn provenance(&self) -> Option<&Provenance> {
        None
    }
}

impl<T: Composed + ?Sized> Composed for std::sync::Arc<T> {
    fn provenance(&self) -> Option<&Provenance> {
        (**self).provenance()
    }
}
