//! Entry identity and liveness resolution.
//!
//! A registry entry is a non-owning reference to a subscriber plus an
//! [`EntryId`] tag. The tag, not the reference, is what identity checks
//! compare: it stays meaningful even after the subscriber behind the entry
//! has been destroyed, which is exactly when a dangling-reference comparison
//! would be unsound.

use std::rc::{Rc, Weak};

/// Identity token for a single registry entry.
///
/// Ids are allocated from a per-registry counter and never reused, so a
/// duplicate attachment of the same subscriber produces two distinguishable
/// entries (and two deliveries per sweep).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Liveness seam between the registry and a concrete subscriber reference.
///
/// `resolve` either yields a temporary strong handle (the subscriber is
/// alive) or `None` (the subscriber has been destroyed and the entry is
/// expired). The strong handle is dropped as soon as the single visit it was
/// resolved for returns; the registry never extends a subscriber's lifetime
/// past that.
pub(crate) trait Resolve {
    /// Temporary strong handle valid for one visit.
    type Live;

    /// Attempts to resolve a live subscriber reference.
    fn resolve(&self) -> Option<Self::Live>;
}

impl<T: ?Sized> Resolve for Weak<T> {
    type Live = Rc<T>;

    fn resolve(&self) -> Option<Rc<T>> {
        self.upgrade()
    }
}
