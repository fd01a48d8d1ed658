//! # ObserverSet: ordered registry with lazy expiry
//!
//! [`ObserverSet`] holds non-owning subscriber entries and drives the notify
//! sweep. It is the one place that has to survive structural mutation caused
//! from *inside* a callback: a visited callback may drop the handle keeping
//! itself alive, detach another entry, attach new ones, or notify recursively.
//!
//! ## What it guarantees
//! - Front insertion: delivery order is most-recently-attached first.
//! - An in-progress delivery always completes, even if the callback drops its
//!   own last owning handle mid-call (the resolved strong handle lives until
//!   the visit returns).
//! - Entries detached mid-sweep before their turn are skipped.
//! - Expired entries are never visited; they are purged in one pass after the
//!   full traversal, never from inside it.
//!
//! ## What it does **not** guarantee
//! - Entries attached mid-sweep are not visited in that sweep (they are
//!   absent from the snapshot taken when the sweep began).
//! - `len()` counts expired-but-not-yet-purged entries until the next sweep
//!   or explicit purge.
//!
//! ## Sweep algorithm
//! ```text
//! notify_each(visit):
//!   snapshot ← clone of (id, entry) pairs          (short borrow)
//!   for (id, entry) in snapshot:
//!     id still present?      no → skip             (detached mid-sweep)
//!     entry.resolve()        None → mark, skip     (subscriber destroyed)
//!     visit(live)                                  (no borrow held here)
//!   if marked: remove_expired()                    (deferred cleanup)
//! ```
//! Cleanup is deferred to after the traversal because removing entries while
//! the visit loop is walking them is the iterator-invalidation hazard this
//! registry exists to rule out.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::entry::{EntryId, Resolve};

/// One registered entry: a non-owning subscriber reference tagged with its id.
#[derive(Clone)]
struct Slot<E> {
    id: EntryId,
    entry: E,
}

/// Ordered collection of subscriber entries with identity removal and lazy
/// expired-entry cleanup.
///
/// All methods take `&self`; interior mutability keeps the borrow windows
/// short so callbacks can re-enter the registry freely. No method holds a
/// borrow across a visit.
pub(crate) struct ObserverSet<E> {
    slots: RefCell<VecDeque<Slot<E>>>,
    next_id: Cell<u64>,
}

impl<E> ObserverSet<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: RefCell::new(VecDeque::new()),
            next_id: Cell::new(0),
        }
    }

    /// Inserts an entry at the front and returns its identity token.
    pub(crate) fn insert(&self, entry: E) -> EntryId {
        let id = EntryId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.slots.borrow_mut().push_front(Slot { id, entry });
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, len = self.len(), "entry inserted");
        id
    }

    /// Removes the entry with the given id. No-op when absent.
    pub(crate) fn remove(&self, id: EntryId) {
        self.slots.borrow_mut().retain(|slot| slot.id != id);
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, len = self.len(), "entry removed");
    }

    /// Removes every entry matching `pred`. Used for identity-based detach,
    /// which removes duplicate attachments in one sweep.
    pub(crate) fn remove_where(&self, pred: impl Fn(&E) -> bool) {
        self.slots.borrow_mut().retain(|slot| !pred(&slot.entry));
    }

    /// Number of entries, including expired ones not yet purged.
    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }

    fn contains(&self, id: EntryId) -> bool {
        self.slots.borrow().iter().any(|slot| slot.id == id)
    }
}

impl<E: Resolve> ObserverSet<E> {
    /// Drops every entry whose subscriber no longer exists.
    ///
    /// Callable between sweeps or right after one; never called from inside
    /// a single visit.
    pub(crate) fn remove_expired(&self) {
        let mut slots = self.slots.borrow_mut();
        #[cfg(feature = "tracing")]
        let before = slots.len();
        slots.retain(|slot| slot.entry.resolve().is_some());
        #[cfg(feature = "tracing")]
        tracing::trace!(purged = before - slots.len(), "expired entries purged");
    }
}

impl<E: Resolve + Clone> ObserverSet<E> {
    /// Runs one notify sweep: visits every live entry in registry order,
    /// skips expired and mid-sweep-detached entries, then purges whatever
    /// expired entries the traversal encountered.
    pub(crate) fn notify_each(&self, mut visit: impl FnMut(E::Live)) {
        let snapshot: Vec<Slot<E>> = self.slots.borrow().iter().cloned().collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(entries = snapshot.len(), "notify sweep");

        let mut saw_expired = false;
        for slot in snapshot {
            // Detached since the sweep began: skip without resolving.
            if !self.contains(slot.id) {
                continue;
            }
            match slot.entry.resolve() {
                Some(live) => visit(live),
                None => saw_expired = true,
            }
        }

        if saw_expired {
            self.remove_expired();
        }
    }
}
