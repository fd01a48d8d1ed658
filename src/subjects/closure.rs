//! # Owning-closure subjects
//!
//! [`Subject`] registers bare callbacks. [`Subject::make_observer`] wraps a
//! closure in a shared cell, keeps a *non-owning* observation of it in the
//! registry, and hands the cell back to the caller as an [`ObserverHandle`].
//! The handle is the subscription: as long as at least one clone of it is
//! alive, `notify` calls the closure; once the last clone is dropped, the
//! next sweep treats the entry as expired and purges it.
//!
//! There is no explicit unsubscribe operation, and none is needed.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use observant::closure::Subject;
//!
//! let subject: Subject<i32> = Subject::new();
//! let hits = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&hits);
//! let handle = subject.make_observer(move |n: &i32| counter.set(counter.get() + n));
//!
//! subject.notify(&2);
//! subject.notify(&3);
//! assert_eq!(hits.get(), 5);
//!
//! drop(handle); // unsubscribes
//! subject.notify(&100);
//! assert_eq!(hits.get(), 5);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::registry::ObserverSet;

/// Callback signature for one subject: receives the payload by reference.
type Callback<P> = dyn Fn(&P);

/// Shared ownership token for one registered callback.
///
/// Returned by [`Subject::make_observer`]. Cloning shares ownership of the
/// subscription; dropping the last clone is the deregistration signal. The
/// wrapped callback is not invokable through the handle - only the subject
/// calls it, during `notify`.
pub struct ObserverHandle<P: 'static> {
    cell: Rc<Callback<P>>,
}

impl<P> Clone for ObserverHandle<P> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<P> fmt::Debug for ObserverHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("owners", &Rc::strong_count(&self.cell))
            .finish()
    }
}

/// Publisher that owns callbacks behind caller-held handles.
pub struct Subject<P: 'static> {
    registry: ObserverSet<std::rc::Weak<Callback<P>>>,
}

impl<P> Subject<P> {
    pub fn new() -> Self {
        Self {
            registry: ObserverSet::new(),
        }
    }

    /// Registers `f` and returns the handle that keeps the subscription
    /// alive. This is the only way to register; releasing every clone of the
    /// handle is the only way to deregister.
    #[must_use = "dropping the handle immediately cancels the subscription"]
    pub fn make_observer<F>(&self, f: F) -> ObserverHandle<P>
    where
        F: Fn(&P) + 'static,
    {
        let cell: Rc<Callback<P>> = Rc::new(f);
        self.registry.insert(Rc::downgrade(&cell));
        ObserverHandle { cell }
    }

    /// Delivers `payload` to every live callback, most recently registered
    /// first, then purges entries whose handles were dropped.
    ///
    /// Tolerates an empty registry, callbacks that drop their own handle
    /// mid-call (the in-progress call completes; no later call happens), and
    /// callbacks that register new observers (delivered from the next sweep
    /// on).
    pub fn notify(&self, payload: &P) {
        self.registry.notify_each(|cb| (*cb)(payload));
    }

    /// Number of registered entries, including expired ones not yet purged
    /// by a sweep.
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }

    pub fn has_observers(&self) -> bool {
        !self.registry.is_empty()
    }
}

impl<P> Default for Subject<P> {
    fn default() -> Self {
        Self::new()
    }
}
