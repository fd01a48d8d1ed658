//! # Mutual-reference RAII subjects
//!
//! [`Observer::new`] attaches to a [`Subject`] on construction and detaches
//! in `Drop`. The ownership runs one way: the observer *owns* a strong
//! reference to the subject (so the subject is guaranteed to still be alive
//! when the observer deregisters itself during teardown), while the subject's
//! registry holds only a weak, identity-tagged view of the observer's state.
//! No reference cycle can form, and destroying a subject before its observers
//! is harmless - the observer's strong reference keeps the subject's storage
//! alive until the last observer has let go.
//!
//! Attach and detach are not public on this subject: construction is the
//! attach, drop is the detach. That makes the misordered-teardown hazard
//! (deregistering against a dead subject) unrepresentable instead of merely
//! discouraged.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use observant::raii::{Observer, Subject};
//!
//! let subject = Rc::new(Subject::new(String::from("first")));
//! let observer = Observer::new(&subject);
//!
//! subject.notify();
//! assert_eq!(observer.last().as_deref(), Some("first"));
//!
//! subject.create_message(String::from("second"));
//! assert_eq!(observer.last().as_deref(), Some("second"));
//!
//! drop(observer); // deregisters itself
//! subject.notify(); // delivers to nobody, safely
//! assert_eq!(subject.observer_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::registry::{EntryId, ObserverSet};

/// Per-observer state the subject delivers into.
struct ObserverState<P: 'static> {
    received: RefCell<Option<P>>,
    hook: Option<Box<dyn Fn(&P)>>,
}

impl<P: Clone> ObserverState<P> {
    fn deliver(&self, payload: &P) {
        if let Some(hook) = &self.hook {
            hook(payload);
        }
        *self.received.borrow_mut() = Some(payload.clone());
    }
}

/// Publisher whose subscribers deregister themselves on drop.
///
/// Holds the most recent payload; [`Subject::notify`] rebroadcasts it and
/// [`Subject::create_message`] replaces it first.
pub struct Subject<P: 'static> {
    registry: ObserverSet<Weak<ObserverState<P>>>,
    last: RefCell<P>,
}

impl<P> Subject<P> {
    pub fn new(initial: P) -> Self {
        Self {
            registry: ObserverSet::new(),
            last: RefCell::new(initial),
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }

    pub fn has_observers(&self) -> bool {
        !self.registry.is_empty()
    }

    fn register(&self, state: &Rc<ObserverState<P>>) -> EntryId {
        self.registry.insert(Rc::downgrade(state))
    }

    fn release(&self, id: EntryId) {
        self.registry.remove(id);
    }
}

impl<P: Clone> Subject<P> {
    /// Delivers the stored payload to every registered observer, most
    /// recently attached first. Safe on an empty registry.
    pub fn notify(&self) {
        let payload = self.last.borrow().clone();
        self.registry.notify_each(|state| state.deliver(&payload));
    }

    /// Stores `payload` as the current message, then broadcasts it.
    pub fn create_message(&self, payload: P) {
        *self.last.borrow_mut() = payload;
        self.notify();
    }

    /// The payload the next [`Subject::notify`] will broadcast.
    pub fn last_payload(&self) -> P {
        self.last.borrow().clone()
    }
}

impl<P: Default> Default for Subject<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

/// Subscription guard: registered while alive, deregistered on drop.
///
/// Owns a strong reference to its [`Subject`], which pins the subject's
/// storage until every observer has been dropped - the detach in `Drop`
/// therefore always runs against a live subject.
pub struct Observer<P: 'static> {
    subject: Rc<Subject<P>>,
    state: Rc<ObserverState<P>>,
    id: EntryId,
}

impl<P> Observer<P> {
    /// Attaches a new observer to `subject`.
    pub fn new(subject: &Rc<Subject<P>>) -> Self {
        Self::build(subject, None)
    }

    /// Attaches a new observer that also runs `hook` on every delivery.
    ///
    /// The hook is for observable side effects (printing, counting); the
    /// received payload is recorded either way and available via
    /// [`Observer::last`].
    pub fn with_hook<F>(subject: &Rc<Subject<P>>, hook: F) -> Self
    where
        F: Fn(&P) + 'static,
    {
        Self::build(subject, Some(Box::new(hook)))
    }

    fn build(subject: &Rc<Subject<P>>, hook: Option<Box<dyn Fn(&P)>>) -> Self {
        let state = Rc::new(ObserverState {
            received: RefCell::new(None),
            hook,
        });
        let id = subject.register(&state);
        Self {
            subject: Rc::clone(subject),
            state,
            id,
        }
    }
}

impl<P: Clone> Observer<P> {
    /// The most recently received payload, if any delivery has happened.
    pub fn last(&self) -> Option<P> {
        self.state.received.borrow().clone()
    }
}

impl<P> Drop for Observer<P> {
    fn drop(&mut self) {
        // The subject is necessarily still alive here: this observer owns a
        // strong reference to it, released only after this detach.
        self.subject.release(self.id);
    }
}
