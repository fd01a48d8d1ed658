//! # Weak-reference subjects
//!
//! [`Subject`] holds only weak references to its observers. Whoever owns both
//! ends wires them together with [`Subject::attach`] and, optionally,
//! [`Subject::detach`] - but detaching is never required: an observer whose
//! last strong reference is dropped simply expires, and the next notify sweep
//! skips it and purges the entry afterwards.
//!
//! The subject never extends an observer's lifetime. During a sweep each
//! entry is upgraded to a temporary strong handle that lives exactly as long
//! as that observer's single `on_notify` call.
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use observant::{weak::Subject, Recorder};
//!
//! let subject = Subject::new(42);
//! let recorder = Recorder::rc();
//! subject.attach(&recorder);
//!
//! subject.notify();
//! assert_eq!(recorder.history(), vec![42]);
//!
//! // Dropping the observer is a valid unsubscribe.
//! drop(recorder);
//! subject.notify(); // skips and purges the expired entry
//! assert_eq!(subject.observer_count(), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::observers::Observe;
use crate::registry::ObserverSet;

/// Publisher holding non-owning references to [`Observe`] implementors.
///
/// Stores the most recent payload; [`Subject::notify`] broadcasts it and
/// [`Subject::create_message`] replaces it first.
pub struct Subject<P: 'static> {
    registry: ObserverSet<Weak<dyn Observe<P>>>,
    last: RefCell<P>,
}

impl<P> Subject<P> {
    pub fn new(initial: P) -> Self {
        Self {
            registry: ObserverSet::new(),
            last: RefCell::new(initial),
        }
    }

    /// Registers an observer. No uniqueness check: attaching the same
    /// observer twice yields two deliveries per notify.
    pub fn attach<O>(&self, observer: &Rc<O>)
    where
        O: Observe<P> + 'static,
    {
        let weak = Rc::downgrade(observer);
        let entry: Weak<dyn Observe<P>> = weak;
        self.registry.insert(entry);
    }

    /// Removes every entry for this observer (duplicates included), sweeping
    /// already-expired entries in the same pass. Idempotent; detaching an
    /// observer that was never attached is a no-op.
    pub fn detach<O>(&self, observer: &Rc<O>)
    where
        O: Observe<P> + 'static,
    {
        let target = Rc::as_ptr(observer).cast::<()>();
        self.registry.remove_where(|entry| match entry.upgrade() {
            Some(live) => Rc::as_ptr(&live).cast::<()>() == target,
            None => true,
        });
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

impl<P: Clone> Subject<P> {
    /// Delivers the stored payload to every live observer, most recently
    /// attached first, then purges whatever expired entries the sweep found.
    ///
    /// The payload is snapshotted once per sweep: a callback that calls
    /// [`Subject::create_message`] mid-sweep changes what later sweeps
    /// deliver, not the remainder of this one.
    pub fn notify(&self) {
        let payload = self.last.borrow().clone();
        self.registry.notify_each(|observer| observer.on_notify(&payload));
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

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::observers::Recorder;

    #[test]
    fn test_notify_without_observers_is_noop() {
        let subject = Subject::new((42, "x"));
        subject.notify();
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_attach_notify_detach_cycle() {
        let subject = Subject::new(1u32);
        let recorder = Recorder::rc();

        subject.attach(&recorder);
        subject.notify();
        assert_eq!(recorder.history(), vec![1]);

        subject.detach(&recorder);
        subject.notify();
        assert_eq!(recorder.history(), vec![1], "detached observer gets nothing");
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_duplicate_attach_delivers_twice() {
        let subject = Subject::new(5u32);
        let recorder = Recorder::rc();

        subject.attach(&recorder);
        subject.attach(&recorder);
        subject.notify();
        assert_eq!(
            recorder.delivery_count(),
            2,
            "two entries mean two deliveries"
        );

        // Detach removes every entry for this identity.
        subject.detach(&recorder);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_detach_is_idempotent_and_total() {
        let subject = Subject::new(0u32);
        let attached = Recorder::rc();
        let stranger: Rc<Recorder<u32>> = Recorder::rc();

        subject.attach(&attached);
        subject.detach(&stranger); // never attached: no-op
        assert_eq!(subject.observer_count(), 1);

        subject.detach(&attached);
        subject.detach(&attached); // second detach: no-op
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_dropped_observer_skipped_then_purged() {
        let subject = Subject::new(9u32);
        let keeper = Recorder::rc();
        let doomed = Recorder::rc();

        subject.attach(&keeper);
        subject.attach(&doomed);
        drop(doomed);

        assert_eq!(subject.observer_count(), 2, "purge is lazy, not eager");
        subject.notify();
        assert_eq!(keeper.history(), vec![9]);
        assert_eq!(subject.observer_count(), 1, "sweep purged the expired entry");
    }

    #[test]
    fn test_delivery_order_is_most_recent_first() {
        struct Tagger {
            tag: &'static str,
            log: Rc<RefCell<Vec<&'static str>>>,
        }
        impl Observe<u32> for Tagger {
            fn on_notify(&self, _payload: &u32) {
                self.log.borrow_mut().push(self.tag);
            }
        }

        let subject = Subject::new(0u32);
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut taggers = Vec::new();
        for tag in ["a", "b", "c"] {
            let tagger = Rc::new(Tagger {
                tag,
                log: Rc::clone(&order),
            });
            subject.attach(&tagger);
            taggers.push(tagger);
        }

        subject.notify();
        assert_eq!(*order.borrow(), vec!["c", "b", "a"]);
        drop(taggers);
    }

    #[test]
    fn test_create_message_stores_then_broadcasts() {
        let subject = Subject::new(String::from("hello"));
        let recorder = Recorder::rc();
        subject.attach(&recorder);

        subject.create_message(String::from("test message"));
        assert_eq!(recorder.last().as_deref(), Some("test message"));
        assert_eq!(subject.last_payload(), "test message");
    }

    #[test]
    fn test_self_detach_completes_current_call() {
        struct SelfDetacher {
            subject: Rc<Subject<u32>>,
            me: RefCell<std::rc::Weak<SelfDetacher>>,
            calls: Cell<u32>,
        }
        impl Observe<u32> for SelfDetacher {
            fn on_notify(&self, _payload: &u32) {
                self.calls.set(self.calls.get() + 1);
                if let Some(me) = self.me.borrow().upgrade() {
                    self.subject.detach(&me);
                }
            }
        }

        let subject = Rc::new(Subject::new(0u32));
        let detacher = Rc::new(SelfDetacher {
            subject: Rc::clone(&subject),
            me: RefCell::new(std::rc::Weak::new()),
            calls: Cell::new(0),
        });
        *detacher.me.borrow_mut() = Rc::downgrade(&detacher);
        subject.attach(&detacher);

        subject.notify();
        assert_eq!(detacher.calls.get(), 1, "in-progress call completes");
        assert_eq!(subject.observer_count(), 0);

        subject.notify();
        assert_eq!(detacher.calls.get(), 1, "no delivery after self-detach");
    }

    #[test]
    fn test_mid_sweep_create_message_keeps_sweep_payload() {
        // An observer that republishes mid-sweep triggers a full nested
        // sweep with the new payload; the outer sweep then finishes with the
        // payload it started with.
        struct Mutator {
            subject: Rc<Subject<String>>,
            fired: Cell<bool>,
        }
        impl Observe<String> for Mutator {
            fn on_notify(&self, _payload: &String) {
                if !self.fired.replace(true) {
                    self.subject.create_message(String::from("new"));
                }
            }
        }

        let subject = Rc::new(Subject::new(String::from("old")));
        let recorder = Recorder::rc();
        subject.attach(&recorder); // attached first: visited second

        let mutator = Rc::new(Mutator {
            subject: Rc::clone(&subject),
            fired: Cell::new(false),
        });
        subject.attach(&mutator); // attached second: visited first

        subject.notify();
        assert_eq!(
            recorder.history(),
            ["new", "old"],
            "nested sweep delivers the new payload, outer sweep finishes with its snapshot"
        );
        assert_eq!(subject.last_payload(), "new");
    }

    #[test]
    fn test_detach_also_sweeps_expired_entries() {
        let subject = Subject::new(0u32);
        let doomed = Recorder::rc();
        let other = Recorder::rc();

        subject.attach(&doomed);
        subject.attach(&other);
        drop(doomed);
        assert_eq!(subject.observer_count(), 2);

        // Detaching an unrelated observer also purges the expired entry.
        subject.detach(&other);
        assert_eq!(subject.observer_count(), 0);
    }
}
