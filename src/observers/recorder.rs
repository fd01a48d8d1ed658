//! # Payload-history recorder
//!
//! [`Recorder`] keeps every payload it is notified with. Tests and demos
//! assert on the recorded history instead of on printed output.

use std::cell::RefCell;
use std::rc::Rc;

use super::Observe;

/// Stateful observer that records every delivered payload in order.
///
/// ## Example
/// ```rust
/// use std::rc::Rc;
/// use observant::{weak::Subject, Recorder};
///
/// let subject = Subject::new(String::from("hello"));
/// let recorder = Recorder::rc();
/// subject.attach(&recorder);
///
/// subject.notify();
/// subject.create_message(String::from("again"));
///
/// assert_eq!(recorder.history(), ["hello", "again"]);
/// assert_eq!(recorder.last().as_deref(), Some("again"));
/// ```
#[derive(Debug)]
pub struct Recorder<P> {
    history: RefCell<Vec<P>>,
}

impl<P> Recorder<P> {
    pub fn new() -> Self {
        Self {
            history: RefCell::new(Vec::new()),
        }
    }

    /// Creates a recorder behind a shared handle, ready to attach.
    #[must_use]
    pub fn rc() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Number of deliveries received so far.
    pub fn delivery_count(&self) -> usize {
        self.history.borrow().len()
    }

    /// Drains and returns the recorded history.
    pub fn take(&self) -> Vec<P> {
        self.history.borrow_mut().drain(..).collect()
    }
}

impl<P: Clone> Recorder<P> {
    /// The full recorded history, oldest first.
    pub fn history(&self) -> Vec<P> {
        self.history.borrow().clone()
    }

    /// The most recently received payload, if any.
    pub fn last(&self) -> Option<P> {
        self.history.borrow().last().cloned()
    }
}

impl<P> Default for Recorder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> Observe<P> for Recorder<P> {
    fn on_notify(&self, payload: &P) {
        self.history.borrow_mut().push(payload.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
