//! # Core observer trait
//!
//! `Observe` is the capability a subject needs from a subscriber: accept one
//! payload, run to completion, return. It is the extension point for plugging
//! custom receivers into [`weak::Subject`](crate::weak::Subject).
//!
//! ## Contract
//! - `on_notify` is called synchronously from whatever thread called
//!   `notify`; there is no queue and no worker in between.
//! - Implementations must not panic; a panic unwinds through the in-progress
//!   sweep to the `notify` caller.
//! - Re-entrancy is allowed: an implementation may attach, detach, or notify
//!   the subject it is being called from.

/// Contract for payload observers.
///
/// Implemented by anything that wants deliveries from a
/// [`weak::Subject`](crate::weak::Subject). The subject only ever holds a
/// weak reference to an implementor; dropping every strong reference is a
/// valid way to unsubscribe.
pub trait Observe<P> {
    /// Handle a single payload broadcast by a subject.
    ///
    /// # Parameters
    /// - `payload`: reference to the broadcast value (does not transfer ownership)
    fn on_notify(&self, payload: &P);

    /// Human-readable name (for logs/demos).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
