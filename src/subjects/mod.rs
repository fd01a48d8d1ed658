//! Subject flavors: one publishing type per subscriber-lifetime strategy.
//!
//! Each submodule answers "when does a subscription end?" differently while
//! sharing the registry machinery in [`crate::registry`]:
//!
//! - [`closure`]: the subject owns callbacks behind shared cells; the caller
//!   unsubscribes by dropping the returned handle;
//! - [`raii`]: the observer owns a strong reference to the subject and
//!   deregisters itself when dropped;
//! - [`weak`]: the subject holds only weak references; destroyed observers
//!   are discovered during notification and purged lazily.

pub mod closure;
pub mod raii;
pub mod weak;
