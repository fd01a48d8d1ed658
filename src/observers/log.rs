//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints every delivered payload to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and examples.
//!
//! ## Output format
//! ```text
//! [notify] payload=42
//! [notify] payload="second message"
//! ```

use std::fmt::Debug;

use super::Observe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints each payload to stdout for
/// debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Observe`] for
/// structured logging or metrics collection.
pub struct LogObserver;

impl<P: Debug> Observe<P> for LogObserver {
    fn on_notify(&self, payload: &P) {
        println!("[notify] payload={payload:?}");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
