//! # Receiving side of the notification contract.
//!
//! This module provides the [`Observe`] trait and built-in implementations
//! for handling payloads broadcast by the subjects in [`crate::subjects`].
//!
//! ## Observer types
//! - **Passive observers** - react to each payload (printing, forwarding, side effects)
//! - **Stateful observers** - record payloads for later inspection ([`Recorder`])
//!
//! ## Implementing custom observers
//! ```rust
//! use observant::Observe;
//!
//! struct Threshold;
//!
//! impl Observe<i64> for Threshold {
//!     fn on_notify(&self, payload: &i64) {
//!         if *payload > 100 {
//!             // raise an alert...
//!         }
//!     }
//! }
//! ```

mod observe;
mod recorder;

pub use observe::Observe;
pub use recorder::Recorder;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogObserver;
