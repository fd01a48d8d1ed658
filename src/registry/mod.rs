//! Notification registry: entry bookkeeping and the sweep algorithm.
//!
//! This module contains the machinery shared by all subject flavors. None of
//! it is public API; subjects in [`crate::subjects`] wrap it.
//!
//! Internal modules:
//! - [`entry`]: entry identity tokens and the liveness/resolution seam;
//! - [`set`]: [`ObserverSet`], the ordered registry with lazy expiry.

mod entry;
mod set;

pub(crate) use entry::EntryId;
pub(crate) use set::ObserverSet;
