//! # observant
//!
//! **Observant** is a lightweight subject/observer notification library for Rust.
//!
//! It provides synchronous publish/subscribe primitives with safe handling of
//! subscriber lifetime: a subscriber may be destroyed while still registered,
//! and the subject never invokes a callback on, or holds a dangling reference
//! to, a destroyed subscriber. Subscribers never have to unregister explicitly
//! before going away.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!      caller                         Subject
//!        │                        ┌──────────────────────────────┐
//!        ├─ make_observer(f) ────►│  ObserverSet (registry)      │
//!        ├─ attach(observer) ────►│   front-insertion order      │
//!        │                        │   weak entries, tagged by id │
//!        ├─ notify(payload) ─────►│                              │
//!        │                        │  sweep:                      │
//!        │                        │    snapshot entries          │
//!        │                        │    skip detached ids         │
//!        │                        │    resolve weak ──► live? ───┼──► on_notify(payload)
//!        │                        │                └── expired ──┼──► mark, skip
//!        │                        │    purge marked (after pass) │
//!        │                        └──────────────────────────────┘
//! ```
//!
//! ### Lifetime strategies
//! The same registry machinery backs three answers to the question
//! "when does a subscription end?":
//!
//! | Module      | Registration             | Deregistration                       |
//! |-------------|--------------------------|--------------------------------------|
//! | [`closure`] | `make_observer(f)`       | drop the returned [`ObserverHandle`] |
//! | [`raii`]    | `Observer::new(subject)` | drop the `Observer`                  |
//! | [`weak`]    | `attach(&rc_observer)`   | `detach`, or just drop the `Rc`      |
//!
//! [`ObserverHandle`]: closure::ObserverHandle
//!
//! All three deliver synchronously: the thread that calls `notify` runs every
//! live callback in registry order (most recently attached first) and returns
//! once the sweep is complete. Expired entries discovered during a sweep are
//! skipped and purged after the traversal. Callbacks may attach, detach, drop
//! handles (including their own), or notify recursively; the registry
//! tolerates all of it.
//!
//! All types are `Rc`-based and intentionally `!Send`: callbacks run on the
//! thread that calls `notify`, and there is no cross-thread story.
//!
//! ## Features
//! | Area           | Description                                       | Key types / traits                                         |
//! |----------------|---------------------------------------------------|------------------------------------------------------------|
//! | **Subjects**   | Three subject flavors, one per lifetime strategy. | [`closure::Subject`], [`raii::Subject`], [`weak::Subject`] |
//! | **Observers**  | Receiving-side capability and built-in helpers.   | [`Observe`], [`Recorder`]                                  |
//! | **Handles**    | Shared ownership token for closure subscriptions. | [`closure::ObserverHandle`]                                |
//! | **RAII guard** | Observer that deregisters itself on drop.         | [`raii::Observer`]                                         |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogObserver`] _(demo/reference only)_.
//! - `tracing`: emits `trace!` events on attach/detach/purge and notify sweeps.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use observant::closure::Subject;
//!
//! let subject: Subject<(i32, &str)> = Subject::new();
//!
//! // No observers yet: notifying is a no-op.
//! subject.notify(&(0, "nobody listening"));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let handle = subject.make_observer(move |(n, _): &(i32, &str)| {
//!     sink.borrow_mut().push(*n);
//! });
//!
//! subject.notify(&(1, "one"));
//! assert_eq!(subject.observer_count(), 1);
//!
//! // Dropping the handle is the unsubscribe: the next sweep skips and
//! // purges the expired entry.
//! drop(handle);
//! subject.notify(&(2, "two"));
//!
//! assert_eq!(*seen.borrow(), vec![1]);
//! assert_eq!(subject.observer_count(), 0);
//! ```

mod observers;
mod registry;
mod subjects;

// ---- Public re-exports ----

pub use observers::{Observe, Recorder};
pub use subjects::{closure, raii, weak};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
