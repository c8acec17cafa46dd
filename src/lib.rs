//! # Lazy Lifecycle
//!
//! Visibility-aware lazy lifecycle notifications for UI containers.
//!
//! A container that is created while hidden should not pay for its first-time
//! setup until it is shown, and repeated lifecycle churn should never re-fire
//! a notification that is already in effect. [`LazyReconciler`] takes the
//! host's raw signals (created, resumed, paused, view destroyed, visibility
//! changed) in any order and turns them into exactly three deduplicated,
//! ordered callbacks: `on_lazy_create`, `on_lazy_resume` and `on_lazy_pause`.
//!
//! ## Features
//!
//! - **Deferred creation**: `on_lazy_create` waits for the first visible moment
//!   of each view epoch and fires once per epoch
//! - **Latched intent**: a resume received while hidden is replayed when the
//!   container is shown
//! - **Strict pairing**: every `on_lazy_pause` answers an earlier `on_lazy_resume`
//! - **Pure core**: [`LazyState`] returns the owed notifications without any
//!   observer, for hosts that prefer to dispatch themselves
//! - **Caller-owned observers**: reconcilers hold observers weakly and can be
//!   attached or detached at any time
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_lifecycle::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Gallery {
//!     events: Vec<&'static str>,
//! }
//!
//! impl LazyObserver<()> for Gallery {
//!     fn on_lazy_create(&mut self, _: &()) {
//!         self.events.push("create");
//!     }
//!     fn on_lazy_resume(&mut self) {
//!         self.events.push("resume");
//!     }
//!     fn on_lazy_pause(&mut self) {
//!         self.events.push("pause");
//!     }
//! }
//!
//! let gallery = Rc::new(RefCell::new(Gallery::default()));
//! let observer: ObserverRef<()> = gallery.clone();
//! let mut lazy = LazyReconciler::with_observer(&observer);
//!
//! lazy.accept_created(());
//! lazy.accept_resumed();
//! assert!(gallery.borrow().events.is_empty());
//!
//! lazy.accept_visibility_changed(true);
//! lazy.accept_visibility_changed(false);
//! assert_eq!(gallery.borrow().events, ["create", "resume", "pause"]);
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;

pub use config::{ConfigService, ReconcilerConfig};
pub use error::{LazyError, Result};
pub use lifecycle::{
    LazyHost, LazyObserver, LazyReconciler, LazySelfHost, LazyState, LifecycleSignal, Notification,
    ObserverRef,
};

/// Prelude module for convenient imports
///
/// ```
/// use lazy_lifecycle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigService, ReconcilerConfig};
    pub use crate::error::{LazyError, Result};
    pub use crate::lifecycle::{
        LazyHost, LazyObserver, LazyReconciler, LazyState, LifecycleSignal, Notification,
        LazySelfHost, ObserverRef, ReconcilerId, StateSnapshot,
    };
}
