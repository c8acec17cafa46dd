//! Lazy Lifecycle Module
//!
//! Reconciles a host container's raw lifecycle signals with its visibility,
//! so that expensive setup and activation only happen once the container is
//! actually shown.
//!
//! # Signals and notifications
//!
//! ```text
//! host                         reconciler                 observer
//! ----                         ----------                 --------
//! created(payload)  ─┐
//! resumed           ─┤         ┌──────────────┐
//! paused            ─┼────────▶│  LazyState   │────────▶  on_lazy_create(payload)
//! view destroyed    ─┤         │  (per epoch) │────────▶  on_lazy_resume()
//! visibility(bool)  ─┘         └──────────────┘────────▶  on_lazy_pause()
//! ```
//!
//! # Epoch states
//!
//! ```text
//! NotCreated ──created──▶ Created{pending} ──shown──▶ Created{fired, idle}
//!     ▲                                                   │       ▲
//!     │                                resumed ∧ shown    ▼       │ paused ∨ hidden
//!     └──────────── view destroyed ─────────────── Created{fired, active}
//! ```
//!
//! Created-while-visible skips `pending`. Nothing is emitted in `NotCreated`.
//!
//! # Example
//!
//! ```rust,ignore
//! use lazy_lifecycle::lifecycle::{LazyObserver, LazyReconciler, ObserverRef};
//!
//! let observer: ObserverRef<SavedState> = pane.clone();
//! let mut lazy = LazyReconciler::with_observer(&observer);
//!
//! lazy.accept_created(saved_state);       // hidden: deferred
//! lazy.accept_resumed();                  // hidden: latched
//! lazy.accept_visibility_changed(true);   // on_lazy_create, on_lazy_resume
//! lazy.accept_visibility_changed(false);  // on_lazy_pause
//! ```

mod reconciler;
mod signal;
mod state;
mod traits;

pub use reconciler::{LazyReconciler, ReconcilerId};
pub use signal::{LifecycleSignal, Notification};
pub use state::{LazyState, StateSnapshot};
pub use traits::{LazyHost, LazyObserver, LazySelfHost, ObserverRef};
