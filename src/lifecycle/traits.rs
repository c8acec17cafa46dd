//! Lazy lifecycle traits
//!
//! [`LazyObserver`] is the receiving end of a reconciler. [`LazyHost`] is
//! the glue a host container implements to forward its raw lifecycle
//! callbacks. [`LazySelfHost`] covers the host that is its own observer.

use super::{LazyReconciler, Notification};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the deduplicated lazy notifications
///
/// Implementors put their expensive first-time setup in
/// [`on_lazy_create`](LazyObserver::on_lazy_create) and start/stop work in
/// the resume/pause pair.
///
/// # Guarantees
///
/// Within one created epoch:
/// - `on_lazy_create` is called once, and only while the container is visible
/// - `on_lazy_resume` is never called before `on_lazy_create`
/// - `on_lazy_resume` and `on_lazy_pause` strictly alternate
pub trait LazyObserver<P> {
    /// The container is created and visible for the first time in this epoch
    fn on_lazy_create(&mut self, payload: &P);

    /// The container is resumed and visible
    fn on_lazy_resume(&mut self);

    /// A previously delivered resume no longer holds
    fn on_lazy_pause(&mut self);
}

/// Caller-owned observer handle.
///
/// Reconcilers only keep a `Weak` to it.
pub type ObserverRef<P> = Rc<RefCell<dyn LazyObserver<P>>>;

/// Forwards a host container's raw lifecycle callbacks to its reconciler
///
/// Implement [`lazy_reconciler`](LazyHost::lazy_reconciler) and call the
/// `host_*` methods from the matching platform callbacks.
///
/// # Example
///
/// ```rust
/// use lazy_lifecycle::lifecycle::{LazyHost, LazyObserver, LazyReconciler, ObserverRef};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Pane {
///     lazy: LazyReconciler,
/// }
///
/// impl LazyHost<()> for Pane {
///     fn lazy_reconciler(&mut self) -> &mut LazyReconciler {
///         &mut self.lazy
///     }
/// }
///
/// struct Loader(u32);
///
/// impl LazyObserver<()> for Loader {
///     fn on_lazy_create(&mut self, _: &()) {
///         self.0 += 1;
///     }
///     fn on_lazy_resume(&mut self) {}
///     fn on_lazy_pause(&mut self) {}
/// }
///
/// let loader = Rc::new(RefCell::new(Loader(0)));
/// let observer: ObserverRef<()> = loader.clone();
///
/// let mut pane = Pane { lazy: LazyReconciler::new() };
/// pane.host_attached(&observer);
/// pane.host_container_created(());
/// pane.host_visibility_changed(true);
/// pane.host_detached();
///
/// assert_eq!(loader.borrow().0, 1);
/// ```
pub trait LazyHost<P> {
    fn lazy_reconciler(&mut self) -> &mut LazyReconciler<P>;

    /// The host object came to life; start delivering to `observer`
    fn host_attached(&mut self, observer: &ObserverRef<P>) {
        self.lazy_reconciler().attach_observer(observer);
    }

    /// The host object is going away for good; stop delivering
    fn host_detached(&mut self) {
        self.lazy_reconciler().detach_observer();
    }

    fn host_container_created(&mut self, payload: P) -> Vec<Notification> {
        self.lazy_reconciler().accept_created(payload)
    }

    fn host_resumed(&mut self) -> Vec<Notification> {
        self.lazy_reconciler().accept_resumed()
    }

    fn host_paused(&mut self) -> Vec<Notification> {
        self.lazy_reconciler().accept_paused()
    }

    fn host_view_destroyed(&mut self) -> Vec<Notification> {
        self.lazy_reconciler().accept_view_destroyed()
    }

    fn host_visibility_changed(&mut self, visible: bool) -> Vec<Notification> {
        self.lazy_reconciler().accept_visibility_changed(visible)
    }
}

/// A host that observes itself
///
/// Attaching a host as its own observer would make the reconciler borrow the
/// host's `RefCell` while the host is already mutably borrowed to forward the
/// signal. A self-observing host therefore never attaches itself. Instead it
/// calls the `container_*` methods, which forward like their `host_*`
/// counterparts and then hand the owed notifications to the host's own
/// [`LazyObserver`] methods, in order. Any other attached observer still
/// receives them through the reconciler first.
///
/// Implemented for every type that is both a [`LazyHost`] and a
/// [`LazyObserver`].
pub trait LazySelfHost<P: Clone>: LazyHost<P> + LazyObserver<P> {
    fn container_created(&mut self, payload: P) -> Vec<Notification> {
        let owed = self.host_container_created(payload);
        self.notify_self(&owed);
        owed
    }

    fn container_resumed(&mut self) -> Vec<Notification> {
        let owed = self.host_resumed();
        self.notify_self(&owed);
        owed
    }

    fn container_paused(&mut self) -> Vec<Notification> {
        let owed = self.host_paused();
        self.notify_self(&owed);
        owed
    }

    fn container_view_destroyed(&mut self) -> Vec<Notification> {
        let owed = self.host_view_destroyed();
        self.notify_self(&owed);
        owed
    }

    fn container_visibility_changed(&mut self, visible: bool) -> Vec<Notification> {
        let owed = self.host_visibility_changed(visible);
        self.notify_self(&owed);
        owed
    }

    /// Delivers `owed` to this host's own observer methods
    fn notify_self(&mut self, owed: &[Notification]) {
        for notification in owed {
            match notification {
                Notification::Create => {
                    let payload = self.lazy_reconciler().state().payload().cloned();
                    match payload {
                        Some(payload) => self.on_lazy_create(&payload),
                        None => tracing::warn!("create owed outside a created epoch; skipped"),
                    }
                }
                Notification::Resume => self.on_lazy_resume(),
                Notification::Pause => self.on_lazy_pause(),
            }
        }
    }
}

impl<P: Clone, T: LazyHost<P> + LazyObserver<P>> LazySelfHost<P> for T {}
