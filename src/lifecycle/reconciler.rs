//! Lazy Reconciler
//!
//! Drives a [`LazyState`] from host signals and delivers the resulting
//! notifications to an attached [`LazyObserver`].

use super::{LazyObserver, LazyState, LifecycleSignal, Notification, ObserverRef};
use crate::config::ReconcilerConfig;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Identifies a reconciler in log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReconcilerId(Uuid);

impl ReconcilerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReconcilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type WeakObserver<P> = Weak<RefCell<dyn LazyObserver<P>>>;

/// Turns create/resume/pause/destroy/visibility signals into deduplicated
/// `on_lazy_create`, `on_lazy_resume` and `on_lazy_pause` calls.
///
/// The reconciler outlives view epochs: after a view-destroy it waits for the
/// next create. It only holds a weak reference to its observer, so the
/// caller stays the owner and may attach or detach it at any time.
///
/// Every `accept_*` call runs to completion, observer callbacks included,
/// before it returns. Signals must be serialized by the caller.
///
/// # Example
///
/// ```rust
/// use lazy_lifecycle::lifecycle::{LazyObserver, LazyReconciler, ObserverRef};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct Feed {
///     loaded: bool,
/// }
///
/// impl LazyObserver<String> for Feed {
///     fn on_lazy_create(&mut self, _payload: &String) {
///         self.loaded = true;
///     }
///     fn on_lazy_resume(&mut self) {}
///     fn on_lazy_pause(&mut self) {}
/// }
///
/// let feed = Rc::new(RefCell::new(Feed::default()));
/// let observer: ObserverRef<String> = feed.clone();
/// let mut reconciler = LazyReconciler::with_observer(&observer);
///
/// reconciler.accept_created("saved".to_string());
/// assert!(!feed.borrow().loaded);
///
/// reconciler.accept_visibility_changed(true);
/// assert!(feed.borrow().loaded);
/// ```
pub struct LazyReconciler<P = ()> {
    id: ReconcilerId,
    state: LazyState<P>,
    observer: Option<WeakObserver<P>>,
    config: ReconcilerConfig,
}

impl<P> Default for LazyReconciler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for LazyReconciler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyReconciler")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("has_observer", &self.has_observer())
            .field("config", &self.config)
            .finish()
    }
}

impl<P> LazyReconciler<P> {
    /// Create a reconciler with no observer
    pub fn new() -> Self {
        Self::with_config(ReconcilerConfig::default())
    }

    pub fn with_config(config: ReconcilerConfig) -> Self {
        Self {
            id: ReconcilerId::new(),
            state: LazyState::new(),
            observer: None,
            config,
        }
    }

    /// Create a reconciler already attached to `observer`
    pub fn with_observer(observer: &ObserverRef<P>) -> Self {
        let mut reconciler = Self::new();
        reconciler.attach_observer(observer);
        reconciler
    }

    /// Attach `observer`, replacing any previous one.
    ///
    /// Only a weak reference is kept.
    pub fn attach_observer(&mut self, observer: &ObserverRef<P>) {
        self.observer = Some(Rc::downgrade(observer));
        tracing::trace!(reconciler = %self.id, "observer attached");
    }

    /// Detach the observer. Returns whether a live one was attached.
    ///
    /// State keeps following signals while detached.
    pub fn detach_observer(&mut self) -> bool {
        let was_live = self.has_observer();
        self.observer = None;
        tracing::trace!(reconciler = %self.id, "observer detached");
        was_live
    }

    /// False when detached or when the owner dropped the observer
    pub fn has_observer(&self) -> bool {
        self.live_observer().is_some()
    }

    fn live_observer(&self) -> Option<ObserverRef<P>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }

    pub fn accept_created(&mut self, payload: P) -> Vec<Notification> {
        self.dispatch(LifecycleSignal::Created(payload))
    }

    pub fn accept_resumed(&mut self) -> Vec<Notification> {
        self.dispatch(LifecycleSignal::Resumed)
    }

    pub fn accept_paused(&mut self) -> Vec<Notification> {
        self.dispatch(LifecycleSignal::Paused)
    }

    pub fn accept_view_destroyed(&mut self) -> Vec<Notification> {
        self.dispatch(LifecycleSignal::ViewDestroyed)
    }

    pub fn accept_visibility_changed(&mut self, visible: bool) -> Vec<Notification> {
        self.dispatch(LifecycleSignal::VisibilityChanged(visible))
    }

    /// Accept one signal and deliver what it owes.
    ///
    /// Returns the notifications produced, whether or not they reached an
    /// observer.
    ///
    /// # Panics
    ///
    /// Panics if the observer is already mutably borrowed when a
    /// notification is delivered.
    pub fn dispatch(&mut self, signal: LifecycleSignal<P>) -> Vec<Notification> {
        let name = signal.name();
        let owed = self.state.apply(signal);

        let snapshot = self.state.snapshot();
        tracing::trace!(
            reconciler = %self.id,
            visible = snapshot.visible,
            created = snapshot.created,
            create_fired = snapshot.create_fired,
            resume_requested = snapshot.resume_requested,
            resume_fired = snapshot.resume_fired,
            "accepted {} ({} owed)",
            name,
            owed.len()
        );

        self.deliver(&owed);
        owed
    }

    /// Accept signals in order, returning everything they produced
    pub fn replay<I>(&mut self, signals: I) -> Vec<Notification>
    where
        I: IntoIterator<Item = LifecycleSignal<P>>,
    {
        let mut produced = Vec::new();
        for signal in signals {
            produced.extend(self.dispatch(signal));
        }
        produced
    }

    fn deliver(&self, owed: &[Notification]) {
        if owed.is_empty() {
            return;
        }

        let observer = self.live_observer();
        for &notification in owed {
            if self.config.log_enabled {
                tracing::debug!(
                    reconciler = %self.id,
                    label = ?self.config.label,
                    observer = observer.is_some(),
                    "lazy {}",
                    notification
                );
            }

            let Some(observer) = &observer else {
                tracing::trace!(reconciler = %self.id, "lazy {} undelivered", notification);
                continue;
            };

            let mut observer = observer.borrow_mut();
            match notification {
                Notification::Create => match self.state.payload() {
                    Some(payload) => observer.on_lazy_create(payload),
                    None => tracing::warn!(
                        reconciler = %self.id,
                        "lazy create owed outside a created epoch"
                    ),
                },
                Notification::Resume => observer.on_lazy_resume(),
                Notification::Pause => observer.on_lazy_pause(),
            }
        }
    }

    /// True from an accepted create until the next view-destroy
    pub fn is_created(&self) -> bool {
        self.state.is_created()
    }

    /// True between a produced resume and its matching pause, delivered or not
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Host resume intent, see [`LazyState::is_resumed`]
    pub fn is_resumed(&self) -> bool {
        self.state.is_resumed()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn state(&self) -> &LazyState<P> {
        &self.state
    }

    pub fn id(&self) -> ReconcilerId {
        self.id
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }
}
