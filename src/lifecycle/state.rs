//! Pure lazy-state transitions
//!
//! [`LazyState`] folds the host signals into the notifications they owe,
//! without touching any observer. Each transition returns the notifications
//! to emit, in order.
//!
//! # Invariants
//!
//! 1. `create` is owed at most once per epoch (accepted create up to the next
//!    view-destroy), and only while the container is visible.
//! 2. `resume` is never owed before `create` in the same epoch.
//! 3. `resume` and `pause` alternate, starting with `resume`.
//! 4. Outside an epoch nothing is owed, whatever else arrives.
//!
//! The fired flags live inside the epoch, so a view-destroy drops them and
//! the invariants above hold without any bookkeeping.

use super::{LifecycleSignal, Notification};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Epoch<P> {
    payload: P,
    create_fired: bool,
    resume_fired: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase<P> {
    NotCreated,
    Created(Epoch<P>),
}

/// Diagnostic summary of a [`LazyState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub visible: bool,
    pub created: bool,
    pub create_fired: bool,
    pub resume_requested: bool,
    pub resume_fired: bool,
}

/// Lifecycle reconciliation state for one host container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyState<P> {
    visible: bool,
    /// Host-side resume intent, latched between resumed and paused.
    resume_requested: bool,
    phase: Phase<P>,
}

impl<P> Default for LazyState<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> LazyState<P> {
    /// Invisible, not created, no resume intent
    pub fn new() -> Self {
        Self {
            visible: false,
            resume_requested: false,
            phase: Phase::NotCreated,
        }
    }

    /// Apply any signal
    pub fn apply(&mut self, signal: LifecycleSignal<P>) -> Vec<Notification> {
        match signal {
            LifecycleSignal::Created(payload) => self.on_created(payload),
            LifecycleSignal::Resumed => self.on_resumed(),
            LifecycleSignal::Paused => self.on_paused(),
            LifecycleSignal::ViewDestroyed => self.on_view_destroyed(),
            LifecycleSignal::VisibilityChanged(visible) => self.on_visibility_changed(visible),
        }
    }

    /// Open a new epoch. Ignored, payload included, while one is open.
    pub fn on_created(&mut self, payload: P) -> Vec<Notification> {
        if matches!(self.phase, Phase::Created(_)) {
            return Vec::new();
        }

        self.resume_requested = false;
        self.phase = Phase::Created(Epoch {
            payload,
            create_fired: self.visible,
            resume_fired: false,
        });

        if self.visible {
            vec![Notification::Create]
        } else {
            Vec::new()
        }
    }

    pub fn on_resumed(&mut self) -> Vec<Notification> {
        self.resume_requested = true;

        let visible = self.visible;
        match &mut self.phase {
            Phase::Created(epoch) if visible && !epoch.resume_fired => {
                debug_assert!(epoch.create_fired);
                epoch.resume_fired = true;
                vec![Notification::Resume]
            }
            _ => Vec::new(),
        }
    }

    /// Clears resume intent. Only a resume that actually fired gets a pause.
    pub fn on_paused(&mut self) -> Vec<Notification> {
        self.resume_requested = false;

        let visible = self.visible;
        match &mut self.phase {
            Phase::Created(epoch) => {
                let was_fired = std::mem::replace(&mut epoch.resume_fired, false);
                if was_fired && visible {
                    vec![Notification::Pause]
                } else {
                    Vec::new()
                }
            }
            Phase::NotCreated => Vec::new(),
        }
    }

    /// Close the epoch. No pause is synthesized.
    pub fn on_view_destroyed(&mut self) -> Vec<Notification> {
        self.phase = Phase::NotCreated;
        Vec::new()
    }

    pub fn on_visibility_changed(&mut self, visible: bool) -> Vec<Notification> {
        let was_visible = std::mem::replace(&mut self.visible, visible);

        let Phase::Created(epoch) = &mut self.phase else {
            return Vec::new();
        };
        if was_visible == visible {
            return Vec::new();
        }

        let mut owed = Vec::new();
        if visible {
            if !epoch.create_fired {
                epoch.create_fired = true;
                owed.push(Notification::Create);
            }
            if self.resume_requested && !epoch.resume_fired {
                epoch.resume_fired = true;
                owed.push(Notification::Resume);
            }
        } else if self.resume_requested && epoch.resume_fired {
            // Intent stays latched; the next show resumes again.
            epoch.resume_fired = false;
            owed.push(Notification::Pause);
        }
        owed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True from an accepted create until the next view-destroy
    pub fn is_created(&self) -> bool {
        matches!(self.phase, Phase::Created(_))
    }

    /// True once `create` was owed in the current epoch
    pub fn is_create_fired(&self) -> bool {
        matches!(&self.phase, Phase::Created(epoch) if epoch.create_fired)
    }

    /// Host resume intent: resumed and not paused since.
    ///
    /// Survives view-destroy; cleared by the next accepted create.
    pub fn is_resumed(&self) -> bool {
        self.resume_requested
    }

    /// True between a fired `resume` and its matching `pause`
    pub fn is_active(&self) -> bool {
        matches!(&self.phase, Phase::Created(epoch) if epoch.resume_fired)
    }

    /// Payload of the current epoch
    pub fn payload(&self) -> Option<&P> {
        match &self.phase {
            Phase::Created(epoch) => Some(&epoch.payload),
            Phase::NotCreated => None,
        }
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            visible: self.visible,
            created: self.is_created(),
            create_fired: self.is_create_fired(),
            resume_requested: self.resume_requested,
            resume_fired: self.is_active(),
        }
    }
}
