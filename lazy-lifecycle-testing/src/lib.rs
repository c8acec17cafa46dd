//! Test support for `lazy-lifecycle`
//!
//! - [`RecordingObserver`] keeps every notification it receives
//! - [`arb_signal`] / [`arb_signals`] generate arbitrary host signal traces

use lazy_lifecycle::lifecycle::{LazyObserver, LifecycleSignal, Notification, ObserverRef};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// A notification as the observer saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded<P> {
    Create(P),
    Resume,
    Pause,
}

impl<P> Recorded<P> {
    pub fn notification(&self) -> Notification {
        match self {
            Recorded::Create(_) => Notification::Create,
            Recorded::Resume => Notification::Resume,
            Recorded::Pause => Notification::Pause,
        }
    }
}

/// Cumulative notification counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub create: usize,
    pub resume: usize,
    pub pause: usize,
}

impl From<(usize, usize, usize)> for Counts {
    fn from((create, resume, pause): (usize, usize, usize)) -> Self {
        Self {
            create,
            resume,
            pause,
        }
    }
}

/// Observer that records everything, in delivery order
#[derive(Debug, Clone)]
pub struct RecordingObserver<P> {
    events: Vec<Recorded<P>>,
}

impl<P> Default for RecordingObserver<P> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<P> RecordingObserver<P> {
    pub fn events(&self) -> &[Recorded<P>] {
        &self.events
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.events.iter().map(Recorded::notification).collect()
    }

    pub fn counts(&self) -> Counts {
        let mut counts = Counts::default();
        for event in &self.events {
            match event {
                Recorded::Create(_) => counts.create += 1,
                Recorded::Resume => counts.resume += 1,
                Recorded::Pause => counts.pause += 1,
            }
        }
        counts
    }

    /// Drain the recorded events
    pub fn take(&mut self) -> Vec<Recorded<P>> {
        std::mem::take(&mut self.events)
    }
}

impl<P: Clone> LazyObserver<P> for RecordingObserver<P> {
    fn on_lazy_create(&mut self, payload: &P) {
        self.events.push(Recorded::Create(payload.clone()));
    }

    fn on_lazy_resume(&mut self) {
        self.events.push(Recorded::Resume);
    }

    fn on_lazy_pause(&mut self) {
        self.events.push(Recorded::Pause);
    }
}

/// A fresh recorder plus the handle to attach to a reconciler.
///
/// Keep the first value alive; reconcilers only hold the observer weakly.
pub fn recording_observer<P: Clone + 'static>()
-> (Rc<RefCell<RecordingObserver<P>>>, ObserverRef<P>) {
    let recorder = Rc::new(RefCell::new(RecordingObserver::default()));
    let observer: ObserverRef<P> = recorder.clone();
    (recorder, observer)
}

/// Any host signal; created payloads are small integers so they can be
/// traced back to the create that carried them
pub fn arb_signal() -> impl Strategy<Value = LifecycleSignal<u8>> {
    prop_oneof![
        any::<u8>().prop_map(LifecycleSignal::Created),
        Just(LifecycleSignal::Resumed),
        Just(LifecycleSignal::Paused),
        Just(LifecycleSignal::ViewDestroyed),
        any::<bool>().prop_map(LifecycleSignal::VisibilityChanged),
    ]
}

pub fn arb_signals(max_len: usize) -> impl Strategy<Value = Vec<LifecycleSignal<u8>>> {
    prop::collection::vec(arb_signal(), 0..=max_len)
}
