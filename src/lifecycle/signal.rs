//! Inbound host signals and outbound lazy notifications

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// A raw lifecycle signal delivered by the host container.
///
/// Hosts may record these and feed them back through
/// [`LazyReconciler::replay`](super::LazyReconciler::replay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleSignal<P> {
    /// The container (re)built its view. Carries the host payload handed to
    /// `on_lazy_create`.
    Created(P),
    Resumed,
    Paused,
    ViewDestroyed,
    VisibilityChanged(bool),
}

impl<P> LifecycleSignal<P> {
    /// Short name used in log records
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Resumed => "resumed",
            Self::Paused => "paused",
            Self::ViewDestroyed => "view_destroyed",
            Self::VisibilityChanged(true) => "visible",
            Self::VisibilityChanged(false) => "hidden",
        }
    }
}

/// A lazy notification owed to the observer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Notification {
    Create,
    Resume,
    Pause,
}
