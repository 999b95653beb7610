//! Foreground/background tracking for an application made of screens.
//!
//! Each screen reports when it starts and stops. The app is in the
//! foreground while at least one screen is started. Moving from one screen
//! to the next starts the new one before stopping the old one, so the count
//! never drops to zero in between. A rotation, however, stops before it
//! starts again; callers should delay [`ForegroundTracker::activity_stopped`]
//! by [`BACKGROUND_DEBOUNCE`] to ride over that gap.
//!
//! The tracker is an ordinary value: create one per application and pass it
//! where it is needed.

use crate::core::{State, StateMachine};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Recommended delay between a screen stopping and reporting it.
pub const BACKGROUND_DEBOUNCE: Duration = Duration::from_millis(2000);

/// Receives foreground/background changes.
///
/// Called after the tracker has released its locks, so a listener may query
/// or drive the tracker it is registered with. Notifications for changes
/// racing on different threads may arrive in either order.
pub trait PresenceListener: Send + Sync {
    fn moved_to_foreground(&self);
    fn moved_to_background(&self);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Presence {
    Foreground,
    Background,
}

impl State for Presence {
    fn name(&self) -> &str {
        match self {
            Presence::Foreground => "Foreground",
            Presence::Background => "Background",
        }
    }
}

/// Counts started screens and reports when the app changes presence.
///
/// Safe to share between threads; each call is atomic with respect to the
/// others.
pub struct ForegroundTracker {
    started: Mutex<usize>,
    machine: StateMachine<Presence>,
    listener: Arc<dyn PresenceListener>,
}

impl ForegroundTracker {
    pub fn new(listener: Arc<dyn PresenceListener>) -> Self {
        Self {
            started: Mutex::new(0),
            machine: StateMachine::new(),
            listener,
        }
    }

    /// A screen became visible.
    pub fn activity_started(&self) {
        let changed = {
            let mut started = self.started.lock().unwrap_or_else(PoisonError::into_inner);
            *started += 1;
            (*started == 1).then(|| self.enter(Presence::Foreground))
        };
        self.notify(changed);
    }

    /// A screen stopped, after the caller's debounce delay.
    pub fn activity_stopped(&self) {
        let changed = {
            let mut started = self.started.lock().unwrap_or_else(PoisonError::into_inner);
            if *started == 0 {
                tracing::warn!("activity_stopped without a matching activity_started, ignoring");
                return;
            }
            *started -= 1;
            (*started == 0).then(|| self.enter(Presence::Background))
        };
        self.notify(changed);
    }

    /// `None` until the first screen starts and after [`shutdown`](Self::shutdown).
    pub fn presence(&self) -> Option<Presence> {
        self.machine.current_state()
    }

    pub fn started_count(&self) -> usize {
        *self.started.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stop tracking. Listeners are not notified.
    pub fn shutdown(&self) {
        let mut started = self.started.lock().unwrap_or_else(PoisonError::into_inner);
        *started = 0;
        self.machine.finish(None);
    }

    // Caller holds the `started` lock, which keeps count and presence in step.
    fn enter(&self, presence: Presence) -> Presence {
        tracing::debug!(?presence, "application presence changed");
        self.machine.transition(presence);
        presence
    }

    fn notify(&self, changed: Option<Presence>) {
        match changed {
            Some(Presence::Foreground) => self.listener.moved_to_foreground(),
            Some(Presence::Background) => self.listener.moved_to_background(),
            None => {}
        }
    }
}
