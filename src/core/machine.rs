//! Thread-safe state machine driving enter/exit hooks.

use super::state::State;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State machine holding at most one current state.
///
/// Every transition runs inside a single critical section, so two
/// transitions issued from different threads never interleave their
/// `on_exit`/`on_enter` calls.
pub struct StateMachine<T: State> {
    current: Mutex<Option<T>>,
}

impl<T: State> StateMachine<T> {
    /// Create a machine with no current state.
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    /// Leave the current state (if any) and enter `next`.
    ///
    /// Both hooks run under the machine's lock, so they must not call any
    /// method on this machine.
    pub fn transition(&self, next: T) {
        let mut current = self.lock();
        Self::exit_current(&mut current);
        Self::enter(&mut current, next);
    }

    /// Leave the current state for good.
    ///
    /// With `Some(final_state)` the machine parks in that state, which lets
    /// callers keep a stub around that swallows late calls. With `None` the
    /// machine ends up holding nothing.
    pub fn finish(&self, final_state: Option<T>) {
        let mut current = self.lock();
        Self::exit_current(&mut current);

        match final_state {
            Some(state) => Self::enter(&mut current, state),
            None => tracing::debug!("state machine finished without a final state"),
        }
    }

    /// Run `f` against the current state while holding the lock.
    pub fn with_current_state<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let current = self.lock();
        f(current.as_ref())
    }

    /// True before the first transition and after `finish(None)`.
    pub fn is_idle(&self) -> bool {
        self.lock().is_none()
    }

    fn exit_current(current: &mut Option<T>) {
        if let Some(mut previous) = current.take() {
            tracing::debug!(state = previous.name(), "exiting state");
            previous.on_exit();
        }
    }

    fn enter(current: &mut Option<T>, next: T) {
        let state = current.insert(next);
        tracing::debug!(state = state.name(), "entering state");
        state.on_enter();
    }

    // A hook that panicked poisons the mutex; the stored state is still
    // coherent, so keep going with it.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: State + Clone> StateMachine<T> {
    /// Get a copy of the current state.
    pub fn current_state(&self) -> Option<T> {
        self.lock().clone()
    }
}

impl<T: State> Default for StateMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    type Log = Arc<StdMutex<Vec<String>>>;

    #[derive(Clone)]
    struct Logged {
        label: &'static str,
        log: Log,
    }

    impl Logged {
        fn new(label: &'static str, log: &Log) -> Self {
            Self {
                label,
                log: Arc::clone(log),
            }
        }
    }

    impl State for Logged {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter(&mut self) {
            self.log.lock().unwrap().push(format!("enter {}", self.label));
        }

        fn on_exit(&mut self) {
            self.log.lock().unwrap().push(format!("exit {}", self.label));
        }
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    #[test]
    fn new_machine_is_idle() {
        let machine: StateMachine<Logged> = StateMachine::new();
        assert!(machine.is_idle());
        assert!(machine.current_state().is_none());
    }

    #[test]
    fn first_transition_only_enters() {
        let log = Log::default();
        let machine = StateMachine::new();

        machine.transition(Logged::new("A", &log));

        assert_eq!(entries(&log), vec!["enter A"]);
        assert_eq!(machine.current_state().unwrap().label, "A");
    }

    #[test]
    fn exit_runs_before_enter() {
        let log = Log::default();
        let machine = StateMachine::new();

        machine.transition(Logged::new("A", &log));
        machine.transition(Logged::new("B", &log));
        machine.transition(Logged::new("C", &log));

        assert_eq!(
            entries(&log),
            vec!["enter A", "exit A", "enter B", "exit B", "enter C"]
        );
    }

    #[test]
    fn finish_without_final_state_clears() {
        let log = Log::default();
        let machine = StateMachine::new();

        machine.transition(Logged::new("A", &log));
        machine.finish(None);

        assert!(machine.is_idle());
        assert_eq!(entries(&log), vec!["enter A", "exit A"]);
    }

    #[test]
    fn finish_with_final_state_exits_once_then_enters() {
        let log = Log::default();
        let machine = StateMachine::new();

        machine.transition(Logged::new("A", &log));
        machine.finish(Some(Logged::new("Done", &log)));

        assert_eq!(entries(&log), vec!["enter A", "exit A", "enter Done"]);
        assert_eq!(machine.current_state().unwrap().label, "Done");
    }

    #[test]
    fn finish_on_idle_machine_is_harmless() {
        let log = Log::default();
        let machine: StateMachine<Logged> = StateMachine::new();

        machine.finish(None);

        assert!(machine.is_idle());
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn with_current_state_sees_latest() {
        let log = Log::default();
        let machine = StateMachine::new();
        machine.transition(Logged::new("A", &log));

        let name = machine.with_current_state(|s| s.map(|s| s.name().to_string()));
        assert_eq!(name.as_deref(), Some("A"));
    }

    #[test]
    fn machine_survives_panicking_hook() {
        struct Exploding;

        impl State for Exploding {
            fn on_exit(&mut self) {
                panic!("boom");
            }
        }

        let machine: Arc<StateMachine<Box<dyn State>>> = Arc::new(StateMachine::new());
        machine.transition(Box::new(Exploding));

        let worker = Arc::clone(&machine);
        let joined = std::thread::spawn(move || {
            worker.transition(Box::new(Exploding));
        })
        .join();
        assert!(joined.is_err());

        machine.finish(None);
        assert!(machine.is_idle());
    }
}
