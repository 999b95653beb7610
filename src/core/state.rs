//! Core State trait for state machine states.
//!
//! A state is an opaque value with two lifecycle hooks. The machine calls
//! `on_exit` on the state it leaves and `on_enter` on the state it moves to.

/// Trait for state machine states.
///
/// Both hooks default to no-ops, so plain marker types and enums only
/// need to provide a name (or not even that). Consumers that need payload
/// implement the trait on their own structs.
///
/// Hooks run while the owning [`StateMachine`](crate::core::StateMachine)
/// holds its lock. A hook must not call back into that same machine; doing
/// so deadlocks.
///
/// # Example
///
/// ```rust
/// use viewstate::core::State;
///
/// struct Connecting {
///     attempts: u32,
/// }
///
/// impl State for Connecting {
///     fn name(&self) -> &str {
///         "Connecting"
///     }
///
///     fn on_enter(&mut self) {
///         self.attempts += 1;
///     }
/// }
///
/// let mut state = Connecting { attempts: 0 };
/// state.on_enter();
/// assert_eq!(state.attempts, 1);
/// ```
pub trait State: Send {
    /// Get the state's name for display/logging.
    ///
    /// Default implementation returns the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called right after the machine makes this the current state.
    fn on_enter(&mut self) {}

    /// Called right before the machine leaves this state.
    fn on_exit(&mut self) {}
}

impl<S: State + ?Sized> State for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter(&mut self) {
        (**self).on_enter()
    }

    fn on_exit(&mut self) {
        (**self).on_exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        entered: usize,
        exited: usize,
    }

    impl State for Counting {
        fn name(&self) -> &str {
            "Counting"
        }

        fn on_enter(&mut self) {
            self.entered += 1;
        }

        fn on_exit(&mut self) {
            self.exited += 1;
        }
    }

    struct Silent;

    impl State for Silent {}

    #[test]
    fn hooks_default_to_noops() {
        let mut state = Silent;
        state.on_enter();
        state.on_exit();
        assert!(state.name().ends_with("Silent"));
    }

    #[test]
    fn custom_hooks_run() {
        let mut state = Counting::default();
        state.on_enter();
        state.on_exit();
        state.on_enter();

        assert_eq!(state.entered, 2);
        assert_eq!(state.exited, 1);
    }

    #[test]
    fn boxed_state_forwards_to_inner() {
        let mut boxed: Box<dyn State> = Box::new(Counting::default());
        boxed.on_enter();
        assert_eq!(boxed.name(), "Counting");
    }
}
