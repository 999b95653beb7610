//! Property-based tests for the state machine and view-state controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use viewstate::core::{State, StateMachine};
use viewstate::saved::{BincodeCodec, JsonCodec};
use viewstate::testing::{InMemoryLayout, RegionRef};
use viewstate::view::{RegionConfig, RegionRole, ViewState, ViewStateController, Visibility};

prop_compose! {
    fn arbitrary_view_state()(ordinal in 0..5usize) -> ViewState {
        ViewState::from_ordinal(ordinal).unwrap_or_default()
    }
}

struct Fixture {
    layout: InMemoryLayout,
    content: RegionRef,
    controller: ViewStateController<InMemoryLayout>,
}

fn fixture() -> Fixture {
    let layout = InMemoryLayout::new();
    let content = layout.add_region("content", Visibility::Hidden);
    let config = RegionConfig::new().with_content("content");
    let controller = ViewStateController::new(layout.clone(), config).unwrap();
    Fixture {
        layout,
        content,
        controller,
    }
}

fn region(fixture: &Fixture, role: RegionRole) -> RegionRef {
    match role {
        RegionRole::Content => fixture.content.clone(),
        other => fixture.layout.default_region(other).unwrap(),
    }
}

fn visible_roles(fixture: &Fixture) -> Vec<RegionRole> {
    RegionRole::ALL
        .into_iter()
        .filter(|role| region(fixture, *role).is_visible())
        .collect()
}

#[derive(Clone)]
struct Logged {
    label: usize,
    log: Arc<Mutex<Vec<(usize, bool)>>>,
}

impl State for Logged {
    fn on_enter(&mut self) {
        self.log.lock().unwrap().push((self.label, true));
    }

    fn on_exit(&mut self) {
        self.log.lock().unwrap().push((self.label, false));
    }
}

proptest! {
    #[test]
    fn only_the_owned_region_is_visible(
        states in prop::collection::vec(arbitrary_view_state(), 1..20)
    ) {
        let mut fixture = fixture();

        for state in states {
            fixture.controller.set_state(state).unwrap();

            let visible = visible_roles(&fixture);
            prop_assert!(visible.len() <= 1);
            prop_assert_eq!(visible.first().copied(), state.region());
            prop_assert_eq!(fixture.layout.visible_count(), visible.len());
        }
    }

    #[test]
    fn setting_the_same_state_twice_is_idempotent(state in arbitrary_view_state()) {
        let mut fixture = fixture();

        fixture.controller.set_state(state).unwrap();
        let first = visible_roles(&fixture);
        fixture.controller.set_state(state).unwrap();

        prop_assert_eq!(visible_roles(&fixture), first);
        prop_assert_eq!(fixture.controller.state(), state);
    }

    #[test]
    fn json_token_restores_state(state in arbitrary_view_state()) {
        let mut before = fixture();
        before.controller.set_state(state).unwrap();
        let token = before.controller.capture_token(&JsonCodec).unwrap();

        let mut after = fixture();
        after.controller.restore_token(&JsonCodec, &token).unwrap();

        prop_assert_eq!(after.controller.state(), state);
        prop_assert_eq!(visible_roles(&after), visible_roles(&before));
    }

    #[test]
    fn binary_token_restores_state(state in arbitrary_view_state()) {
        let mut before = fixture();
        before.controller.set_state(state).unwrap();
        let token = before.controller.capture_token(&BincodeCodec).unwrap();

        let mut after = fixture();
        after.controller.restore_token(&BincodeCodec, &token).unwrap();

        prop_assert_eq!(after.controller.state(), state);
        prop_assert_eq!(visible_roles(&after), visible_roles(&before));
    }

    #[test]
    fn exit_always_precedes_next_enter(count in 1..15usize) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let machine = StateMachine::new();

        for label in 0..count {
            machine.transition(Logged { label, log: Arc::clone(&log) });
        }

        let log = log.lock().unwrap().clone();
        let mut expected = vec![(0, true)];
        for label in 1..count {
            expected.push((label - 1, false));
            expected.push((label, true));
        }
        prop_assert_eq!(log, expected);
    }

    #[test]
    fn ordinal_and_name_round_trip(state in arbitrary_view_state()) {
        prop_assert_eq!(ViewState::from_ordinal(state.ordinal()), Some(state));
        prop_assert_eq!(ViewState::from_name(state.name()), Some(state));
    }
}
