// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller tests
//!
//! Tests for the discovery MVC Controller logic

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{ApiError, DryRunApi, ScriptedApi};
use crate::config::SwipeConfig;
use crate::core::{Decision, ManualClock, Phase, Point};
use crate::deck::Profile;
use crate::session::Session;
use crate::ui::{DeckEvent, DiscoveryController};

/// Helper: Creates a controller over three profiles with a signed-in session
fn create_test_controller() -> (DiscoveryController, ManualClock, Rc<RefCell<Session>>) {
    let clock = ManualClock::new();
    let session = Rc::new(RefCell::new(Session::signed_in("me", "token")));
    let profiles = vec![
        Profile::new("p-1", "Ada", 31),
        Profile::new("p-2", "Grace", 29),
        Profile::new("p-3", "Linus", 34),
    ];

    let controller = DiscoveryController::new(
        SwipeConfig::default(),
        Rc::new(clock.clone()),
        session.clone(),
        profiles,
    );
    (controller, clock, session)
}

/// Helper: Drags the current card by (dx, dy) and releases
fn swipe(controller: &mut DiscoveryController, dx: f64, dy: f64) {
    controller.pointer_down(Point::new(100.0, 200.0));
    controller.pointer_move(Point::new(100.0 + dx, 200.0 + dy));
    controller.pointer_up();
}

#[test]
fn test_controller_starts_on_first_card() {
    let (controller, _clock, _session) = create_test_controller();

    assert_eq!(controller.current_profile().unwrap().id, "p-1");
    assert_eq!(controller.next_profile().unwrap().id, "p-2");
    assert_eq!(controller.remaining(), 3);
}

#[test]
fn test_deck_advances_when_decision_delivered() {
    let (mut controller, clock, _session) = create_test_controller();

    swipe(&mut controller, 120.0, 0.0);
    assert_eq!(controller.poll(), 0);
    assert_eq!(
        controller.current_profile().unwrap().id,
        "p-1",
        "Card stays current while flying out"
    );

    clock.advance_ms(300);
    assert_eq!(controller.poll(), 1);
    assert_eq!(controller.current_profile().unwrap().id, "p-2");
    assert_eq!(controller.pending_confirmations(), 1);

    let events = controller.drain_events();
    assert_eq!(
        events,
        vec![DeckEvent::Decided {
            profile_id: "p-1".to_string(),
            decision: Decision::Like,
        }]
    );
}

#[test]
fn test_next_card_gets_fresh_gesture_state() {
    let (mut controller, clock, _session) = create_test_controller();

    controller.press(Decision::Pass);
    clock.advance_ms(300);
    controller.poll();

    let gesture = controller.gesture();
    assert_eq!(gesture.phase(), Phase::Idle);
    assert!(gesture.is_at_rest());
    assert!(gesture.transition_enabled());
    assert_eq!(gesture.next_deadline(), None, "Old card's reset timers are gone");

    // New card accepts a drag right away
    controller.pointer_down(Point::new(0.0, 0.0));
    assert_eq!(controller.gesture().phase(), Phase::Dragging);
}

#[test]
fn test_snap_back_keeps_card() {
    let (mut controller, clock, _session) = create_test_controller();

    swipe(&mut controller, 30.0, 0.0);
    clock.advance_ms(1_000);

    assert_eq!(controller.poll(), 0);
    assert_eq!(controller.current_profile().unwrap().id, "p-1");
    assert!(controller.drain_events().is_empty());
}

#[test]
fn test_exhausting_the_deck() {
    let (mut controller, clock, _session) = create_test_controller();

    for decision in [Decision::Like, Decision::Pass, Decision::SuperLike] {
        controller.press(decision);
        clock.advance_ms(300);
        controller.poll();
    }

    assert!(controller.is_exhausted());
    assert!(controller.current_profile().is_none());

    let events = controller.drain_events();
    assert_eq!(events.last(), Some(&DeckEvent::Exhausted));

    // Input on an empty deck does nothing
    controller.press(Decision::Like);
    assert_eq!(controller.gesture().phase(), Phase::Idle);
}

#[test]
fn test_flush_with_dry_run() {
    let (mut controller, clock, _session) = create_test_controller();

    controller.press(Decision::Like);
    clock.advance_ms(300);
    controller.poll();

    assert_eq!(controller.flush_confirmations(&DryRunApi), 1);
    assert_eq!(controller.pending_confirmations(), 0);
    assert!(controller.matched().is_none());
    assert!(controller.error_banner().is_none());
}

#[test]
fn test_match_notification() {
    let (mut controller, clock, _session) = create_test_controller();
    let api = ScriptedApi::new().with_match("p-1");

    controller.press(Decision::Like);
    clock.advance_ms(300);
    controller.poll();
    controller.drain_events();

    controller.flush_confirmations(&api);

    assert_eq!(controller.matched().unwrap().first_name, "Ada");
    assert_eq!(
        controller.drain_events(),
        vec![DeckEvent::Matched {
            profile_id: "p-1".to_string()
        }]
    );

    let taken = controller.take_match();
    assert!(taken.is_some());
    assert!(controller.matched().is_none(), "Modal closed");
}

#[test]
fn test_failure_sets_banner_without_rollback() {
    let (mut controller, clock, _session) = create_test_controller();
    let api = ScriptedApi::new().with_failure(
        "p-1",
        ApiError::Rejected {
            status: 500,
            message: "boom".to_string(),
        },
    );

    controller.press(Decision::Like);
    clock.advance_ms(300);
    controller.poll();
    controller.flush_confirmations(&api);

    assert_eq!(
        controller.error_banner(),
        Some("Failed to like. Please try again later.")
    );
    assert_eq!(
        controller.current_profile().unwrap().id,
        "p-2",
        "Optimistic advance is not rolled back"
    );

    controller.dismiss_error();
    assert!(controller.error_banner().is_none());
}

#[test]
fn test_signed_out_session_never_calls_api() {
    let (mut controller, clock, session) = create_test_controller();
    let api = ScriptedApi::new();

    controller.press(Decision::Pass);
    clock.advance_ms(300);
    controller.poll();

    session.borrow_mut().sign_out();
    controller.flush_confirmations(&api);

    assert!(api.requests().is_empty(), "No request without credentials");
    assert_eq!(
        controller.error_banner(),
        Some("Failed to pass. Please try again later.")
    );
}

#[test]
fn test_detail_view_blocks_input() {
    let (mut controller, _clock, _session) = create_test_controller();

    assert!(controller.open_detail());
    controller.pointer_down(Point::new(0.0, 0.0));
    controller.press(Decision::Like);
    assert_eq!(controller.gesture().phase(), Phase::Idle);

    controller.close_detail();
    controller.press(Decision::Like);
    assert_eq!(controller.gesture().phase(), Phase::Animating);
}

#[test]
fn test_detail_refused_while_card_moves() {
    let (mut controller, _clock, _session) = create_test_controller();

    controller.pointer_down(Point::new(0.0, 0.0));
    controller.pointer_move(Point::new(15.0, 0.0));

    assert!(!controller.open_detail(), "A drag is not a tap");
    assert!(!controller.is_viewing_detail());
}

#[test]
fn test_refresh_restarts_deck() {
    let (mut controller, clock, _session) = create_test_controller();

    for _ in 0..3 {
        controller.press(Decision::Pass);
        clock.advance_ms(300);
        controller.poll();
    }
    assert!(controller.is_exhausted());

    controller.refresh(vec![Profile::new("p-9", "Margaret", 40)]);
    assert_eq!(controller.current_profile().unwrap().id, "p-9");
    assert!(controller.gesture().is_at_rest());
}

#[test]
fn test_set_config_applies_to_current_card() {
    let (mut controller, clock, _session) = create_test_controller();

    controller.set_config(SwipeConfig {
        threshold: 20.0,
        overlay_dead_zone: 5.0,
        ..SwipeConfig::default()
    });

    swipe(&mut controller, 30.0, 0.0);
    clock.advance_ms(300);
    assert_eq!(controller.poll(), 1, "30px now passes the lowered threshold");
}

#[test]
fn test_refresh_waits_for_card_in_flight() {
    let (mut controller, clock, _session) = create_test_controller();

    controller.press(Decision::Like);
    controller.refresh(vec![Profile::new("p-9", "Margaret", 40)]);
    assert!(controller.refresh_pending());
    assert_eq!(
        controller.current_profile().unwrap().id,
        "p-1",
        "Old deck stays until the flying card lands"
    );

    clock.advance_ms(1_000);
    assert_eq!(controller.poll(), 1);

    assert_eq!(
        controller.drain_events(),
        vec![DeckEvent::Decided {
            profile_id: "p-1".to_string(),
            decision: Decision::Like,
        }]
    );
    assert_eq!(controller.pending_confirmations(), 1);
    assert!(!controller.refresh_pending());
    assert_eq!(controller.current_profile().unwrap().id, "p-9");
    assert!(controller.gesture().is_at_rest());
}

#[test]
fn test_refresh_while_idle_is_immediate() {
    let (mut controller, _clock, _session) = create_test_controller();

    controller.refresh(vec![Profile::new("p-9", "Margaret", 40)]);

    assert!(!controller.refresh_pending());
    assert_eq!(controller.current_profile().unwrap().id, "p-9");
}

#[test]
fn test_match_survives_deck_refresh() {
    let (mut controller, clock, _session) = create_test_controller();
    let api = ScriptedApi::new().with_match("p-1");

    controller.press(Decision::Like);
    clock.advance_ms(300);
    controller.poll();
    controller.refresh(vec![Profile::new("p-9", "Margaret", 40)]);
    controller.drain_events();

    controller.flush_confirmations(&api);

    assert_eq!(
        controller.drain_events(),
        vec![DeckEvent::Matched {
            profile_id: "p-1".to_string()
        }]
    );
    assert_eq!(
        controller.matched().map(|profile| profile.first_name.as_str()),
        Some("Ada"),
        "Match notification uses the profile as it was decided"
    );
}

#[test]
fn test_drag_release_is_not_a_tap() {
    let (mut controller, _clock, _session) = create_test_controller();

    swipe(&mut controller, 30.0, 0.0);
    assert!(controller.gesture().is_at_rest(), "Snapped back");
    assert!(!controller.open_detail(), "The press moved the card");

    // A press without movement is a tap
    controller.pointer_down(Point::new(50.0, 50.0));
    controller.pointer_up();
    assert!(controller.open_detail());
}

#[test]
fn test_onboarding_follows_session() {
    let (mut controller, _clock, session) = create_test_controller();

    assert!(controller.needs_onboarding());
    controller.complete_onboarding();
    assert!(!controller.needs_onboarding());
    assert!(session.borrow().onboarding_complete());
}
