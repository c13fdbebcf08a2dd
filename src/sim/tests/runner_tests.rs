//! Runner tests

use crate::api::{ApiError, DryRunApi, ScriptedApi};
use crate::config::SwipeConfig;
use crate::core::{Decision, Phase};
use crate::sim::script::parse_script;
use crate::sim::{sample_deck, simulate, TraceEntry, TraceKind};
use crate::ui::DeckEvent;

/// Helper: Deck events of a trace, in order
fn deck_events(trace: &[TraceEntry]) -> Vec<DeckEvent> {
    trace
        .iter()
        .filter_map(|entry| match &entry.kind {
            TraceKind::Deck { event } => Some(event.clone()),
            _ => None,
        })
        .collect()
}

/// Helper: Phase changes of a trace with their times
fn phases(trace: &[TraceEntry]) -> Vec<(u64, Phase)> {
    trace
        .iter()
        .filter_map(|entry| match entry.kind {
            TraceKind::Phase { phase } => Some((entry.at_ms, phase)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_drag_right_likes_first_card() {
    let steps = parse_script("down 100 200\nmove 220 205\nup\nwait 400\n").unwrap();
    let trace = simulate(SwipeConfig::default(), sample_deck(3), &steps, &DryRunApi);

    assert_eq!(
        deck_events(&trace),
        vec![DeckEvent::Decided {
            profile_id: "p-1".to_string(),
            decision: Decision::Like,
        }]
    );

    // Decision lands when the fly-out ends, not when the wait ends
    assert_eq!(
        phases(&trace),
        vec![
            (0, Phase::Dragging),
            (0, Phase::Animating),
            (300, Phase::Idle),
        ]
    );
}

#[test]
fn test_drag_entries_carry_overlay() {
    let steps = parse_script("down 0 0\nmove 50 0\n").unwrap();
    let trace = simulate(SwipeConfig::default(), sample_deck(1), &steps, &DryRunApi);

    let drag = trace
        .iter()
        .find_map(|entry| match &entry.kind {
            TraceKind::Drag {
                rotation_deg,
                tint,
                overlay_opacity,
                ..
            } => Some((*rotation_deg, *tint, *overlay_opacity)),
            _ => None,
        })
        .expect("a drag entry");

    assert!((drag.0 - 2.5).abs() < 1e-9);
    assert_eq!(drag.1, Some(Decision::Like));
    assert!(drag.2 > 0.0 && drag.2 < 0.7);
}

#[test]
fn test_short_drag_snaps_back() {
    let steps = parse_script("down 0 0\nmove 60 0\nleave\nwait 1000\n").unwrap();
    let trace = simulate(SwipeConfig::default(), sample_deck(1), &steps, &DryRunApi);

    assert!(deck_events(&trace).is_empty());
    assert_eq!(phases(&trace).last(), Some(&(0, Phase::Idle)));
}

#[test]
fn test_buttons_exhaust_deck() {
    let script = "press like\nwait 300\npress pass\nwait 300\n";
    let trace = simulate(
        SwipeConfig::default(),
        sample_deck(2),
        &parse_script(script).unwrap(),
        &DryRunApi,
    );

    let events = deck_events(&trace);
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], DeckEvent::Exhausted);
}

#[test]
fn test_flush_reports_failures() {
    let api = ScriptedApi::new().with_failure("p-1", ApiError::Network("offline".to_string()));
    let steps = parse_script("press superlike\nwait 300\nflush\n").unwrap();
    let trace = simulate(SwipeConfig::default(), sample_deck(2), &steps, &api);

    let events = deck_events(&trace);
    assert!(events.contains(&DeckEvent::Failed {
        profile_id: "p-1".to_string(),
        decision: Decision::SuperLike,
        message: "Failed to super-like. Please try again later.".to_string(),
    }));
    assert_eq!(api.requests().len(), 1);
}

#[test]
fn test_trace_serializes_to_json() {
    let steps = parse_script("press like\nwait 300\n").unwrap();
    let trace = simulate(SwipeConfig::default(), sample_deck(1), &steps, &DryRunApi);

    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json[0]["kind"], "input");
    assert_eq!(json[0]["command"], "press like");
    assert_eq!(json[0]["at_ms"], 0);
    assert!(json
        .as_array()
        .unwrap()
        .iter()
        .any(|entry| entry["kind"] == "deck" && entry["event"]["event"] == "decided"));
}

#[test]
fn test_sample_deck_ids() {
    let deck = sample_deck(10);
    assert_eq!(deck.len(), 10);
    assert_eq!(deck[0].id, "p-1");
    assert_eq!(deck[9].id, "p-10");
}
