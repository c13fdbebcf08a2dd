use crate::core::policy::{decide_release, offscreen_target, DEFAULT_THRESHOLD};
use crate::core::types::{Decision, Offset, Viewport};

#[test]
fn test_horizontal_commits() {
    assert_eq!(
        decide_release(Offset::new(81.0, 0.0), DEFAULT_THRESHOLD, true),
        Some(Decision::Like)
    );
    assert_eq!(
        decide_release(Offset::new(-81.0, 0.0), DEFAULT_THRESHOLD, true),
        Some(Decision::Pass)
    );
}

#[test]
fn test_threshold_is_exclusive() {
    assert_eq!(decide_release(Offset::new(80.0, 0.0), 80.0, true), None);
    assert_eq!(decide_release(Offset::new(0.0, -80.0), 80.0, true), None);
}

#[test]
fn test_horizontal_takes_precedence_over_vertical() {
    // Both axes past the threshold: horizontal wins
    assert_eq!(
        decide_release(Offset::new(-90.0, -200.0), 80.0, true),
        Some(Decision::Pass)
    );
}

#[test]
fn test_upward_commits_super_like() {
    assert_eq!(
        decide_release(Offset::new(40.0, -120.0), 80.0, true),
        Some(Decision::SuperLike)
    );
}

#[test]
fn test_downward_never_commits() {
    assert_eq!(decide_release(Offset::new(0.0, 300.0), 80.0, true), None);
}

#[test]
fn test_super_like_disabled() {
    assert_eq!(decide_release(Offset::new(0.0, -300.0), 80.0, false), None);
}

#[test]
fn test_offscreen_targets() {
    let viewport = Viewport::new(400.0, 900.0);

    assert_eq!(offscreen_target(Decision::Like, viewport), Offset::new(400.0, 0.0));
    assert_eq!(offscreen_target(Decision::Pass, viewport), Offset::new(-400.0, 0.0));
    assert_eq!(
        offscreen_target(Decision::SuperLike, viewport),
        Offset::new(0.0, -600.0)
    );
}
