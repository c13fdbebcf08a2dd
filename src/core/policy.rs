//! src/core/policy.rs
//!
//! Release policy and fly-out targets
//!
//! Kept free of any state so the same rules apply whether a card is
//! released by hand or flung by an action button.

use crate::core::types::{Decision, Offset, Viewport};

/// Default commit distance in logical pixels, shared by both axes
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Evaluates a released drag
///
/// Precedence:
/// 1. `|x| > threshold` → Like (rightward) or Pass (leftward)
/// 2. `y < -threshold` → SuperLike, when super-likes are enabled
/// 3. otherwise `None` (snap back)
///
/// # Example
/// ```
/// use swipe_deck::core::policy::decide_release;
/// use swipe_deck::core::{Decision, Offset};
///
/// assert_eq!(decide_release(Offset::new(100.0, 0.0), 80.0, true), Some(Decision::Like));
/// assert_eq!(decide_release(Offset::new(30.0, 0.0), 80.0, true), None);
/// ```
pub fn decide_release(offset: Offset, threshold: f64, super_like_enabled: bool) -> Option<Decision> {
    if offset.x.abs() > threshold {
        return Some(if offset.x > 0.0 {
            Decision::Like
        } else {
            Decision::Pass
        });
    }

    if super_like_enabled && offset.y < -threshold {
        return Some(Decision::SuperLike);
    }

    None
}

/// Off-screen position the card flies to once `decision` is committed
pub fn offscreen_target(decision: Decision, viewport: Viewport) -> Offset {
    match decision {
        Decision::Like => Offset::new(viewport.width, 0.0),
        Decision::Pass => Offset::new(-viewport.width, 0.0),
        Decision::SuperLike => Offset::new(0.0, -viewport.height / 1.5),
    }
}
