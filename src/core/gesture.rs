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

//! src/core/gesture.rs
//!
//! Swipe gesture state machine
//!
//! Translates pointer/touch input, or a button press, into exactly one
//! `Decision` per gesture while exposing the live card transform.
//!
//! # State machine
//!
//! ```text
//!            begin_drag            end_drag (past threshold)
//!   Idle ───────────────► Dragging ─────────────────────────► Animating
//!    ▲  ▲                    │                                    │
//!    │  └──── end_drag ──────┘        trigger_action (from Idle) ─┤
//!    │      (snap back)                                           │ Notify
//!    │                                                            ▼
//!    └───────────────────────── Reset ─────────────────────── Resetting
//! ```
//!
//! Each timed step is one named `Transition` with a single deadline on the
//! injected `Clock`; the host calls `poll()` to fire due transitions.
//!
//! # Robustness
//!
//! Host platforms do not deliver pointer events reliably (a leave can fire
//! with no preceding move, a move can trail an end). Every operation called
//! out of sequence is a silent no-op, never an error.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

use crate::config::SwipeConfig;
use crate::core::clock::Clock;
use crate::core::policy::{decide_release, offscreen_target};
use crate::core::style::{self, CardStyle, OverlayStyle};
use crate::core::types::{Decision, GestureState, Offset, Phase, Point};

/// Timed step of the animate → notify → reset → re-arm sequence
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Fly-out finished: hand the decision to the application
    Notify(Decision),
    /// Jump back to rest with transitions off, so the return is invisible
    Reset,
    /// Turn transitions back on for the next gesture
    Rearm,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    due: Duration,
    transition: Transition,
}

/// Gesture controller for a single card
///
/// Create a fresh one whenever a new card becomes current; state is never
/// carried across cards.
pub struct GestureController {
    config: SwipeConfig,
    clock: Rc<dyn Clock>,
    state: GestureState,
    /// At most one pending timer at any time
    timer: Option<Timer>,
    on_decision: Box<dyn FnMut(Decision)>,
}

impl GestureController {
    /// Creates an idle controller
    ///
    /// # Arguments
    ///
    /// * `config` - Threshold, timings and viewport
    /// * `clock` - Time source used for the timed transitions
    /// * `on_decision` - Invoked exactly once per committed gesture
    ///
    /// # Example
    ///
    /// ```
    /// use std::rc::Rc;
    /// use swipe_deck::config::SwipeConfig;
    /// use swipe_deck::core::{GestureController, ManualClock, Point};
    ///
    /// let clock = ManualClock::new();
    /// let mut gesture = GestureController::new(
    ///     SwipeConfig::default(),
    ///     Rc::new(clock.clone()),
    ///     |decision| println!("decided: {}", decision),
    /// );
    ///
    /// gesture.begin_drag(Point::new(100.0, 200.0));
    /// gesture.update_drag(Point::new(200.0, 200.0));
    /// gesture.end_drag();
    ///
    /// clock.advance_ms(300);
    /// gesture.poll(); // prints "decided: like"
    /// ```
    pub fn new(
        config: SwipeConfig,
        clock: Rc<dyn Clock>,
        on_decision: impl FnMut(Decision) + 'static,
    ) -> Self {
        Self {
            config,
            clock,
            state: GestureState::default(),
            timer: None,
            on_decision: Box::new(on_decision),
        }
    }

    /// Starts tracking a drag at `point`
    ///
    /// Accepted only while idle; disables transitions so the card follows
    /// the finger without lag.
    pub fn begin_drag(&mut self, point: Point) {
        if self.state.phase != Phase::Idle {
            trace!(phase = %self.state.phase, "begin_drag ignored");
            return;
        }

        self.cancel_rearm();
        self.state.origin = Some(point);
        self.state.offset = Offset::ZERO;
        self.state.phase = Phase::Dragging;
        self.state.transition_enabled = false;
        trace!(%point, "drag started");
    }

    /// Moves the card to follow `point`
    pub fn update_drag(&mut self, point: Point) {
        let (Phase::Dragging, Some(origin)) = (self.state.phase, self.state.origin) else {
            trace!(phase = %self.state.phase, "update_drag ignored");
            return;
        };

        self.state.offset = point - origin;
    }

    /// Releases the card
    ///
    /// Commits a decision when the offset passes the threshold, otherwise
    /// snaps back to rest. The controller never stays in `Dragging`.
    pub fn end_drag(&mut self) {
        if self.state.phase != Phase::Dragging {
            trace!(phase = %self.state.phase, "end_drag ignored");
            return;
        }

        let offset = self.state.offset;
        self.state.origin = None;

        match decide_release(offset, self.config.threshold, self.config.super_like_enabled) {
            Some(decision) => {
                debug!(%decision, %offset, "drag committed");
                self.commit(decision);
            }
            None => {
                debug!(%offset, "below threshold, snapping back");
                self.state.phase = Phase::Idle;
                self.state.offset = Offset::ZERO;
                self.state.transition_enabled = true;
            }
        }
    }

    /// Flings the card for `decision` without a drag (action buttons)
    ///
    /// Accepted only while idle. Once started it cannot be aborted.
    pub fn trigger_action(&mut self, decision: Decision) {
        if self.state.phase != Phase::Idle {
            trace!(phase = %self.state.phase, %decision, "trigger_action ignored");
            return;
        }

        if decision == Decision::SuperLike && !self.config.super_like_enabled {
            debug!("super-like disabled, trigger ignored");
            return;
        }

        self.cancel_rearm();
        debug!(%decision, "action triggered");
        self.commit(decision);
    }

    /// Fires every transition whose deadline has passed
    ///
    /// Follow-up transitions are scheduled from the previous deadline, not
    /// from "now", so a late poll still fires the sequence in order.
    ///
    /// # Returns
    ///
    /// Number of transitions fired
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some(timer) = self.timer.filter(|timer| timer.due <= now) {
            self.timer = None;
            self.apply(timer);
            fired += 1;
        }

        fired
    }

    /// When the host should call `poll()` next, if anything is pending
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.map(|timer| timer.due)
    }

    /// The transition waiting on the clock, if any
    pub fn pending_transition(&self) -> Option<Transition> {
        self.timer.map(|timer| timer.transition)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    pub fn origin(&self) -> Option<Point> {
        self.state.origin
    }

    pub fn transition_enabled(&self) -> bool {
        self.state.transition_enabled
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Idle with the card exactly at its rest position
    pub fn is_at_rest(&self) -> bool {
        self.state.phase == Phase::Idle && self.state.offset.is_zero()
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replaces tuning values; an in-flight animation keeps its schedule
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Current card transform (pure)
    pub fn card_style(&self) -> CardStyle {
        style::card_style(&self.state, &self.config)
    }

    /// Current overlay tint (pure)
    pub fn overlay_style(&self) -> OverlayStyle {
        style::overlay_style(self.state.offset, &self.config)
    }

    fn commit(&mut self, decision: Decision) {
        self.state.transition_enabled = true;
        self.state.offset = offscreen_target(decision, self.config.viewport());
        self.state.phase = Phase::Animating;

        let due = self.clock.now() + self.config.exit_duration();
        self.timer = Some(Timer {
            due,
            transition: Transition::Notify(decision),
        });
    }

    fn apply(&mut self, timer: Timer) {
        match timer.transition {
            Transition::Notify(decision) => {
                self.state.phase = Phase::Resetting;
                self.timer = Some(Timer {
                    due: timer.due + self.config.reset_delay(),
                    transition: Transition::Reset,
                });
                debug!(%decision, "notifying decision");
                (self.on_decision)(decision);
            }
            Transition::Reset => {
                // Transitions off first so the jump back to rest is not animated
                self.state.transition_enabled = false;
                self.state.offset = Offset::ZERO;
                self.state.origin = None;
                self.state.phase = Phase::Idle;
                self.timer = Some(Timer {
                    due: timer.due + self.config.rearm_delay(),
                    transition: Transition::Rearm,
                });
            }
            Transition::Rearm => {
                self.state.transition_enabled = true;
            }
        }
    }

    fn cancel_rearm(&mut self) {
        if matches!(
            self.timer,
            Some(Timer {
                transition: Transition::Rearm,
                ..
            })
        ) {
            self.timer = None;
        }
    }
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
