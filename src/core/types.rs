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

//! src/core/types.rs
//!
//! Core type definitions for swipe gestures
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Point`: A pointer/touch position in logical pixels
//! - `Offset`: Displacement of the card from its rest position
//! - `Decision`: The committed outcome of a gesture (pass, like, super-like)
//! - `Phase`: Where the gesture state machine currently is
//! - `Viewport`: Size of the visible area, used for off-screen targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// A position reported by the host in logical pixels
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Displacement of the card from its rest position
///
/// Positive `x` is rightward, positive `y` is downward (screen coordinates),
/// so an upward swipe has a negative `y`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when the card sits exactly at rest
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, origin: Point) -> Offset {
        Offset {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.x, self.y)
    }
}

/// Outcome of a completed gesture or action button press
///
/// Handed to the application exactly once per gesture; the controller
/// never retains it after notifying.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Swipe left / X button
    Pass,
    /// Swipe right / heart button
    Like,
    /// Swipe up / star button
    SuperLike,
}

impl Decision {
    /// Verb used in user-facing messages ("Failed to like. ...")
    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Pass => "pass",
            Decision::Like => "like",
            Decision::SuperLike => "super-like",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Pass => write!(f, "pass"),
            Decision::Like => write!(f, "like"),
            Decision::SuperLike => write!(f, "superlike"),
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pass" | "nope" => Ok(Decision::Pass),
            "like" => Ok(Decision::Like),
            "superlike" | "super-like" | "super" => Ok(Decision::SuperLike),
            other => Err(format!("unknown decision '{}'", other)),
        }
    }
}

/// State machine phase of a gesture controller
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// At rest, ready for a new gesture
    #[default]
    Idle,
    /// Finger/cursor is down and the card tracks it
    Dragging,
    /// Card is flying toward its off-screen target
    Animating,
    /// Decision delivered, waiting to snap invisibly back to rest
    Resetting,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Dragging => write!(f, "dragging"),
            Phase::Animating => write!(f, "animating"),
            Phase::Resetting => write!(f, "resetting"),
        }
    }
}

/// Size of the visible area in logical pixels
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Snapshot of everything a gesture controller tracks
///
/// Owned exclusively by one controller; one per visible card.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GestureState {
    pub phase: Phase,
    /// Present only while dragging
    pub origin: Option<Point>,
    pub offset: Offset,
    /// Whether offset changes animate (false while the finger drives the card)
    pub transition_enabled: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            origin: None,
            offset: Offset::ZERO,
            transition_enabled: true,
        }
    }
}
