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

//! src/core/style.rs
//!
//! Visual derivations of a gesture state
//!
//! Everything here is a pure function of the current offset, phase and
//! transition flag. The rendering layer (GTK4 demo, or any other host)
//! decides how to paint the result; `Display` implementations produce
//! CSS-compatible strings for hosts that speak CSS.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::SwipeConfig;
use crate::core::types::{Decision, GestureState, Offset, Phase};

/// Opacity fade applied to the overlay tint itself
pub const OVERLAY_TRANSITION: Duration = Duration::from_millis(100);

/// An sRGB colour with alpha
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    /// Green
    pub const LIKE: Rgba = Rgba::new(74, 222, 128, 0.7);
    /// Red
    pub const PASS: Rgba = Rgba::new(248, 113, 113, 0.7);
    /// Blue
    pub const SUPER_LIKE: Rgba = Rgba::new(96, 165, 250, 0.7);

    /// Tint colour shown while a decision is in progress
    pub fn for_decision(decision: Decision) -> Self {
        match decision {
            Decision::Like => Rgba::LIKE,
            Decision::Pass => Rgba::PASS,
            Decision::SuperLike => Rgba::SUPER_LIKE,
        }
    }

    /// Channels scaled to 0.0..=1.0, as GTK/cairo expect
    pub fn to_unit(&self) -> (f64, f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
            self.alpha,
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Rgba::TRANSPARENT {
            return write!(f, "transparent");
        }
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Mouse cursor hint for desktop hosts
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cursor::Grab => write!(f, "grab"),
            Cursor::Grabbing => write!(f, "grabbing"),
        }
    }
}

/// Transform and motion hints for the current card
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CardStyle {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Degrees, proportional to the horizontal offset
    pub rotation_deg: f64,
    pub scale: f64,
    /// `Some` when offset changes should animate over this duration
    pub transition: Option<Duration>,
    pub cursor: Cursor,
}

impl CardStyle {
    /// Whether the host should animate toward this transform
    pub fn is_animated(&self) -> bool {
        self.transition.is_some()
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        let mut transform = format!(
            "translate({}px, {}px) rotate({}deg)",
            self.translate_x, self.translate_y, self.rotation_deg
        );
        if self.scale != 1.0 {
            transform.push_str(&format!(" scale({})", self.scale));
        }
        transform
    }

    /// CSS `transition` value
    pub fn transition_css(&self) -> String {
        match self.transition {
            Some(duration) => format!("transform {}s ease-out", duration.as_secs_f64()),
            None => "none".to_string(),
        }
    }
}

impl fmt::Display for CardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform: {}; transition: {}; cursor: {}",
            self.transform(),
            self.transition_css(),
            self.cursor
        )
    }
}

/// Tint layered over the card while it is being dragged
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct OverlayStyle {
    /// Decision the tint signals, `None` when fully transparent
    pub tint: Option<Decision>,
    pub color: Rgba,
    pub opacity: f64,
}

impl OverlayStyle {
    pub const CLEAR: OverlayStyle = OverlayStyle {
        tint: None,
        color: Rgba::TRANSPARENT,
        opacity: 0.0,
    };

    fn tinted(decision: Decision, opacity: f64) -> Self {
        Self {
            tint: Some(decision),
            color: Rgba::for_decision(decision),
            opacity,
        }
    }
}

impl fmt::Display for OverlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opacity: {}; background-color: {}; transition: opacity {}s ease-out",
            self.opacity,
            self.color,
            OVERLAY_TRANSITION.as_secs_f64()
        )
    }
}

/// Derives the card transform from a gesture state
pub fn card_style(state: &GestureState, config: &SwipeConfig) -> CardStyle {
    let dragging = state.phase == Phase::Dragging;

    CardStyle {
        translate_x: state.offset.x,
        translate_y: state.offset.y,
        rotation_deg: state.offset.x * config.rotation_factor,
        scale: if dragging { config.drag_scale } else { 1.0 },
        transition: state.transition_enabled.then(|| config.exit_duration()),
        cursor: if dragging { Cursor::Grabbing } else { Cursor::Grab },
    }
}

/// Derives the overlay tint from an offset
///
/// Vertical wins only when it dominates AND points upward past the dead
/// zone; otherwise horizontal travel past its dead zone picks like/pass.
/// Opacity grows linearly with travel toward the threshold and is capped
/// at `max_overlay_opacity`.
pub fn overlay_style(offset: Offset, config: &SwipeConfig) -> OverlayStyle {
    let threshold = config.threshold;
    let dead_zone = config.overlay_dead_zone;
    let cap = config.max_overlay_opacity;

    let opacity_x = (offset.x.abs() / threshold).min(cap);
    let opacity_y = (offset.y.abs() / threshold).min(cap);

    if offset.y.abs() > offset.x.abs() && offset.y < -dead_zone {
        OverlayStyle::tinted(Decision::SuperLike, opacity_y)
    } else if offset.x > dead_zone {
        OverlayStyle::tinted(Decision::Like, opacity_x)
    } else if offset.x < -dead_zone {
        OverlayStyle::tinted(Decision::Pass, opacity_x)
    } else {
        OverlayStyle::CLEAR
    }
}
