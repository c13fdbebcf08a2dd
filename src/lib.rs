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

//! Swipe Deck
//!
//! Swipe gesture controller for a card-based discovery screen. A card is
//! dragged left to pass, right to like, or up to super-like; past a
//! distance threshold the card flies off screen and the decision is
//! delivered exactly once, below it the card snaps back.
//!
//! # Features
//!
//! - **Gesture State Machine:** Idle, dragging, animating and resetting
//!   phases with explicit timers on an injectable clock
//! - **Live Styling:** Card transform and overlay tint for every frame
//! - **Optimistic Deck:** Cards advance immediately; backend confirmations
//!   are queued and may fail without rolling back
//! - **Tunable:** Threshold, dead zone, timings and viewport in `swipe.conf`
//! - **Simulator:** Deterministic replay of gesture scripts
//! - **GTK4 Interface:** Optional front end behind the `gui` feature
//!
//! # Architecture
//!
//! - **`core`:** Gesture state machine, release policy, styles, clocks
//! - **`config`:** Tuning file parsing, validation, atomic saves, backups
//! - **`deck`:** Profiles, the deck cursor, pending confirmations
//! - **`api`:** Backend seam for like/pass/super-like requests
//! - **`session`:** Signed-in user and onboarding state
//! - **`sim`:** Gesture script parser and headless runner
//! - **`ui`:** MVC controller, and the GTK4 view (feature `gui`)
//!
//! # Examples
//!
//! ## Driving a gesture
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use swipe_deck::config::SwipeConfig;
//! use swipe_deck::core::{Decision, GestureController, ManualClock, Point};
//!
//! let clock = ManualClock::new();
//! let decided = Rc::new(RefCell::new(None));
//! let sink = decided.clone();
//!
//! let mut gesture = GestureController::new(
//!     SwipeConfig::default(),
//!     Rc::new(clock.clone()),
//!     move |decision| *sink.borrow_mut() = Some(decision),
//! );
//!
//! gesture.begin_drag(Point::new(200.0, 300.0));
//! gesture.update_drag(Point::new(90.0, 310.0));
//! gesture.end_drag();
//!
//! clock.advance_ms(300);
//! gesture.poll();
//! assert_eq!(*decided.borrow(), Some(Decision::Pass));
//! ```
//!
//! ## Checking a tuning file
//!
//! ```no_run
//! use swipe_deck::config::SwipeConfig;
//!
//! let config = SwipeConfig::load(&SwipeConfig::default_path()?)?;
//! println!("threshold: {}px", config.threshold);
//! # Ok::<(), swipe_deck::config::ConfigError>(())
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod deck;
pub mod session;
pub mod sim;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{Decision, GestureController, Offset, Phase, Point};
