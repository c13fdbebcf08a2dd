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

//! src/core/mod.rs
//!
//! Core gesture logic
//!
//! This module contains the swipe gesture state machine and everything it
//! derives, including:
//! - Type definitions for points, offsets, decisions and phases
//! - The release policy and fly-out targets
//! - Pure card/overlay style derivations
//! - An injectable clock for the timed transitions
//!
//! Nothing here touches GTK, files or the network, so the whole state
//! machine is unit tested without a display server or wall-clock waits.

pub mod clock;
pub mod gesture;
pub mod policy;
pub mod style;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use gesture::{GestureController, Transition};
pub use style::{CardStyle, Cursor, OverlayStyle, Rgba};
pub use types::*;

#[cfg(test)]
mod tests;
