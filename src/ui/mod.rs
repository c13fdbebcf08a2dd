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

//! User interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: Deck, pending confirmations, session (in `deck` and `session`)
//! - **View**: GTK4 components (in `components/`, feature `gui`)
//! - **Controller**: Mediates between Model and View (in `controller.rs`)
//!
//! The controller has no GTK dependency, so the simulator and the tests
//! drive it directly.
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // MVC Controller
//! ├── app.rs          // GTK4 Application setup
//! ├── actions.rs      // GTK action setup (quit, refresh)
//! ├── file_watcher.rs // swipe.conf hot reload
//! └── components/     // Reusable UI widgets
//! ```

#[cfg(feature = "gui")]
mod actions;
#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
pub mod controller;
#[cfg(feature = "gui")]
pub mod file_watcher;

pub use controller::{DeckEvent, DiscoveryController};

#[cfg(feature = "gui")]
pub use app::App;

#[cfg(test)]
mod tests;
