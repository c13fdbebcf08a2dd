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

//! src/sim/runner.rs
//!
//! Drives a `DiscoveryController` from a parsed script on a `ManualClock`
//! and records what happened.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::api::DiscoveryApi;
use crate::core::{Clock, Decision, ManualClock, Offset, Phase};
use crate::sim::script::{Command, Step};
use crate::ui::{DeckEvent, DiscoveryController};

/// Something observable, stamped with simulated time
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceEntry {
    pub at_ms: u64,
    #[serde(flatten)]
    pub kind: TraceKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceKind {
    /// A script command was applied
    Input { line: usize, command: String },
    /// The card moved during a drag
    Drag {
        offset: Offset,
        rotation_deg: f64,
        tint: Option<Decision>,
        overlay_opacity: f64,
    },
    /// The gesture state machine changed phase
    Phase { phase: Phase },
    /// Deck-level outcome
    Deck { event: DeckEvent },
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}ms  ", self.at_ms)?;
        match &self.kind {
            TraceKind::Input { line, command } => write!(f, "> {} (line {})", command, line),
            TraceKind::Drag {
                offset,
                rotation_deg,
                tint,
                overlay_opacity,
            } => {
                write!(f, "  drag {} rotate {:.2}deg", offset, rotation_deg)?;
                if let Some(tint) = tint {
                    write!(f, " tint {} {:.2}", tint, overlay_opacity)?;
                }
                Ok(())
            }
            TraceKind::Phase { phase } => write!(f, "  phase -> {}", phase),
            TraceKind::Deck { event } => match event {
                DeckEvent::Decided {
                    profile_id,
                    decision,
                } => write!(f, "  decided {} on {}", decision, profile_id),
                DeckEvent::Matched { profile_id } => write!(f, "  matched with {}", profile_id),
                DeckEvent::Failed { message, .. } => write!(f, "  error: {}", message),
                DeckEvent::Exhausted => write!(f, "  deck exhausted"),
            },
        }
    }
}

/// Script runner
pub struct Runner<'a> {
    controller: DiscoveryController,
    clock: ManualClock,
    api: &'a dyn DiscoveryApi,
    last_phase: Phase,
    trace: Vec<TraceEntry>,
}

impl<'a> Runner<'a> {
    /// `clock` must be the clock `controller` was built with
    pub fn new(controller: DiscoveryController, clock: ManualClock, api: &'a dyn DiscoveryApi) -> Self {
        let last_phase = controller.gesture().phase();
        Self {
            controller,
            clock,
            api,
            last_phase,
            trace: Vec::new(),
        }
    }

    /// Runs every step in order
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.step(step);
        }
    }

    /// Applies one step and records its effects
    pub fn step(&mut self, step: &Step) {
        self.record(TraceKind::Input {
            line: step.line,
            command: step.command.to_string(),
        });

        match step.command {
            Command::Down(point) => self.controller.pointer_down(point),
            Command::Move(point) => {
                self.controller.pointer_move(point);
                if self.controller.gesture().phase() == Phase::Dragging {
                    self.record_drag();
                }
            }
            Command::Up | Command::Leave | Command::Cancel => self.controller.pointer_up(),
            Command::Press(decision) => self.controller.press(decision),
            Command::Wait(ms) => self.wait(Duration::from_millis(ms)),
            Command::Flush => {
                self.controller.flush_confirmations(self.api);
            }
        }

        self.observe();
    }

    pub fn controller(&self) -> &DiscoveryController {
        &self.controller
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn into_trace(self) -> Vec<TraceEntry> {
        self.trace
    }

    fn wait(&mut self, by: Duration) {
        let target = self.clock.now() + by;

        // Stop at each deadline so every intermediate phase is observed
        while let Some(due) = self.controller.next_deadline().filter(|due| *due <= target) {
            self.clock.set(due);
            self.controller.poll();
            self.observe();
        }

        self.clock.set(target);
        self.controller.poll();
    }

    fn observe(&mut self) {
        let phase = self.controller.gesture().phase();
        if phase != self.last_phase {
            self.last_phase = phase;
            self.record(TraceKind::Phase { phase });
        }

        for event in self.controller.drain_events() {
            self.record(TraceKind::Deck { event });
        }
    }

    fn record_drag(&mut self) {
        let card = self.controller.card_style();
        let overlay = self.controller.overlay_style();
        self.record(TraceKind::Drag {
            offset: self.controller.gesture().offset(),
            rotation_deg: card.rotation_deg,
            tint: overlay.tint,
            overlay_opacity: overlay.opacity,
        });
    }

    fn record(&mut self, kind: TraceKind) {
        let at_ms = u64::try_from(self.clock.now().as_millis()).unwrap_or(u64::MAX);
        self.trace.push(TraceEntry { at_ms, kind });
    }
}
