//! Decisions awaiting backend confirmation
//!
//! The gesture controller commits optimistically; this queue is the only
//! place that knows a decision is still unconfirmed. Failure handling
//! (error banner) hangs off the drained entries, never off the
//! gesture state machine.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::api::DecisionRequest;
use crate::core::Decision;
use crate::deck::Profile;

/// A committed decision not yet acknowledged by the backend
#[derive(Clone, Debug, PartialEq)]
pub struct PendingConfirmation {
    /// Monotonically increasing per queue
    pub ticket: u64,
    /// The card as it was when decided; outlives any deck refresh
    pub profile: Profile,
    pub decision: Decision,
    pub submitted_at: DateTime<Local>,
}

impl PendingConfirmation {
    pub fn request(&self) -> DecisionRequest {
        DecisionRequest::new(&self.profile.id, self.decision)
    }
}

/// FIFO of unconfirmed decisions
#[derive(Debug, Default)]
pub struct PendingConfirmations {
    queue: VecDeque<PendingConfirmation>,
    next_ticket: u64,
}

impl PendingConfirmations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decision and returns its ticket
    pub fn enqueue(&mut self, profile: Profile, decision: Decision) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        self.queue.push_back(PendingConfirmation {
            ticket,
            profile,
            decision,
            submitted_at: Local::now(),
        });

        ticket
    }

    /// Takes every pending entry, oldest first
    pub fn drain(&mut self) -> Vec<PendingConfirmation> {
        self.queue.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingConfirmation> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
