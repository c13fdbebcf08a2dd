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

//! Discovery deck
//!
//! The ordered stack of profiles awaiting a decision, and the queue of
//! decisions awaiting backend confirmation.
//!
//! The deck advances optimistically: a card leaves the moment its decision
//! is committed, whether or not the backend later confirms it.

pub mod confirmations;

pub use confirmations::{PendingConfirmation, PendingConfirmations};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Shown once every profile has been decided
pub const EXHAUSTED_MESSAGE: &str = "That's everyone for now!";

/// The fields of a discovery profile the deck renders
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub age: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub primary_photo: Option<String>,
}

impl Profile {
    pub fn new(id: &str, first_name: &str, age: u32) -> Self {
        Self {
            id: id.to_string(),
            first_name: first_name.to_string(),
            age,
            location: String::new(),
            bio: String::new(),
            interests: Vec::new(),
            primary_photo: None,
        }
    }

    /// First three interests plus a "+N" marker for the rest
    pub fn interest_chips(&self) -> Vec<String> {
        let mut chips: Vec<String> = self.interests.iter().take(3).cloned().collect();
        if self.interests.len() > 3 {
            chips.push(format!("+{}", self.interests.len() - 3));
        }
        chips
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first_name, self.age)
    }
}

/// Loads a JSON array of profiles
pub fn load_profiles(path: &Path) -> anyhow::Result<Vec<Profile>> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read deck {}: {}", path.display(), e))?;
    let profiles = serde_json::from_str(&content)?;
    Ok(profiles)
}

/// Ordered profiles with a cursor on the current card
#[derive(Clone, Debug, Default)]
pub struct Deck {
    profiles: Vec<Profile>,
    current: usize,
}

impl Deck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            current: 0,
        }
    }

    /// Card on top of the stack
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.current)
    }

    /// Card rendered behind the current one
    pub fn next(&self) -> Option<&Profile> {
        self.profiles.get(self.current + 1)
    }

    /// Moves to the next card, returning the one that left
    pub fn advance(&mut self) -> Option<Profile> {
        let left = self.current()?.clone();
        self.current += 1;
        Some(left)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.profiles.len()
    }

    /// Cards not yet decided, including the current one
    pub fn remaining(&self) -> usize {
        self.profiles.len().saturating_sub(self.current)
    }

    /// Replaces the stack and starts from its first card
    pub fn refresh(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
        self.current = 0;
    }

    pub fn find(&self, profile_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == profile_id)
    }
}

#[cfg(test)]
mod tests;
