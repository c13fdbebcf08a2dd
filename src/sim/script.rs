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

//! src/sim/script.rs
//!
//! Gesture script parser
//!
//! A script is one command per line:
//!
//! ```text
//! # drag right past the threshold
//! down 100 200
//! move 220 205
//! up
//! wait 400
//! press superlike
//! wait 400
//! flush
//! ```
//!
//! `leave` and `cancel` end a drag like `up` does. Coordinates are logical
//! pixels, `wait` takes milliseconds.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{space1, u64 as millis},
    combinator::{all_consuming, map, map_res, value},
    number::complete::double,
    IResult, Parser,
};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::{Decision, Point};

/// Errors raised while reading a gesture script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// First word is not a known command
    #[error("Unknown command '{command}' on line {line}")]
    UnknownCommand { command: String, line: usize },

    /// Known command with bad arguments
    #[error("Parse error on line {line}: expected `{usage}`")]
    Syntax { line: usize, usage: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One script instruction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Down(Point),
    Move(Point),
    Up,
    Leave,
    Cancel,
    Press(Decision),
    /// Advance the clock, firing every timer on the way
    Wait(u64),
    /// Send pending confirmations to the backend
    Flush,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Down(p) => write!(f, "down {} {}", p.x, p.y),
            Command::Move(p) => write!(f, "move {} {}", p.x, p.y),
            Command::Up => write!(f, "up"),
            Command::Leave => write!(f, "leave"),
            Command::Cancel => write!(f, "cancel"),
            Command::Press(decision) => write!(f, "press {}", decision),
            Command::Wait(ms) => write!(f, "wait {}", ms),
            Command::Flush => write!(f, "flush"),
        }
    }
}

/// A command with the line it came from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

/// Parse a complete script
///
/// # Example
/// ```
/// use swipe_deck::sim::script::{parse_script, Command};
///
/// let steps = parse_script("press like\nwait 350\n")?;
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[1].command, Command::Wait(350));
/// # Ok::<(), swipe_deck::sim::ScriptError>(())
/// ```
pub fn parse_script(content: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        let Some(word) = line_trimmed.split_whitespace().next() else {
            continue;
        };

        let Some(usage) = usage(word) else {
            return Err(ScriptError::UnknownCommand {
                command: word.to_string(),
                line: line_num,
            });
        };

        match all_consuming(parse_command).parse(line_trimmed) {
            Ok((_, command)) => steps.push(Step {
                line: line_num,
                command,
            }),
            Err(_) => {
                return Err(ScriptError::Syntax {
                    line: line_num,
                    usage,
                })
            }
        }
    }

    Ok(steps)
}

/// Reads and parses a script file
pub fn load_script(path: &Path) -> Result<Vec<Step>, ScriptError> {
    let content = fs::read_to_string(path)?;
    parse_script(&content)
}

/// Parse a single command (comment already stripped)
pub fn parse_command(input: &str) -> IResult<&str, Command> {
    alt((
        map((tag("down"), space1, point), |(_, _, p)| Command::Down(p)),
        map((tag("move"), space1, point), |(_, _, p)| Command::Move(p)),
        map(
            (tag("press"), space1, map_res(word, str::parse::<Decision>)),
            |(_, _, decision)| Command::Press(decision),
        ),
        map((tag("wait"), space1, millis), |(_, _, ms)| Command::Wait(ms)),
        value(Command::Up, tag("up")),
        value(Command::Leave, tag("leave")),
        value(Command::Cancel, tag("cancel")),
        value(Command::Flush, tag("flush")),
    ))
    .parse(input)
}

fn point(input: &str) -> IResult<&str, Point> {
    map((double, space1, double), |(x, _, y)| Point::new(x, y)).parse(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-').parse(input)
}

fn usage(command: &str) -> Option<&'static str> {
    Some(match command {
        "down" => "down X Y",
        "move" => "move X Y",
        "up" => "up",
        "leave" => "leave",
        "cancel" => "cancel",
        "press" => "press like|pass|superlike",
        "wait" => "wait MS",
        "flush" => "flush",
        _ => return None,
    })
}
