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

//! src/config/parser.rs
//!
//! Tuning file parser
//!
//! Parses `swipe.conf` files into raw `key = value` settings. It handles:
//! - Comments (`#` to end of line) and blank lines
//! - Arbitrary whitespace around `=`
//! - Line numbers for error reporting
//!
//! Typed conversion and validation happen in `SwipeConfig`, not here.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::rest,
    IResult, Parser,
};

use crate::config::ConfigError;

/// A raw setting as it appears in the file
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    /// 1-based line number
    pub line: usize,
}

/// Parse a complete tuning file
///
/// # Returns
/// Settings in file order, or the first syntax error with its line number
///
/// # Example
/// ```
/// use swipe_deck::config::parser::parse_settings;
///
/// let settings = parse_settings("# tuning\nthreshold = 96\n")?;
/// assert_eq!(settings[0].key, "threshold");
/// assert_eq!(settings[0].value, "96");
/// # Ok::<(), swipe_deck::config::ConfigError>(())
/// ```
pub fn parse_settings(content: &str) -> Result<Vec<Setting>, ConfigError> {
    let mut settings = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        let line_trimmed = strip_comment(line).trim();
        if line_trimmed.is_empty() {
            continue;
        }

        match parse_setting_line(line_trimmed) {
            Ok((_, (key, value))) if !value.is_empty() => settings.push(Setting {
                key: key.to_string(),
                value: value.to_string(),
                line: line_num,
            }),
            Ok((_, (key, _))) => {
                return Err(ConfigError::Syntax {
                    line: line_num,
                    message: format!("missing value for '{}'", key),
                });
            }
            Err(e) => {
                return Err(ConfigError::Syntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        }
    }

    Ok(settings)
}

/// Parse a single `key = value` line (comment already stripped)
pub fn parse_setting_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, value) = rest.parse(input)?;

    Ok((input, (key, value.trim())))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
