// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ordered intent pattern table.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

use super::intent::{Intent, IntentKind};

/// A compiled entry of the table.
#[derive(Debug, Clone)]
struct IntentPattern {
    kind: IntentKind,
    regex: Regex,
}

/// Classifies utterances against the intent patterns, first match wins.
///
/// Matching is case-insensitive and unanchored, so a pattern may match
/// anywhere in the utterance. Parameters are then extracted from the whole
/// lower-cased utterance:
///
/// - light: on if the utterance contains `"on"` anywhere, otherwise off
/// - door: unlock if the utterance contains `"unlock"`, otherwise lock
/// - temperature: the first run of digits anywhere in the utterance
///
/// Both substring rules can be fooled by unrelated words ("turn off the
/// light but leave it on" turns the light on). The numeric rule takes the
/// first number even if it precedes the matched phrase. Such numbers are
/// usually rejected by the thermostat range check.
#[derive(Debug, Clone)]
pub struct IntentTable {
    patterns: Vec<IntentPattern>,
    digits: Regex,
}

impl IntentTable {
    /// Compiles the table.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        let patterns = IntentKind::ALL
            .into_iter()
            .map(|kind| -> Result<IntentPattern> {
                Ok(IntentPattern {
                    kind,
                    regex: compile(kind.pattern())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            digits: compile(r"\d+")?,
        })
    }

    /// Returns the kind of the first pattern matching `utterance`.
    #[must_use]
    pub fn matching_kind(&self, utterance: &str) -> Option<IntentKind> {
        self.patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(utterance))
            .map(|pattern| pattern.kind)
    }

    /// Classifies `utterance` and extracts its parameters.
    ///
    /// Never fails: anything unrecognized is [`Intent::Unknown`].
    #[must_use]
    pub fn classify(&self, utterance: &str) -> Intent {
        let Some(kind) = self.matching_kind(utterance) else {
            return Intent::Unknown;
        };

        let lowered = utterance.to_lowercase();
        match kind {
            IntentKind::Light => Intent::Light {
                on: lowered.contains("on"),
            },
            IntentKind::Temperature => self
                .first_number(&lowered)
                .map_or(Intent::Unknown, |degrees| Intent::Temperature { degrees }),
            IntentKind::Door => Intent::Door {
                lock: !lowered.contains("unlock"),
            },
            IntentKind::Help => Intent::Help,
            IntentKind::Emergency => Intent::Emergency,
        }
    }

    fn first_number(&self, text: &str) -> Option<i32> {
        // A run of ASCII digits only fails to parse on overflow
        self.digits
            .find(text)
            .map(|m| m.as_str().parse::<i32>().unwrap_or(i32::MAX))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> IntentTable {
        IntentTable::new().unwrap()
    }

    #[test]
    fn light_commands() {
        let table = table();
        assert_eq!(table.classify("turn on the light"), Intent::Light { on: true });
        assert_eq!(table.classify("switch off light"), Intent::Light { on: false });
        assert_eq!(
            table.classify("Turn Off The Living Room Light"),
            Intent::Light { on: false }
        );
    }

    #[test]
    fn light_substring_quirk() {
        let table = table();
        assert_eq!(
            table.classify("turn off the light but leave it on"),
            Intent::Light { on: true }
        );
        // "on" hidden inside another word
        assert_eq!(
            table.classify("please turn off the light, wonderful"),
            Intent::Light { on: true }
        );
    }

    #[test]
    fn temperature_commands() {
        let table = table();
        assert_eq!(
            table.classify("set temperature to 68"),
            Intent::Temperature { degrees: 68 }
        );
        assert_eq!(
            table.classify("SET THE TEMPERATURE TO 95"),
            Intent::Temperature { degrees: 95 }
        );
    }

    #[test]
    fn temperature_takes_first_number() {
        let table = table();
        assert_eq!(
            table.classify("in room 2 set temperature to 70"),
            Intent::Temperature { degrees: 2 }
        );
    }

    #[test]
    fn temperature_overflow_saturates() {
        assert_eq!(
            table().classify("set temperature to 99999999999999"),
            Intent::Temperature { degrees: i32::MAX }
        );
    }

    #[test]
    fn temperature_needs_ascii_digits() {
        // Arabic-Indic digits are not ASCII digits
        assert_eq!(
            table().classify("set temperature to \u{0667}\u{0662}"),
            Intent::Unknown
        );
    }

    #[test]
    fn door_commands() {
        let table = table();
        assert_eq!(table.classify("lock the door"), Intent::Door { lock: true });
        assert_eq!(table.classify("unlock door"), Intent::Door { lock: false });
        assert_eq!(table.classify("Unlock The Door"), Intent::Door { lock: false });
    }

    #[test]
    fn help_and_emergency() {
        let table = table();
        assert_eq!(table.classify("help"), Intent::Help);
        assert_eq!(table.classify("I need some assistance"), Intent::Help);
        assert_eq!(table.classify("emergency"), Intent::Emergency);
        assert_eq!(table.classify("sos"), Intent::Emergency);
    }

    #[test]
    fn help_me_is_help() {
        // The help entry comes first and also matches
        assert_eq!(table().classify("help me"), Intent::Help);
    }

    #[test]
    fn earlier_entries_win() {
        let table = table();
        assert_eq!(
            table.matching_kind("turn on the light and lock the door"),
            Some(IntentKind::Light)
        );
        assert_eq!(
            table.matching_kind("lock the door, emergency"),
            Some(IntentKind::Door)
        );
    }

    #[test]
    fn unknown_input() {
        let table = table();
        for utterance in ["", "   ", "make me a sandwich", "turn the light", "\u{1F600}"] {
            assert_eq!(table.classify(utterance), Intent::Unknown, "{utterance:?}");
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let table = table();
        let utterance = "switch on the living room light";
        let first = table.classify(utterance);
        for _ in 0..10 {
            assert_eq!(table.classify(utterance), first);
        }
    }
}
