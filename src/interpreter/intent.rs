// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classified user intents.

use std::borrow::Cow;
use std::fmt;

/// Spoken when an utterance matches no intent.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I didn't understand that command. Please try again or say 'help' for assistance.";

/// Spoken in reply to a help request.
pub const VOICE_HELP: &str = "You can control the lights by saying 'turn on lights' or 'turn off lights'. \
     Control the temperature by saying 'set temperature to 72'. \
     Control the door by saying 'lock door' or 'unlock door'.";

/// Spoken before emergency services are contacted.
pub const EMERGENCY_RESPONSE: &str = "Calling emergency assistance now";

/// The entries of the intent table, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Switch the living room light.
    Light,
    /// Set the thermostat.
    Temperature,
    /// Lock or unlock the door.
    Door,
    /// Explain the available commands.
    Help,
    /// Call for help.
    Emergency,
}

impl IntentKind {
    /// Every kind, in the order utterances are tested against them.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Temperature,
        Self::Door,
        Self::Help,
        Self::Emergency,
    ];

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Temperature => "temperature",
            Self::Door => "door",
            Self::Help => "help",
            Self::Emergency => "emergency",
        }
    }

    pub(crate) const fn pattern(&self) -> &'static str {
        match self {
            Self::Light => r"(turn|switch) (on|off) (the )?(living room )?light",
            Self::Temperature => r"set (the )?temperature to (\d+)",
            Self::Door => r"(lock|unlock) (the )?door",
            Self::Help => r"(help|assist|support)",
            Self::Emergency => r"(emergency|help me|sos)",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The meaning extracted from one utterance.
///
/// # Examples
///
/// ```
/// use hearth_voice::interpreter::Intent;
///
/// let intent = Intent::Temperature { degrees: 68 };
/// assert_eq!(intent.acknowledgement(), "Setting temperature to 68 degrees");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Turn the light on or off.
    Light {
        /// Requested light state.
        on: bool,
    },
    /// Set the thermostat. The value is not range checked here.
    Temperature {
        /// Requested set point in °F.
        degrees: i32,
    },
    /// Lock or unlock the door.
    Door {
        /// `true` to lock, `false` to unlock.
        lock: bool,
    },
    /// Explain the available commands.
    Help,
    /// Call for help.
    Emergency,
    /// Nothing matched.
    Unknown,
}

impl Intent {
    /// Returns the table entry that produced this intent, or `None` for
    /// [`Intent::Unknown`].
    #[must_use]
    pub const fn kind(&self) -> Option<IntentKind> {
        match self {
            Self::Light { .. } => Some(IntentKind::Light),
            Self::Temperature { .. } => Some(IntentKind::Temperature),
            Self::Door { .. } => Some(IntentKind::Door),
            Self::Help => Some(IntentKind::Help),
            Self::Emergency => Some(IntentKind::Emergency),
            Self::Unknown => None,
        }
    }

    /// Returns what the assistant says in reply to this intent.
    #[must_use]
    pub fn acknowledgement(&self) -> Cow<'static, str> {
        match self {
            Self::Light { on } => {
                let state = if *on { "on" } else { "off" };
                Cow::Owned(format!("Turning {state} the living room light"))
            }
            Self::Temperature { degrees } => {
                Cow::Owned(format!("Setting temperature to {degrees} degrees"))
            }
            Self::Door { lock: true } => Cow::Borrowed("Locking the door"),
            Self::Door { lock: false } => Cow::Borrowed("Unlocking the door"),
            Self::Help => Cow::Borrowed(VOICE_HELP),
            Self::Emergency => Cow::Borrowed(EMERGENCY_RESPONSE),
            Self::Unknown => Cow::Borrowed(FALLBACK_RESPONSE),
        }
    }
}
