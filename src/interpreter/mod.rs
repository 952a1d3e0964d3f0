// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command interpreter.
//!
//! Turns one recognized utterance into a device operation. The utterance is
//! tested against a fixed table of intent patterns in priority order:
//!
//! | Priority | Intent | Pattern |
//! |----------|--------|---------|
//! | 1 | [`Intent::Light`] | `(turn\|switch) (on\|off) (the )?(living room )?light` |
//! | 2 | [`Intent::Temperature`] | `set (the )?temperature to (\d+)` |
//! | 3 | [`Intent::Door`] | `(lock\|unlock) (the )?door` |
//! | 4 | [`Intent::Help`] | `(help\|assist\|support)` |
//! | 5 | [`Intent::Emergency`] | `(emergency\|help me\|sos)` |
//!
//! The first match wins. The interpreter speaks an acknowledgement and then
//! calls the matching [`Home`] operation, which gives its own feedback.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::Home;
//! use hearth_voice::interpreter::{CommandInterpreter, Intent};
//!
//! let home = Home::builder().build();
//! let interpreter = CommandInterpreter::new(home.clone()).unwrap();
//!
//! assert_eq!(
//!     interpreter.process("set temperature to 68"),
//!     Intent::Temperature { degrees: 68 }
//! );
//! assert_eq!(home.temperature().value(), 68);
//! ```

mod intent;
mod patterns;

pub use intent::{EMERGENCY_RESPONSE, FALLBACK_RESPONSE, Intent, IntentKind, VOICE_HELP};
pub use patterns::IntentTable;

use crate::error::Result;
use crate::home::Home;

/// Executes spoken commands against a [`Home`].
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    home: Home,
    table: IntentTable,
}

impl CommandInterpreter {
    /// Creates an interpreter acting on `home`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if the intent table fails to compile.
    pub fn new(home: Home) -> Result<Self> {
        Ok(Self {
            home,
            table: IntentTable::new()?,
        })
    }

    /// Classifies `utterance` without acting on it.
    #[must_use]
    pub fn classify(&self, utterance: &str) -> Intent {
        self.table.classify(utterance)
    }

    /// Classifies `utterance` and carries it out.
    ///
    /// Returns the intent that was acted on. Unrecognized input is answered
    /// with the fallback message and leaves every device unchanged.
    pub fn process(&self, utterance: &str) -> Intent {
        let intent = self.classify(utterance);
        tracing::debug!(utterance, ?intent, "Processing command");

        self.home.speak(&intent.acknowledgement());

        match intent {
            Intent::Light { on } => {
                self.home.set_light(on);
            }
            Intent::Temperature { degrees } => {
                self.home.set_temperature(degrees);
            }
            Intent::Door { lock } => {
                self.home.set_door_locked(lock);
            }
            Intent::Emergency => {
                self.home.trigger_emergency();
            }
            Intent::Help | Intent::Unknown => {}
        }

        intent
    }

    /// Returns the home this interpreter acts on.
    #[must_use]
    pub fn home(&self) -> &Home {
        &self.home
    }
}
