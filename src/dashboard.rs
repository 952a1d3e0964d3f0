// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI event wiring.
//!
//! [`HomeEvents`] lists what the on-screen controls can do. [`Dashboard`]
//! implements it by routing each control to the device state model or the
//! voice assistant, so a host only has to translate its widgets' events into
//! these calls.

use std::sync::Arc;

use crate::error::{Result, SpeechError};
use crate::home::{Home, Outcome};
use crate::interpreter::{CommandInterpreter, Intent};
use crate::speech::{SpeechRecognizer, VoiceAssistant};

/// Text of the help panel.
pub const HELP_TEXT: &str = "Voice Commands:
• \"Turn on/off light\"
• \"Set temperature to [60-80]\"
• \"Lock/unlock door\"
• \"Help\" - Show this menu
• \"Emergency\" - Call for help

You can also use the buttons to control devices directly.
For emergency assistance, press the red button at the bottom.";

/// Events raised by the on-screen controls.
pub trait HomeEvents {
    /// The light switch was flipped to `on`.
    fn on_light_toggle(&self, on: bool) -> Outcome;

    /// A thermostat button was pressed; `delta` is usually +1 or -1.
    fn on_temperature_change(&self, delta: i32) -> Outcome;

    /// The door button was pressed.
    fn on_door_toggle(&self) -> Outcome;

    /// The emergency button was pressed.
    fn on_emergency(&self) -> Outcome;

    /// A command was typed or otherwise delivered as text.
    fn on_voice_command(&self, transcript: &str) -> Intent;

    /// The help button was pressed.
    fn on_help(&self);

    /// The voice assistant button was pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if speech recognition is unavailable or refuses to
    /// start.
    fn on_voice_button(&self) -> std::result::Result<(), SpeechError>;
}

/// The control panel of one home session.
///
/// # Examples
///
/// ```
/// use hearth_voice::dashboard::{Dashboard, HomeEvents};
/// use hearth_voice::Home;
///
/// let home = Home::builder().build();
/// let dashboard = Dashboard::new(home.clone(), None).unwrap();
///
/// dashboard.on_temperature_change(1);
/// dashboard.on_temperature_change(1);
/// assert_eq!(home.temperature().value(), 74);
/// ```
#[derive(Debug)]
pub struct Dashboard {
    assistant: VoiceAssistant,
}

impl Dashboard {
    /// Creates the panel for `home`, using `recognizer` for voice input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if the intent table fails to compile.
    pub fn new(home: Home, recognizer: Option<Arc<dyn SpeechRecognizer>>) -> Result<Self> {
        let interpreter = CommandInterpreter::new(home)?;
        Ok(Self {
            assistant: VoiceAssistant::new(interpreter, recognizer),
        })
    }

    /// Returns the voice assistant, to which the host forwards recognizer
    /// events.
    #[must_use]
    pub fn assistant(&self) -> &VoiceAssistant {
        &self.assistant
    }

    /// Returns the home this panel controls.
    #[must_use]
    pub fn home(&self) -> &Home {
        self.assistant.interpreter().home()
    }
}

impl HomeEvents for Dashboard {
    fn on_light_toggle(&self, on: bool) -> Outcome {
        self.home().set_light(on)
    }

    fn on_temperature_change(&self, delta: i32) -> Outcome {
        self.home().adjust_temperature(delta)
    }

    fn on_door_toggle(&self) -> Outcome {
        self.home().toggle_door()
    }

    fn on_emergency(&self) -> Outcome {
        self.home().trigger_emergency()
    }

    fn on_voice_command(&self, transcript: &str) -> Intent {
        self.assistant.interpreter().process(transcript)
    }

    fn on_help(&self) {
        self.home().presenter().show_alert(HELP_TEXT);
    }

    fn on_voice_button(&self) -> std::result::Result<(), SpeechError> {
        self.assistant.toggle_listening()
    }
}
