// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recording collaborators for unit tests.

use parking_lot::Mutex;

use crate::error::SpeechError;
use crate::feedback::{Feedback, FeedbackId};
use crate::presenter::Presenter;
use crate::speech::{RecognitionSettings, SpeechOutput, SpeechRecognizer, Utterance};
use crate::types::{LockState, PowerState, Temperature};

/// One display update, in the order it was received.
#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Light(PowerState),
    Thermostat(Temperature),
    Door(LockState),
    Feedback(String),
    Emergency(bool),
    Listening(bool),
    Alert(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    shown: Mutex<Vec<Shown>>,
    visible: Mutex<Vec<Feedback>>,
}

impl RecordingPresenter {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().clone()
    }

    pub fn feedback_messages(&self) -> Vec<String> {
        self.shown
            .lock()
            .iter()
            .filter_map(|s| match s {
                Shown::Feedback(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.shown
            .lock()
            .iter()
            .filter_map(|s| match s {
                Shown::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Banners shown and not yet dismissed.
    pub fn visible_feedback(&self) -> Vec<String> {
        self.visible
            .lock()
            .iter()
            .map(|f| f.message().to_string())
            .collect()
    }

    pub fn clear(&self) {
        self.shown.lock().clear();
    }

    fn push(&self, shown: Shown) {
        self.shown.lock().push(shown);
    }
}

impl Presenter for RecordingPresenter {
    fn refresh_light(&self, state: PowerState) {
        self.push(Shown::Light(state));
    }

    fn refresh_thermostat(&self, temperature: Temperature) {
        self.push(Shown::Thermostat(temperature));
    }

    fn refresh_door(&self, state: LockState) {
        self.push(Shown::Door(state));
    }

    fn show_feedback(&self, feedback: &Feedback) {
        self.push(Shown::Feedback(feedback.message().to_string()));
        self.visible.lock().push(feedback.clone());
    }

    fn dismiss_feedback(&self, id: FeedbackId) {
        self.visible.lock().retain(|f| f.id() != id);
    }

    fn set_emergency_mode(&self, active: bool) {
        self.push(Shown::Emergency(active));
    }

    fn set_listening(&self, listening: bool) {
        self.push(Shown::Listening(listening));
    }

    fn show_alert(&self, message: &str) {
        self.push(Shown::Alert(message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingSpeech {
    utterances: Mutex<Vec<Utterance>>,
}

impl RecordingSpeech {
    pub fn spoken(&self) -> Vec<String> {
        self.utterances
            .lock()
            .iter()
            .map(|u| u.text().to_string())
            .collect()
    }
}

impl SpeechOutput for RecordingSpeech {
    fn speak(&self, utterance: &Utterance) {
        self.utterances.lock().push(utterance.clone());
    }
}

/// Recognizer that records start/stop calls and can be told to fail.
#[derive(Default)]
pub struct ScriptedRecognizer {
    pub starts: Mutex<Vec<RecognitionSettings>>,
    pub stops: Mutex<u32>,
    pub fail_with: Mutex<Option<SpeechError>>,
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(&self, settings: &RecognitionSettings) -> Result<(), SpeechError> {
        if let Some(err) = self.fail_with.lock().clone() {
            return Err(err);
        }
        self.starts.lock().push(settings.clone());
        Ok(())
    }

    fn stop(&self) {
        *self.stops.lock() += 1;
    }
}
