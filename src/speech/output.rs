// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Speech synthesis seam.

use crate::config::VoiceSettings;

/// A message to be read aloud, with the voice parameters to use.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    text: String,
    volume: f32,
    rate: f32,
    pitch: f32,
    lang: String,
}

impl Utterance {
    /// Creates an utterance using the given voice settings.
    #[must_use]
    pub fn new(text: impl Into<String>, voice: &VoiceSettings) -> Self {
        Self {
            text: text.into(),
            volume: voice.volume,
            rate: voice.rate,
            pitch: voice.pitch,
            lang: voice.lang.clone(),
        }
    }

    /// Returns the text to speak.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the volume (0.0-1.0).
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Returns the speaking rate, where 1.0 is normal speed.
    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Returns the pitch, where 1.0 is the default voice pitch.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Returns the BCP 47 language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

/// Renders text as audio.
///
/// Speaking is fire-and-forget: the core never waits for playback and
/// receives no acknowledgement.
pub trait SpeechOutput: Send + Sync {
    /// Queues an utterance for playback.
    fn speak(&self, utterance: &Utterance);
}
