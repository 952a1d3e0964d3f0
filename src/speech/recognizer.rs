// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Speech recognition seam.
//!
//! The platform recognizer is driven by the host. The core asks it to start
//! or stop capturing, and the host reports what happened back through the
//! [`VoiceAssistant`](super::VoiceAssistant) event methods.

use crate::error::SpeechError;

/// Parameters for a capture session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSettings {
    /// Keep capturing after the first phrase.
    pub continuous: bool,
    /// Deliver partial transcripts while the user is still speaking.
    pub interim_results: bool,
    /// BCP 47 language tag.
    pub lang: String,
}

impl RecognitionSettings {
    /// Single-shot capture with final results only.
    #[must_use]
    pub fn single_shot(lang: impl Into<String>) -> Self {
        Self {
            continuous: false,
            interim_results: false,
            lang: lang.into(),
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self::single_shot("en-US")
    }
}

/// One transcription hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    /// The recognized text.
    pub transcript: String,
    /// Recognizer confidence (0.0-1.0).
    pub confidence: f32,
}

impl Alternative {
    /// Creates an alternative with full confidence.
    #[must_use]
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: 1.0,
        }
    }
}

/// One recognized phrase, with its alternatives ordered best first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    /// `false` for interim hypotheses that may still change.
    pub is_final: bool,
    /// Candidate transcripts, best first.
    pub alternatives: Vec<Alternative>,
}

impl RecognitionResult {
    /// Creates a final result with a single alternative.
    #[must_use]
    pub fn final_transcript(transcript: impl Into<String>) -> Self {
        Self {
            is_final: true,
            alternatives: vec![Alternative::new(transcript)],
        }
    }

    /// Creates an interim result with a single alternative.
    #[must_use]
    pub fn interim_transcript(transcript: impl Into<String>) -> Self {
        Self {
            is_final: false,
            alternatives: vec![Alternative::new(transcript)],
        }
    }

    /// Returns the best transcript, if any.
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.transcript.as_str())
    }
}

/// A platform speech recognizer.
pub trait SpeechRecognizer: Send + Sync {
    /// Starts capturing.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses to start a capture.
    fn start(&self, settings: &RecognitionSettings) -> Result<(), SpeechError>;

    /// Stops the current capture.
    fn stop(&self);
}
