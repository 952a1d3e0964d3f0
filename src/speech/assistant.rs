// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Voice assistant listening lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::SpeechError;
use crate::interpreter::{CommandInterpreter, Intent};

use super::{RecognitionResult, RecognitionSettings, SpeechRecognizer};

/// Spoken when capture starts.
pub const LISTENING_PROMPT: &str = "I'm listening. How can I help?";

/// Spoken when the recognizer reports an error.
pub const RECOGNITION_APOLOGY: &str = "I'm sorry, I couldn't understand that. Please try again.";

/// Shown once when no recognizer is available.
pub const NOT_SUPPORTED_NOTICE: &str = "Speech recognition is not supported in your browser. \
     Please use Chrome for the best experience.";

/// Connects a platform recognizer to a [`CommandInterpreter`].
///
/// The host forwards the recognizer's events to [`on_start`](Self::on_start),
/// [`on_result`](Self::on_result), [`on_error`](Self::on_error) and
/// [`on_end`](Self::on_end). Each capture is single-shot: only the first
/// final result is interpreted.
///
/// # Examples
///
/// ```
/// use hearth_voice::Home;
/// use hearth_voice::interpreter::CommandInterpreter;
/// use hearth_voice::speech::{RecognitionResult, VoiceAssistant};
///
/// let home = Home::builder().build();
/// let assistant = VoiceAssistant::new(CommandInterpreter::new(home.clone()).unwrap(), None);
///
/// // Transcripts can still be delivered without a recognizer
/// assistant.on_result(&[RecognitionResult::final_transcript("Turn Off The Light")]);
/// assert!(!home.light().is_on());
/// ```
pub struct VoiceAssistant {
    interpreter: CommandInterpreter,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    settings: RecognitionSettings,
    listening: AtomicBool,
}

impl VoiceAssistant {
    /// Creates an assistant.
    ///
    /// Without a recognizer the user is told once that speech recognition is
    /// unavailable, and [`toggle_listening`](Self::toggle_listening) fails.
    pub fn new(
        interpreter: CommandInterpreter,
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
    ) -> Self {
        if recognizer.is_none() {
            tracing::warn!("Speech recognition not supported");
            interpreter.home().presenter().show_alert(NOT_SUPPORTED_NOTICE);
        }

        let lang = interpreter.home().config().voice.lang.clone();
        Self {
            settings: RecognitionSettings::single_shot(lang),
            interpreter,
            recognizer,
            listening: AtomicBool::new(false),
        }
    }

    /// Starts a capture if idle, stops the current one otherwise.
    ///
    /// The listening indicator only changes once the recognizer reports
    /// [`on_start`](Self::on_start) or [`on_end`](Self::on_end).
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::NotSupported`] without a recognizer, or the
    /// recognizer's own error if it refuses to start. A refused start is also
    /// handled like [`on_error`](Self::on_error).
    pub fn toggle_listening(&self) -> Result<(), SpeechError> {
        let recognizer = self.recognizer.as_ref().ok_or(SpeechError::NotSupported)?;

        if self.is_listening() {
            tracing::debug!("Stopping capture");
            recognizer.stop();
            return Ok(());
        }

        tracing::debug!(lang = %self.settings.lang, "Starting capture");
        recognizer.start(&self.settings).inspect_err(|err| self.on_error(err))
    }

    /// The recognizer started capturing.
    pub fn on_start(&self) {
        tracing::info!("Listening");
        self.set_listening(true);
        self.interpreter.home().speak(LISTENING_PROMPT);
    }

    /// The recognizer stopped capturing.
    pub fn on_end(&self) {
        tracing::debug!("Capture ended");
        self.set_listening(false);
    }

    /// The recognizer produced results.
    ///
    /// The best transcript of the first final result is lower-cased and
    /// interpreted. Interim results are ignored. Returns the intent acted on,
    /// or `None` if there was no final transcript.
    pub fn on_result(&self, results: &[RecognitionResult]) -> Option<Intent> {
        let transcript = results
            .iter()
            .find(|result| result.is_final)
            .and_then(RecognitionResult::best)?
            .to_lowercase();

        Some(self.interpreter.process(&transcript))
    }

    /// The recognizer failed.
    pub fn on_error(&self, err: &SpeechError) {
        tracing::warn!(error = %err, "Speech recognition error");
        self.interpreter.home().speak(RECOGNITION_APOLOGY);
        self.set_listening(false);
    }

    /// Returns `true` while a capture is in progress.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Returns `true` if a recognizer is available.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Returns the interpreter that handles transcripts.
    #[must_use]
    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    fn set_listening(&self, listening: bool) {
        self.listening.store(listening, Ordering::SeqCst);
        self.interpreter.home().presenter().set_listening(listening);
    }
}

impl std::fmt::Debug for VoiceAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceAssistant")
            .field("supported", &self.is_supported())
            .field("listening", &self.is_listening())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
