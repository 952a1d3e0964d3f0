// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Speech recognition and synthesis.
//!
//! The platform speech engines are external. [`SpeechRecognizer`] and
//! [`SpeechOutput`] are the seams through which the host plugs them in, and
//! [`VoiceAssistant`] drives a capture from button press to interpreted
//! command.

mod assistant;
mod output;
mod recognizer;

pub use assistant::{LISTENING_PROMPT, NOT_SUPPORTED_NOTICE, RECOGNITION_APOLOGY, VoiceAssistant};
pub use output::{SpeechOutput, Utterance};
pub use recognizer::{Alternative, RecognitionResult, RecognitionSettings, SpeechRecognizer};
