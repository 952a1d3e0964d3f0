// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hearth_voice` library.
//!
//! Device operations never fail with an error: a rejected or declined request
//! is reported to the user as feedback and described by an
//! [`Outcome`](crate::Outcome). The types here cover the remaining failures:
//! value validation, configuration parsing, intent pattern compilation and
//! speech platform errors.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// An intent pattern failed to compile.
    #[error("invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The speech platform reported an error.
    #[error("speech error: {0}")]
    Speech(#[from] SpeechError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// An invalid lock state string was provided.
    #[error("invalid lock state: {0}")]
    InvalidLockState(String),

    /// An unknown device name was provided.
    #[error("unknown device: {0}")]
    UnknownDevice(String),
}

/// Errors reported by a speech recognition platform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// No recognizer is available on this platform.
    #[error("speech recognition is not supported")]
    NotSupported,

    /// Capture ended without any recognizable speech.
    #[error("no speech detected")]
    NoSpeech,

    /// Microphone access was refused.
    #[error("microphone access denied")]
    NotAllowed,

    /// Any other platform failure.
    #[error("{0}")]
    Platform(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
