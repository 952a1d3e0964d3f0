// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::HomeState;

/// Default time a feedback banner stays on screen.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_secs(3);

/// Default length of the emergency visual mode.
pub const DEFAULT_EMERGENCY_DURATION: Duration = Duration::from_secs(5);

/// Configuration for a [`Home`](crate::Home) session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hearth_voice::HomeConfig;
/// use hearth_voice::state::HomeState;
/// use hearth_voice::types::PowerState;
///
/// let config = HomeConfig::new()
///     .with_initial_state(HomeState::new().with_light(PowerState::Off))
///     .with_feedback_duration(Duration::from_secs(2));
///
/// assert_eq!(config.feedback_duration, Duration::from_secs(2));
/// assert_eq!(config.emergency_duration, Duration::from_secs(5));
///
/// // The same settings from JSON (durations in milliseconds)
/// let config = HomeConfig::from_json(r#"{
///     "initial_state": { "light": "off", "thermostat": 68 },
///     "feedback_duration_ms": 2000
/// }"#).unwrap();
/// assert_eq!(config.initial_state.temperature().value(), 68);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Device states at session start.
    pub initial_state: HomeState,
    /// How long feedback banners stay visible.
    #[serde(rename = "feedback_duration_ms", with = "millis")]
    pub feedback_duration: Duration,
    /// How long the emergency visual mode stays on.
    #[serde(rename = "emergency_duration_ms", with = "millis")]
    pub emergency_duration: Duration,
    /// Speech synthesis and recognition settings.
    pub voice: VoiceSettings,
}

impl HomeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed or a value is invalid,
    /// such as an initial thermostat set point outside 60-80.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the device states at session start.
    #[must_use]
    pub fn with_initial_state(mut self, state: HomeState) -> Self {
        self.initial_state = state;
        self
    }

    /// Sets how long feedback banners stay visible.
    #[must_use]
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    /// Sets how long the emergency visual mode stays on.
    #[must_use]
    pub fn with_emergency_duration(mut self, duration: Duration) -> Self {
        self.emergency_duration = duration;
        self
    }

    /// Sets the voice settings.
    #[must_use]
    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            initial_state: HomeState::default(),
            feedback_duration: DEFAULT_FEEDBACK_DURATION,
            emergency_duration: DEFAULT_EMERGENCY_DURATION,
            voice: VoiceSettings::default(),
        }
    }
}

/// Speech settings shared by synthesis and recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// BCP 47 language tag.
    pub lang: String,
    /// Playback volume (0.0-1.0).
    pub volume: f32,
    /// Speaking rate; slightly below 1.0 is easier to follow.
    pub rate: f32,
    /// Voice pitch.
    pub pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            volume: 1.0,
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
