// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for [`Home`] sessions.

use std::sync::Arc;

use crate::config::HomeConfig;
use crate::confirm::{AlwaysDeny, ConfirmationGate};
use crate::presenter::{NullPresenter, Presenter};
use crate::speech::SpeechOutput;

use super::Home;

/// Builder for a [`Home`] session.
///
/// Every collaborator is optional. Without a presenter nothing is displayed,
/// without a speech output nothing is spoken, and without a confirmation gate
/// every confirmation is declined, so unlocking the door and calling for help
/// are unavailable until the host supplies a way to ask the user.
///
/// # Examples
///
/// ```
/// use hearth_voice::{ConfirmPrompt, Home, HomeConfig};
///
/// let home = Home::builder()
///     .with_config(HomeConfig::new())
///     .with_confirmation_gate(|prompt: ConfirmPrompt| {
///         println!("{}", prompt.message());
///         true
///     })
///     .build();
///
/// assert!(home.set_door_locked(false).is_applied());
/// ```
#[must_use]
pub struct HomeBuilder {
    config: HomeConfig,
    presenter: Option<Arc<dyn Presenter>>,
    gate: Option<Arc<dyn ConfirmationGate>>,
    speech: Option<Arc<dyn SpeechOutput>>,
}

impl HomeBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: HomeConfig::default(),
            presenter: None,
            gate: None,
            speech: None,
        }
    }

    /// Sets the session configuration.
    pub fn with_config(mut self, config: HomeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the presenter that renders display updates.
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Sets the gate that asks the user before sensitive actions.
    pub fn with_confirmation_gate<G>(mut self, gate: G) -> Self
    where
        G: ConfirmationGate + 'static,
    {
        self.gate = Some(Arc::new(gate));
        self
    }

    /// Sets the speech output used to read feedback aloud.
    pub fn with_speech_output(mut self, speech: Arc<dyn SpeechOutput>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Builds the session and pushes the initial device states to the
    /// presenter.
    pub fn build(self) -> Home {
        let presenter = self.presenter.unwrap_or_else(|| Arc::new(NullPresenter));
        let gate = self.gate.unwrap_or_else(|| Arc::new(AlwaysDeny));

        tracing::debug!(
            light = %self.config.initial_state.light(),
            thermostat = %self.config.initial_state.temperature(),
            door = %self.config.initial_state.door(),
            "Starting home session"
        );

        let home = Home::from_parts(self.config, presenter, gate, self.speech);
        home.refresh_all();
        home
    }
}

impl Default for HomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HomeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeBuilder")
            .field("config", &self.config)
            .field("presenter", &self.presenter.is_some())
            .field("gate", &self.gate.is_some())
            .field("speech", &self.speech.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HomeState;
    use crate::types::{LockState, PowerState, Temperature};

    #[test]
    fn default_build() {
        let home = HomeBuilder::default().build();
        assert_eq!(home.state(), HomeState::new());
        assert!(!home.emergency_mode());
    }

    #[test]
    fn initial_state_from_config() {
        let initial = HomeState::new()
            .with_light(PowerState::Off)
            .with_temperature(Temperature::new(64).unwrap())
            .with_door(LockState::Unlocked);

        let home = Home::builder()
            .with_config(HomeConfig::new().with_initial_state(initial))
            .build();

        assert_eq!(home.light(), PowerState::Off);
        assert_eq!(home.temperature().value(), 64);
        assert_eq!(home.door(), LockState::Unlocked);
    }

    #[test]
    fn default_gate_declines() {
        let home = Home::builder().build();
        assert!(!home.trigger_emergency().is_applied());
        assert!(!home.emergency_mode());
    }

    #[test]
    fn debug_hides_collaborators() {
        let builder = Home::builder().with_presenter(Arc::new(NullPresenter));
        let debug = format!("{builder:?}");
        assert!(debug.contains("presenter: true"));
        assert!(debug.contains("speech: false"));
    }
}
