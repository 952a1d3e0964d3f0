// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device state model.
//!
//! A [`Home`] owns the registry of the three simulated devices, validates
//! every mutation, and pushes the result to its collaborators: the
//! [`Presenter`] gets a refresh of the one device that changed, the user gets
//! a feedback message (banner plus speech), and subscribers get the
//! [`StateChange`].
//!
//! Requests that cannot be honoured are not errors. An out-of-range set point
//! produces a warning message and leaves the state alone; a declined
//! confirmation does nothing at all. The returned [`Outcome`] tells the caller
//! which of these happened.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::{Home, Outcome};
//!
//! let home = Home::builder().build();
//!
//! assert_eq!(home.set_temperature(65), Outcome::Applied);
//! assert_eq!(home.temperature().value(), 65);
//!
//! // Out of range: rejected, state unchanged
//! assert_eq!(home.set_temperature(95), Outcome::Rejected);
//! assert_eq!(home.temperature().value(), 65);
//!
//! // The default confirmation gate declines, so the door stays locked
//! assert_eq!(home.set_door_locked(false), Outcome::Declined);
//! assert!(home.door().is_locked());
//! ```
//!
//! # Concurrency
//!
//! `Home` is a cheap handle over shared state and can be cloned into other
//! threads or tasks. All writes go through a single registry lock, and
//! read-modify-write operations such as [`Home::adjust_temperature`] run
//! entirely under it. The lock is released before any collaborator is
//! called, so presenters and callbacks may call back into the `Home`.
//!
//! Door operations are additionally serialized from reading the current
//! state through the confirmation gate to the commit. That lock is reentrant,
//! so a presenter may still operate the door from inside a refresh.

mod builder;

pub use builder::HomeBuilder;

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};
use tokio::sync::broadcast;

use crate::config::HomeConfig;
use crate::confirm::{ConfirmPrompt, ConfirmationGate};
use crate::event::{EventBus, HomeEvent};
use crate::feedback::Feedback;
use crate::presenter::Presenter;
use crate::speech::{SpeechOutput, Utterance};
use crate::state::{HomeState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::timer::{Dismissal, DismissalTimers};
use crate::types::{LockState, PowerState, Temperature};

/// Message shown when a set point outside 60-80 °F is requested.
pub const TEMPERATURE_RANGE_MESSAGE: &str = "Temperature must be between 60 and 80 degrees";

/// Message shown once emergency services have been contacted.
pub const EMERGENCY_MESSAGE: &str = "Emergency services have been notified. Help is on the way.";

/// What a device operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The request was carried out and feedback was given.
    Applied,
    /// The request failed validation; a warning was shown and nothing changed.
    Rejected,
    /// The confirmation gate said no; nothing changed and nothing was shown.
    Declined,
}

impl Outcome {
    /// Returns `true` if the request was carried out.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

pub(crate) struct Inner {
    state: Mutex<HomeState>,
    door_op: ReentrantMutex<()>,
    config: HomeConfig,
    presenter: Arc<dyn Presenter>,
    gate: Arc<dyn ConfirmationGate>,
    speech: Option<Arc<dyn SpeechOutput>>,
    callbacks: CallbackRegistry,
    events: EventBus,
    timers: DismissalTimers,
}

/// Handle to the in-memory state of one smart-home session.
///
/// Create one with [`Home::builder`].
#[derive(Clone)]
pub struct Home {
    inner: Arc<Inner>,
}

impl Home {
    /// Creates a builder for a new session.
    #[must_use]
    pub fn builder() -> HomeBuilder {
        HomeBuilder::new()
    }

    pub(crate) fn from_parts(
        config: HomeConfig,
        presenter: Arc<dyn Presenter>,
        gate: Arc<dyn ConfirmationGate>,
        speech: Option<Arc<dyn SpeechOutput>>,
    ) -> Self {
        let inner = Inner {
            state: Mutex::new(config.initial_state),
            door_op: ReentrantMutex::new(()),
            config,
            presenter,
            gate,
            speech,
            callbacks: CallbackRegistry::new(),
            events: EventBus::new(),
            timers: DismissalTimers::new(),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    // ========== Light ==========

    /// Switches the light on or off.
    ///
    /// Always succeeds, even if the light is already in the requested state.
    pub fn set_light(&self, on: bool) -> Outcome {
        let state = PowerState::from(on);
        self.commit(StateChange::Light(state));
        self.provide_feedback(format!("Light turned {state}"));
        Outcome::Applied
    }

    // ========== Thermostat ==========

    /// Sets the thermostat to `degrees` Fahrenheit.
    ///
    /// Values outside 60-80 are rejected with a warning message and leave the
    /// set point unchanged.
    pub fn set_temperature(&self, degrees: i32) -> Outcome {
        self.update_temperature(|_| degrees)
    }

    /// Moves the set point by `delta` degrees.
    ///
    /// Equivalent to `set_temperature(current + delta)`, computed under the
    /// registry lock. A result outside 60-80 is rejected like any other
    /// out-of-range request; it is not clamped.
    pub fn adjust_temperature(&self, delta: i32) -> Outcome {
        self.update_temperature(|current| current.value().saturating_add(delta))
    }

    fn update_temperature<F>(&self, target: F) -> Outcome
    where
        F: FnOnce(Temperature) -> i32,
    {
        let result = {
            let mut state = self.inner.state.lock();
            let requested = target(state.temperature());
            Temperature::new(requested).map(|temp| {
                let change = StateChange::Temperature(temp);
                state.apply(&change);
                (change, *state)
            })
        };

        match result {
            Ok((change, new_state)) => {
                self.notify(change, new_state);
                self.provide_feedback(format!("Temperature set to {}", new_state.temperature()));
                Outcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, "Rejected thermostat set point");
                self.provide_feedback(TEMPERATURE_RANGE_MESSAGE);
                Outcome::Rejected
            }
        }
    }

    // ========== Door ==========

    /// Locks or unlocks the door.
    ///
    /// Unlocking asks the confirmation gate first. If it declines, nothing
    /// changes and no feedback is given. Locking needs no confirmation.
    pub fn set_door_locked(&self, locked: bool) -> Outcome {
        self.update_door(|_| locked)
    }

    /// Flips the door lock, as the door button does.
    ///
    /// The current state is read and the new one committed without any other
    /// door operation in between, so concurrent toggles never both unlock.
    pub fn toggle_door(&self) -> Outcome {
        self.update_door(|current| !current.is_locked())
    }

    fn update_door<F>(&self, target: F) -> Outcome
    where
        F: FnOnce(LockState) -> bool,
    {
        let committed = {
            // Held across the gate, which may block on the user
            let _door = self.inner.door_op.lock();
            let locked = target(self.door());
            if !locked && !self.inner.gate.confirm(ConfirmPrompt::UnlockDoor) {
                None
            } else {
                let state = LockState::from_locked(locked);
                self.commit(StateChange::Door(state));
                Some(state)
            }
        };

        match committed {
            Some(state) => {
                self.provide_feedback(format!("Door {state}"));
                Outcome::Applied
            }
            None => {
                tracing::debug!("Door unlock declined");
                Outcome::Declined
            }
        }
    }

    // ========== Emergency ==========

    /// Contacts emergency services after confirmation.
    ///
    /// On acceptance the emergency message is shown and emergency mode stays
    /// on for the configured window (5 seconds by default), then clears by
    /// itself. Triggering again while active schedules another clear; it does
    /// not extend the pending one.
    pub fn trigger_emergency(&self) -> Outcome {
        if !self.inner.gate.confirm(ConfirmPrompt::Emergency) {
            tracing::debug!("Emergency call declined");
            return Outcome::Declined;
        }

        tracing::info!("Emergency services notified");
        self.provide_feedback(EMERGENCY_MESSAGE);
        self.commit(StateChange::EmergencyMode(true));

        let weak = self.downgrade();
        self.inner.timers.schedule(
            Dismissal::EmergencyMode,
            self.inner.config.emergency_duration,
            move || {
                if let Some(home) = Home::upgrade(&weak) {
                    tracing::info!("Emergency mode cleared");
                    home.commit(StateChange::EmergencyMode(false));
                }
            },
        );
        Outcome::Applied
    }

    // ========== Feedback ==========

    /// Shows a feedback banner and reads it aloud.
    ///
    /// The banner is dismissed after the configured feedback duration.
    pub fn provide_feedback(&self, message: impl Into<String>) {
        let feedback = Feedback::new(message);
        tracing::debug!(text = feedback.message(), "Feedback");

        self.inner.presenter.show_feedback(&feedback);
        self.inner.callbacks.dispatch_feedback(&feedback);
        self.inner
            .events
            .publish(HomeEvent::FeedbackShown(feedback.clone()));

        let id = feedback.id();
        let weak = self.downgrade();
        self.inner.timers.schedule(
            Dismissal::Feedback(id),
            self.inner.config.feedback_duration,
            move || {
                if let Some(home) = Home::upgrade(&weak) {
                    home.inner.presenter.dismiss_feedback(id);
                    home.inner.events.publish(HomeEvent::FeedbackDismissed { id });
                }
            },
        );

        self.speak(feedback.message());
    }

    /// Reads `text` aloud through the speech output, if one is configured.
    pub fn speak(&self, text: &str) {
        if let Some(speech) = &self.inner.speech {
            speech.speak(&Utterance::new(text, &self.inner.config.voice));
        }
    }

    // ========== Display ==========

    /// Pushes the current state of every device to the presenter.
    pub fn refresh_all(&self) {
        let state = self.state();
        let presenter = &self.inner.presenter;
        presenter.refresh_light(state.light());
        presenter.refresh_thermostat(state.temperature());
        presenter.refresh_door(state.door());
    }

    // ========== Queries ==========

    /// Returns a snapshot of the registry.
    #[must_use]
    pub fn state(&self) -> HomeState {
        *self.inner.state.lock()
    }

    /// Returns the light state.
    #[must_use]
    pub fn light(&self) -> PowerState {
        self.state().light()
    }

    /// Returns the thermostat set point.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.state().temperature()
    }

    /// Returns the door state.
    #[must_use]
    pub fn door(&self) -> LockState {
        self.state().door()
    }

    /// Returns `true` while emergency mode is active.
    #[must_use]
    pub fn emergency_mode(&self) -> bool {
        self.state().emergency_mode()
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &HomeConfig {
        &self.inner.config
    }

    /// Returns the dismissal timers of this session.
    ///
    /// Hosts that do not run a tokio runtime drive them with
    /// [`DismissalTimers::fire_due`].
    #[must_use]
    pub fn timers(&self) -> &DismissalTimers {
        &self.inner.timers
    }

    /// Subscribes to the event stream of this session.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<HomeEvent> {
        self.inner.events.subscribe()
    }

    pub(crate) fn presenter(&self) -> &Arc<dyn Presenter> {
        &self.inner.presenter
    }

    // ========== Internals ==========

    fn commit(&self, change: StateChange) {
        let new_state = {
            let mut state = self.inner.state.lock();
            state.apply(&change);
            *state
        };
        self.notify(change, new_state);
    }

    fn notify(&self, change: StateChange, new_state: HomeState) {
        tracing::debug!(?change, "State changed");

        let presenter = &self.inner.presenter;
        match change {
            StateChange::Light(state) => presenter.refresh_light(state),
            StateChange::Temperature(temp) => presenter.refresh_thermostat(temp),
            StateChange::Door(state) => presenter.refresh_door(state),
            StateChange::EmergencyMode(active) => presenter.set_emergency_mode(active),
        }

        self.inner.callbacks.dispatch(&change);
        self.inner
            .events
            .publish(HomeEvent::StateChanged { change, new_state });
    }

    fn downgrade(&self) -> Weak<Inner> {
        Arc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}

impl Subscribable for Home {
    fn on_light_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_light_changed(callback)
    }

    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_temperature_changed(callback)
    }

    fn on_door_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(LockState) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_door_changed(callback)
    }

    fn on_emergency_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_emergency_changed(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_state_changed(callback)
    }

    fn on_feedback<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Feedback) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_feedback(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.callbacks.unsubscribe(id)
    }
}

impl std::fmt::Debug for Home {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Home")
            .field("state", &self.state())
            .field("callbacks", &self.inner.callbacks)
            .field("timers", &self.inner.timers)
            .finish_non_exhaustive()
    }
}
