// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry.

use serde::{Deserialize, Serialize};

use crate::types::{LockState, PowerState, Temperature};

use super::StateChange;

/// Current state of every simulated device.
///
/// The registry always holds a value for each device; there is no unknown
/// state. A fresh registry has the light on, the thermostat at 72 °F and the
/// door locked.
///
/// The emergency mode flag is transient and is never read from configuration.
///
/// # Examples
///
/// ```
/// use hearth_voice::state::HomeState;
/// use hearth_voice::types::{LockState, PowerState};
///
/// let state = HomeState::new();
/// assert_eq!(state.light(), PowerState::On);
/// assert_eq!(state.temperature().value(), 72);
/// assert_eq!(state.door(), LockState::Locked);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeState {
    light: PowerState,
    thermostat: Temperature,
    door: LockState,
    #[serde(skip)]
    emergency_mode: bool,
}

impl HomeState {
    /// Creates a registry with the session defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial light state.
    #[must_use]
    pub fn with_light(mut self, light: PowerState) -> Self {
        self.light = light;
        self
    }

    /// Sets the initial thermostat set point.
    #[must_use]
    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.thermostat = temperature;
        self
    }

    /// Sets the initial door state.
    #[must_use]
    pub fn with_door(mut self, door: LockState) -> Self {
        self.door = door;
        self
    }

    /// Returns the light state.
    #[must_use]
    pub fn light(&self) -> PowerState {
        self.light
    }

    /// Returns the thermostat set point.
    #[must_use]
    pub fn temperature(&self) -> Temperature {
        self.thermostat
    }

    /// Returns the door state.
    #[must_use]
    pub fn door(&self) -> LockState {
        self.door
    }

    /// Returns `true` while emergency mode is active.
    #[must_use]
    pub fn emergency_mode(&self) -> bool {
        self.emergency_mode
    }

    /// Applies a state change.
    ///
    /// Returns `true` if the registry actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match *change {
            StateChange::Light(light) => replace(&mut self.light, light),
            StateChange::Temperature(temp) => replace(&mut self.thermostat, temp),
            StateChange::Door(door) => replace(&mut self.door, door),
            StateChange::EmergencyMode(active) => replace(&mut self.emergency_mode, active),
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
