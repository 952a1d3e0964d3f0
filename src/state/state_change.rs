// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the building blocks for updating the
//! [`HomeState`](super::HomeState). Every successful device operation produces
//! exactly one change, which is applied to the registry and then dispatched to
//! the presenter and to subscribers.
//!
//! # Examples
//!
//! ```
//! use hearth_voice::state::{HomeState, StateChange};
//! use hearth_voice::types::PowerState;
//!
//! let mut state = HomeState::new();
//!
//! // The light starts on, so turning it on again changes nothing
//! assert!(!state.apply(&StateChange::Light(PowerState::On)));
//! assert!(state.apply(&StateChange::Light(PowerState::Off)));
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{DeviceKind, LockState, PowerState, Temperature};

/// Represents a change in home state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StateChange {
    /// The light was switched.
    Light(PowerState),

    /// The thermostat set point changed.
    Temperature(Temperature),

    /// The door lock changed.
    Door(LockState),

    /// Emergency mode was raised or cleared.
    EmergencyMode(bool),
}

impl StateChange {
    /// Creates a light change from an `on` flag.
    #[must_use]
    pub fn light(on: bool) -> Self {
        Self::Light(PowerState::from(on))
    }

    /// Creates a door change from a `locked` flag.
    #[must_use]
    pub fn door(locked: bool) -> Self {
        Self::Door(LockState::from_locked(locked))
    }

    /// Returns the device affected by this change.
    ///
    /// Emergency mode is not tied to a device and returns `None`.
    #[must_use]
    pub fn device(&self) -> Option<DeviceKind> {
        match self {
            Self::Light(_) => Some(DeviceKind::Light),
            Self::Temperature(_) => Some(DeviceKind::Thermostat),
            Self::Door(_) => Some(DeviceKind::Door),
            Self::EmergencyMode(_) => None,
        }
    }

    /// Returns `true` if this is an emergency mode change.
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::EmergencyMode(_))
    }
}
