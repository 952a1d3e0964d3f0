// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Identifies one of the three simulated devices.
///
/// # Examples
///
/// ```
/// use hearth_voice::types::DeviceKind;
///
/// let kind: DeviceKind = "thermostat".parse().unwrap();
/// assert_eq!(kind, DeviceKind::Thermostat);
/// assert_eq!(DeviceKind::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// The living room light.
    Light,
    /// The thermostat.
    Thermostat,
    /// The front door lock.
    Door,
}

impl DeviceKind {
    /// All devices, in display order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Thermostat, Self::Door];

    /// Returns the identifier string of the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Thermostat => "thermostat",
            Self::Door => "door",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "thermostat" => Ok(Self::Thermostat),
            "door" => Ok(Self::Door),
            _ => Err(ValueError::UnknownDevice(s.to_string())),
        }
    }
}
