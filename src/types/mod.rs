// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the simulated devices.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so an invalid device state cannot be represented.
//!
//! # Types
//!
//! - [`DeviceKind`] - Light, thermostat or door
//! - [`PowerState`] - On/Off state of the light
//! - [`Temperature`] - Thermostat set point (60-80 °F)
//! - [`LockState`] - Locked/Unlocked state of the door

mod device_kind;
mod lock;
mod power;
mod temperature;

pub use device_kind::DeviceKind;
pub use lock::LockState;
pub use power::PowerState;
pub use temperature::Temperature;
