// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for types that publish home state changes.

use crate::feedback::Feedback;
use crate::state::StateChange;
use crate::subscription::SubscriptionId;
use crate::types::{LockState, PowerState, Temperature};

/// Trait for types that support event subscriptions.
///
/// Callbacks run synchronously on the thread that performed the change,
/// after the change has been applied.
///
/// # Examples
///
/// ```
/// use hearth_voice::{Home, Subscribable};
///
/// let home = Home::builder().build();
///
/// let sub_id = home.on_light_changed(|state| {
///     println!("Light is now {state}");
/// });
///
/// home.set_light(false);
/// assert!(home.unsubscribe(sub_id));
/// ```
pub trait Subscribable {
    /// Subscribes to light changes.
    fn on_light_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static;

    /// Subscribes to thermostat changes.
    fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static;

    /// Subscribes to door lock changes.
    fn on_door_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(LockState) + Send + Sync + 'static;

    /// Subscribes to emergency mode being raised and cleared.
    fn on_emergency_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Subscribes to all state changes.
    ///
    /// This is useful for logging, as it receives every change.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Subscribes to feedback messages.
    fn on_feedback<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Feedback) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
