// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for home state subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::feedback::Feedback;
use crate::state::StateChange;
use crate::types::{LockState, PowerState, Temperature};

/// Unique identifier for a subscription.
///
/// Returned when creating a subscription and used to unsubscribe later.
/// IDs are unique within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type LightCallback = Arc<dyn Fn(PowerState) + Send + Sync>;
type TemperatureCallback = Arc<dyn Fn(Temperature) + Send + Sync>;
type DoorCallback = Arc<dyn Fn(LockState) + Send + Sync>;
type EmergencyCallback = Arc<dyn Fn(bool) + Send + Sync>;
type StateChangedCallback = Arc<dyn Fn(&StateChange) + Send + Sync>;
type FeedbackCallback = Arc<dyn Fn(&Feedback) + Send + Sync>;

/// Registry for managing subscription callbacks.
///
/// Uses `parking_lot::RwLock` for interior mutability so callbacks can be
/// registered and dispatched through a shared reference from any thread.
/// Callbacks are cloned out of the registry before they run, so a callback
/// may itself subscribe or unsubscribe.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    light_callbacks: RwLock<HashMap<SubscriptionId, LightCallback>>,
    temperature_callbacks: RwLock<HashMap<SubscriptionId, TemperatureCallback>>,
    door_callbacks: RwLock<HashMap<SubscriptionId, DoorCallback>>,
    emergency_callbacks: RwLock<HashMap<SubscriptionId, EmergencyCallback>>,
    state_changed_callbacks: RwLock<HashMap<SubscriptionId, StateChangedCallback>>,
    feedback_callbacks: RwLock<HashMap<SubscriptionId, FeedbackCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            light_callbacks: RwLock::new(HashMap::new()),
            temperature_callbacks: RwLock::new(HashMap::new()),
            door_callbacks: RwLock::new(HashMap::new()),
            emergency_callbacks: RwLock::new(HashMap::new()),
            state_changed_callbacks: RwLock::new(HashMap::new()),
            feedback_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for light changes.
    pub fn on_light_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(PowerState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.light_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for thermostat changes.
    pub fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for door lock changes.
    pub fn on_door_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(LockState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.door_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for emergency mode being raised or cleared.
    pub fn on_emergency_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.emergency_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for all state changes.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for feedback messages.
    pub fn on_feedback<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Feedback) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.feedback_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.light_callbacks.write().remove(&id).is_some()
            || self.temperature_callbacks.write().remove(&id).is_some()
            || self.door_callbacks.write().remove(&id).is_some()
            || self.emergency_callbacks.write().remove(&id).is_some()
            || self.state_changed_callbacks.write().remove(&id).is_some()
            || self.feedback_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.light_callbacks.write().clear();
        self.temperature_callbacks.write().clear();
        self.door_callbacks.write().clear();
        self.emergency_callbacks.write().clear();
        self.state_changed_callbacks.write().clear();
        self.feedback_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a state change to relevant callbacks.
    ///
    /// Generic state callbacks run first, then the device-specific ones.
    pub fn dispatch(&self, change: &StateChange) {
        for callback in snapshot(&self.state_changed_callbacks) {
            callback(change);
        }

        match *change {
            StateChange::Light(state) => {
                for callback in snapshot(&self.light_callbacks) {
                    callback(state);
                }
            }
            StateChange::Temperature(temp) => {
                for callback in snapshot(&self.temperature_callbacks) {
                    callback(temp);
                }
            }
            StateChange::Door(state) => {
                for callback in snapshot(&self.door_callbacks) {
                    callback(state);
                }
            }
            StateChange::EmergencyMode(active) => {
                for callback in snapshot(&self.emergency_callbacks) {
                    callback(active);
                }
            }
        }
    }

    /// Dispatches a feedback message.
    pub fn dispatch_feedback(&self, feedback: &Feedback) {
        for callback in snapshot(&self.feedback_callbacks) {
            callback(feedback);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.light_callbacks.read().len()
            + self.temperature_callbacks.read().len()
            + self.door_callbacks.read().len()
            + self.emergency_callbacks.read().len()
            + self.state_changed_callbacks.read().len()
            + self.feedback_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

fn snapshot<C: Clone>(callbacks: &RwLock<HashMap<SubscriptionId, C>>) -> Vec<C> {
    callbacks.read().values().cloned().collect()
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.callback_count(), 0);
    }

    #[test]
    fn registry_light_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_light_changed(move |_state| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.callback_count(), 1);

        registry.dispatch(&StateChange::light(false));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // Other devices do not reach the light callback
        registry.dispatch(&StateChange::door(false));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.dispatch(&StateChange::light(true));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_temperature_callback() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<Temperature>));
        let received_clone = received.clone();

        registry.on_temperature_changed(move |temp| {
            *received_clone.write() = Some(temp);
        });

        let temp = Temperature::new(65).unwrap();
        registry.dispatch(&StateChange::Temperature(temp));

        assert_eq!(*received.read(), Some(temp));
    }

    #[test]
    fn registry_state_changed_callback() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        registry.on_state_changed(move |_change| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::light(true));
        registry.dispatch(&StateChange::Temperature(Temperature::MAX));
        registry.dispatch(&StateChange::door(true));
        registry.dispatch(&StateChange::EmergencyMode(true));

        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn registry_emergency_callback() {
        let registry = CallbackRegistry::new();
        let flags = Arc::new(RwLock::new(Vec::new()));
        let flags_clone = flags.clone();

        registry.on_emergency_changed(move |active| flags_clone.write().push(active));

        registry.dispatch(&StateChange::EmergencyMode(true));
        registry.dispatch(&StateChange::EmergencyMode(false));

        assert_eq!(*flags.read(), vec![true, false]);
    }

    #[test]
    fn registry_feedback_callback() {
        let registry = CallbackRegistry::new();
        let messages = Arc::new(RwLock::new(Vec::new()));
        let messages_clone = messages.clone();

        registry.on_feedback(move |feedback| {
            messages_clone.write().push(feedback.message().to_string());
        });

        registry.dispatch_feedback(&Feedback::new("Door locked"));
        assert_eq!(*messages.read(), vec!["Door locked".to_string()]);
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let id_slot = Arc::new(RwLock::new(None::<SubscriptionId>));

        let registry_clone = registry.clone();
        let slot_clone = id_slot.clone();
        let id = registry.on_door_changed(move |_| {
            if let Some(id) = *slot_clone.read() {
                registry_clone.unsubscribe(id);
            }
        });
        *id_slot.write() = Some(id);

        registry.dispatch(&StateChange::door(false));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_clear() {
        let registry = CallbackRegistry::new();

        registry.on_light_changed(|_| {});
        registry.on_door_changed(|_| {});
        registry.on_feedback(|_| {});
        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();

        let id1 = registry.on_light_changed(|_| {});
        let id2 = registry.on_temperature_changed(|_| {});
        let id3 = registry.on_state_changed(|_| {});

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }
}
