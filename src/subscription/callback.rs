// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for thermostat subscriptions.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::reconciler::ThermostatEvent;
use crate::types::{CurrentState, TargetState, Temperature};

/// Unique identifier for a subscription.
///
/// Returned when registering a callback; pass it to
/// [`CallbackRegistry::unsubscribe`] to remove the callback again. IDs are
/// unique within a zone's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type TargetStateCallback = Arc<dyn Fn(TargetState) + Send + Sync>;
type CurrentStateCallback = Arc<dyn Fn(CurrentState) + Send + Sync>;
type TargetTemperatureCallback = Arc<dyn Fn(Temperature) + Send + Sync>;
type TemperatureCallback = Arc<dyn Fn(f64) + Send + Sync>;
type EventCallback = Arc<dyn Fn(&ThermostatEvent) + Send + Sync>;

/// Registry for thermostat subscription callbacks.
///
/// Thread-safe via `parking_lot::RwLock`; callbacks are wrapped in `Arc` so
/// dispatch can clone them cheaply. Callbacks run synchronously, in an
/// arbitrary order.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    target_state_callbacks: RwLock<HashMap<SubscriptionId, TargetStateCallback>>,
    current_state_callbacks: RwLock<HashMap<SubscriptionId, CurrentStateCallback>>,
    target_temperature_callbacks: RwLock<HashMap<SubscriptionId, TargetTemperatureCallback>>,
    temperature_callbacks: RwLock<HashMap<SubscriptionId, TemperatureCallback>>,
    event_callbacks: RwLock<HashMap<SubscriptionId, EventCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            target_state_callbacks: RwLock::new(HashMap::new()),
            current_state_callbacks: RwLock::new(HashMap::new()),
            target_temperature_callbacks: RwLock::new(HashMap::new()),
            temperature_callbacks: RwLock::new(HashMap::new()),
            event_callbacks: RwLock::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Registers a callback for target-state changes.
    pub fn on_target_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(TargetState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.target_state_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for current-state changes.
    pub fn on_current_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(CurrentState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.current_state_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for target-temperature changes.
    pub fn on_target_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Temperature) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.target_temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for measured-temperature changes.
    pub fn on_temperature_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.temperature_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for every committed change.
    pub fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThermostatEvent) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.event_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.target_state_callbacks.write().remove(&id).is_some()
            || self.current_state_callbacks.write().remove(&id).is_some()
            || self
                .target_temperature_callbacks
                .write()
                .remove(&id)
                .is_some()
            || self.temperature_callbacks.write().remove(&id).is_some()
            || self.event_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.target_state_callbacks.write().clear();
        self.current_state_callbacks.write().clear();
        self.target_temperature_callbacks.write().clear();
        self.temperature_callbacks.write().clear();
        self.event_callbacks.write().clear();
    }

    /// Dispatches a committed change to matching callbacks.
    pub fn dispatch(&self, event: &ThermostatEvent) {
        {
            let callbacks = self.event_callbacks.read();
            for callback in callbacks.values() {
                callback(event);
            }
        }

        match event {
            ThermostatEvent::TargetState(state) => {
                let callbacks = self.target_state_callbacks.read();
                for callback in callbacks.values() {
                    callback(*state);
                }
            }
            ThermostatEvent::CurrentState(state) => {
                let callbacks = self.current_state_callbacks.read();
                for callback in callbacks.values() {
                    callback(*state);
                }
            }
            ThermostatEvent::TargetTemperature(value) => {
                let callbacks = self.target_temperature_callbacks.read();
                for callback in callbacks.values() {
                    callback(*value);
                }
            }
            ThermostatEvent::CurrentTemperature(value) => {
                let callbacks = self.temperature_callbacks.read();
                for callback in callbacks.values() {
                    callback(*value);
                }
            }
        }
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.target_state_callbacks.read().len()
            + self.current_state_callbacks.read().len()
            + self.target_temperature_callbacks.read().len()
            + self.temperature_callbacks.read().len()
            + self.event_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
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
        assert_eq!(SubscriptionId::new(7).to_string(), "Sub(7)");
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn target_state_callback_dispatch_and_unsubscribe() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        let id = registry.on_target_state_changed(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&ThermostatEvent::TargetState(TargetState::Auto));
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(registry.unsubscribe(id));
        registry.dispatch(&ThermostatEvent::TargetState(TargetState::Off));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn event_callback_sees_every_change() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();

        registry.on_event(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&ThermostatEvent::CurrentState(CurrentState::Heat));
        registry.dispatch(&ThermostatEvent::CurrentTemperature(19.5));
        registry.dispatch(&ThermostatEvent::TargetTemperature(
            Temperature::new(21.0).unwrap(),
        ));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn temperature_callback_receives_value() {
        let registry = CallbackRegistry::new();
        let received = Arc::new(RwLock::new(None::<f64>));
        let r = received.clone();

        registry.on_temperature_changed(move |value| {
            *r.write() = Some(value);
        });

        registry.dispatch(&ThermostatEvent::CurrentTemperature(20.5));
        assert_eq!(*received.read(), Some(20.5));
    }

    #[test]
    fn unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();
        registry.on_target_state_changed(|_| {});
        registry.on_current_state_changed(|_| {});
        registry.on_target_temperature_changed(|_| {});
        assert_eq!(registry.callback_count(), 3);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let registry = CallbackRegistry::new();
        let a = registry.on_event(|_| {});
        let b = registry.on_temperature_changed(|_| {});
        assert_ne!(a, b);
    }
}
