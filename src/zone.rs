// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The climate zone: one reconciliation engine per zone.
//!
//! All work is reaction to two event sources: user intents delivered by the
//! bridge as ordinary calls, and attribute-change notifications delivered by
//! the transport. Nothing blocks; command dispatch is fire-and-forget and the
//! only delayed work lives in three cancellable debounce slots (recompute,
//! refresh poll, idle timeout). Zones are fully independent instances; there
//! is no shared mutable state between them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use crate::capabilities::ZoneCapabilities;
use crate::command::refresh;
use crate::config::ZoneConfig;
use crate::error::{Result, ValueError};
use crate::reconciler::{self, ThermostatModel};
use crate::resolver;
use crate::snapshot::{self, DeviceSnapshot};
use crate::subscription::CallbackRegistry;
use crate::timer::DebounceSlot;
use crate::transport::CommandTransport;
use crate::types::{AttributeValue, TargetState, Temperature, ZoneFunction};

/// A single climate-control zone.
///
/// Cheap to clone; clones share the same zone state. Requires a tokio
/// runtime for the debounce timers.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use thermozone::{ClimateZone, DeviceSnapshot, TargetState};
/// # use thermozone::{command::Command, error::TransportError, transport::CommandTransport};
/// # struct Bridge;
/// # impl CommandTransport for Bridge {
/// #     fn execute(&self, _: Vec<Command>) -> Result<(), TransportError> { Ok(()) }
/// # }
///
/// #[tokio::main]
/// async fn main() -> thermozone::Result<()> {
///     let mut snapshot = DeviceSnapshot::new();
///     snapshot.add_command("setHeatingTargetTemperature");
///
///     let zone = ClimateZone::new(snapshot, Arc::new(Bridge));
///
///     zone.callbacks().on_current_state_changed(|state| {
///         println!("zone is now {state}");
///     });
///
///     zone.set_target_state(TargetState::Auto)?;
///     zone.set_target_temperature(21.0)?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ClimateZone {
    inner: Arc<ZoneInner>,
}

struct ZoneInner {
    config: ZoneConfig,
    capabilities: ZoneCapabilities,
    transport: Arc<dyn CommandTransport>,
    snapshot: RwLock<DeviceSnapshot>,
    model: Mutex<ThermostatModel>,
    /// True whenever no user-initiated target-state change is in flight.
    idle: AtomicBool,
    /// The target state awaiting device confirmation, when not idle.
    pending_target: Mutex<Option<TargetState>>,
    callbacks: CallbackRegistry,
    recompute_slot: DebounceSlot,
    refresh_slot: DebounceSlot,
    idle_slot: DebounceSlot,
}

impl ClimateZone {
    /// Creates a zone with capabilities probed from the snapshot's command
    /// table and the default configuration.
    #[must_use]
    pub fn new(snapshot: DeviceSnapshot, transport: Arc<dyn CommandTransport>) -> Self {
        let capabilities = ZoneCapabilities::from_snapshot(&snapshot);
        Self::with_parts(snapshot, transport, ZoneConfig::default(), capabilities)
    }

    /// Creates a zone with an explicit configuration, probing capabilities
    /// from the snapshot.
    #[must_use]
    pub fn with_config(
        snapshot: DeviceSnapshot,
        transport: Arc<dyn CommandTransport>,
        config: ZoneConfig,
    ) -> Self {
        let capabilities = ZoneCapabilities::from_snapshot(&snapshot);
        Self::with_parts(snapshot, transport, config, capabilities)
    }

    /// Creates a zone with explicit configuration and capabilities.
    #[must_use]
    pub fn with_parts(
        snapshot: DeviceSnapshot,
        transport: Arc<dyn CommandTransport>,
        config: ZoneConfig,
        capabilities: ZoneCapabilities,
    ) -> Self {
        Self {
            inner: Arc::new(ZoneInner {
                config,
                capabilities,
                transport,
                snapshot: RwLock::new(snapshot),
                model: Mutex::new(ThermostatModel::new()),
                idle: AtomicBool::new(true),
                pending_target: Mutex::new(None),
                callbacks: CallbackRegistry::new(),
                recompute_slot: DebounceSlot::new(),
                refresh_slot: DebounceSlot::new(),
                idle_slot: DebounceSlot::new(),
            }),
        }
    }

    /// Returns the zone capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &ZoneCapabilities {
        &self.inner.capabilities
    }

    /// Returns the zone configuration.
    #[must_use]
    pub fn config(&self) -> &ZoneConfig {
        &self.inner.config
    }

    /// Returns the callback registry the bridge subscribes through.
    #[must_use]
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.inner.callbacks
    }

    /// Returns a copy of the current thermostat model.
    #[must_use]
    pub fn state(&self) -> ThermostatModel {
        *self.inner.model.lock()
    }

    /// Returns whether no user-initiated target-state change is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.inner.idle.load(Ordering::SeqCst)
    }

    /// Returns the zone function derived from the current snapshot.
    #[must_use]
    pub fn zone_function(&self) -> ZoneFunction {
        self.inner.snapshot.read().zone_function()
    }

    // ========== User intents ==========

    /// Handles a user target-state intent.
    ///
    /// Closes the idle gate before any command is dispatched, resolves the
    /// intent into the device's command family, dispatches fire-and-forget
    /// and arms a trailing full-refresh poll. A state outside the configured
    /// valid set is silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a transport error when dispatch fails; the engine does not
    /// retry, relying on the refresh poll for eventual convergence.
    pub fn set_target_state(&self, state: TargetState) -> Result<()> {
        if !self.inner.config.valid_target_states().contains(&state) {
            tracing::trace!(state = %state, "target state not valid for this zone, ignoring");
            return Ok(());
        }

        let resolution = {
            let snap = self.inner.snapshot.read();
            resolver::resolve_target_state(state, &snap, &self.inner.capabilities)
        };

        // Intent accepted: close the race window before dispatching anything,
        // so device echoes of the old state cannot overwrite the request.
        self.inner.idle.store(false, Ordering::SeqCst);
        *self.inner.pending_target.lock() = Some(state);
        self.arm_idle_timeout();

        let mut events = Vec::new();
        {
            let mut model = self.inner.model.lock();
            events.extend(model.set_target_state(state));
            if let Some(predicted) = resolution.predicted_setpoint {
                events.extend(model.set_target_temperature(predicted));
            }
        }
        for event in &events {
            self.inner.callbacks.dispatch(event);
        }

        tracing::debug!(
            state = %state,
            commands = resolution.commands.len(),
            "dispatching target-state command sequence"
        );
        self.inner.transport.execute(resolution.commands)?;
        self.arm_refresh(true);
        Ok(())
    }

    /// Handles a raw characteristic value from the bridge.
    ///
    /// Unrecognized values (including COOL) are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns a transport error when dispatch fails.
    pub fn set_target_state_value(&self, value: u8) -> Result<()> {
        match TargetState::from_characteristic(value) {
            Some(state) => self.set_target_state(state),
            None => {
                tracing::trace!(value, "ignoring unrecognized target-state value");
                Ok(())
            }
        }
    }

    /// Handles a user target-temperature intent.
    ///
    /// Resolves against the *current* target state: inside AUTO a heat pump
    /// gets a temporary derogation, other combinations a plain setpoint
    /// command. Commits the value locally right away (the next authoritative
    /// notification wins) and arms a trailing temperature-only refresh.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` when the temperature is out of range for this
    /// zone, or a transport error when dispatch fails.
    pub fn set_target_temperature(&self, value: f64) -> Result<()> {
        let temperature = Temperature::new(value)?;
        if value > self.inner.config.max_temperature() {
            return Err(ValueError::TemperatureOutOfRange {
                min: Temperature::MIN,
                max: self.inner.config.max_temperature(),
                actual: value,
            }
            .into());
        }

        let commands = {
            let snap = self.inner.snapshot.read();
            resolver::resolve_target_temperature(
                temperature,
                self.inner.model.lock().target_state(),
                &snap,
                &self.inner.capabilities,
                self.inner.config.derogation_duration(),
            )
        };

        if let Some(event) = self.inner.model.lock().set_target_temperature(temperature) {
            self.inner.callbacks.dispatch(&event);
        }

        tracing::debug!(%temperature, commands = commands.len(), "dispatching setpoint commands");
        self.inner.transport.execute(commands)?;
        self.arm_refresh(false);
        Ok(())
    }

    // ========== Device notifications ==========

    /// Handles an attribute-change notification from the transport.
    ///
    /// Temperature readings are forwarded directly; target-temperature
    /// confirmations are mirrored unconditionally; on/off, mode and profile
    /// changes schedule a debounced recompute so a burst of related
    /// notifications collapses into one.
    pub fn on_attribute_changed(&self, name: &str, value: AttributeValue) {
        let changed = self.inner.snapshot.write().insert(name, value.clone());
        tracing::trace!(attribute = name, value = %value, changed, "attribute notification");

        match name {
            snapshot::TEMPERATURE => {
                if let Some(reading) = value.as_f64() {
                    if let Some(event) = self.inner.model.lock().set_current_temperature(reading) {
                        self.inner.callbacks.dispatch(&event);
                    }
                }
            }
            snapshot::TARGET_TEMPERATURE => {
                // External confirmation always wins for this field.
                match value.as_f64().map(Temperature::new) {
                    Some(Ok(confirmed)) => {
                        if let Some(event) =
                            self.inner.model.lock().set_target_temperature(confirmed)
                        {
                            self.inner.callbacks.dispatch(&event);
                        }
                    }
                    Some(Err(err)) => {
                        tracing::warn!(value = %value, error = %err, "implausible target temperature");
                    }
                    None => {}
                }
            }
            _ if is_recompute_trigger(name) => self.schedule_recompute(),
            _ => {}
        }
    }

    /// Handles a parent-device attribute change (operating mode).
    pub fn on_parent_attribute_changed(&self, name: &str, value: AttributeValue) {
        self.inner
            .snapshot
            .write()
            .set_parent_attribute(name, value);
        if name == snapshot::OPERATING_MODE {
            self.schedule_recompute();
        }
    }

    // ========== Reconciliation ==========

    fn schedule_recompute(&self) {
        let zone = self.clone();
        self.inner
            .recompute_slot
            .arm(Duration::ZERO, async move { zone.recompute() });
    }

    fn recompute(&self) {
        let observation = {
            let snap = self.inner.snapshot.read();
            reconciler::observe(&snap)
        };
        let Some(observation) = observation else {
            tracing::trace!("zone on/off state not yet known, skipping recompute");
            return;
        };

        let was_idle = self.inner.idle.load(Ordering::SeqCst);
        let confirmed =
            !was_idle && *self.inner.pending_target.lock() == Some(observation.target_candidate);
        if confirmed {
            self.inner.idle.store(true, Ordering::SeqCst);
            *self.inner.pending_target.lock() = None;
            self.inner.idle_slot.cancel();
            tracing::debug!(state = %observation.target_candidate, "device confirmed requested state");
        }

        let events = self
            .inner
            .model
            .lock()
            .apply(observation, was_idle || confirmed);
        for event in &events {
            self.inner.callbacks.dispatch(event);
        }
    }

    fn arm_idle_timeout(&self) {
        let zone = self.clone();
        self.inner
            .idle_slot
            .arm(self.inner.config.idle_timeout(), async move {
                zone.inner.idle.store(true, Ordering::SeqCst);
                *zone.inner.pending_target.lock() = None;
                tracing::debug!("idle timeout elapsed without device confirmation");
                // Device is authoritative again; let its state win.
                zone.recompute();
            });
    }

    /// Arms the shared refresh slot. The two refresh kinds share one slot,
    /// so arming either cancels the other.
    fn arm_refresh(&self, full: bool) {
        let zone = self.clone();
        self.inner
            .refresh_slot
            .arm(self.inner.config.refresh_delay(), async move {
                let mut commands = vec![refresh::refresh_target_temperature()];
                if full {
                    let function = zone.inner.snapshot.read().zone_function();
                    commands.push(refresh::refresh_profile(function));
                }
                tracing::debug!(full, "polling device after quiescence");
                if let Err(err) = zone.inner.transport.execute(commands) {
                    tracing::warn!(error = %err, "refresh poll dispatch failed");
                }
            });
    }
}

impl std::fmt::Debug for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClimateZone")
            .field("capabilities", &self.inner.capabilities)
            .field("idle", &self.is_idle())
            .field("model", &self.state())
            .finish_non_exhaustive()
    }
}

/// Returns whether a change to this attribute requires a state recompute.
fn is_recompute_trigger(name: &str) -> bool {
    [ZoneFunction::Heating, ZoneFunction::Cooling]
        .iter()
        .any(|f| {
            name == f.on_off_attribute()
                || name == f.mode_attribute()
                || name == f.profile_attribute()
        })
}
