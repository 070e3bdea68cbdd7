// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bidirectional state reconciliation for climate-control zones.
//!
//! `thermozone` sits between a smart-home bridge and a multi-zone heating or
//! cooling appliance. The two sides disagree about vocabulary and about who
//! is in charge: the bridge speaks thermostat characteristics (target state,
//! target temperature), the appliance speaks attribute states and command
//! sequences, and both emit changes concurrently. Each [`ClimateZone`]
//! translates between them and arbitrates the races.
//!
//! # Overview
//!
//! - [`resolver`] turns a user intent into the command sequence the zone's
//!   hardware family understands. The appliance exposes a flat command table,
//!   and [`ZoneCapabilities`] probes it to classify the zone as either a
//!   heat pump (setpoints via temporary derogation) or a zone controller
//!   (direct setpoint writes).
//! - [`reconciler`] derives thermostat state from the attribute snapshot and
//!   merges it into the local model. While a user request is in flight the
//!   zone is not *idle*, and device echoes of the previous state cannot
//!   overwrite the requested target until the device confirms or a bounded
//!   timeout expires.
//! - [`timer`] provides the debounce slots: notification bursts collapse
//!   into one recompute, and every dispatched command arms a trailing
//!   refresh poll so stale appliances converge.
//!
//! Zones are independent; create one [`ClimateZone`] per appliance zone.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use thermozone::{ClimateZone, DeviceSnapshot, TargetState};
//! # use thermozone::{command::Command, error::TransportError, transport::CommandTransport};
//! # struct Bridge;
//! # impl CommandTransport for Bridge {
//! #     fn execute(&self, _: Vec<Command>) -> Result<(), TransportError> { Ok(()) }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> thermozone::Result<()> {
//!     let mut snapshot = DeviceSnapshot::new();
//!     snapshot.add_commands([
//!         "setDerogationOnOffState",
//!         "setDerogatedTargetTemperature",
//!         "setDerogationTime",
//!         "setComfortHeatingTargetTemperature",
//!     ]);
//!
//!     let zone = ClimateZone::new(snapshot, Arc::new(Bridge));
//!     zone.callbacks().on_target_state_changed(|state| {
//!         println!("target is now {state}");
//!     });
//!
//!     // User turns the zone to scheduled operation.
//!     zone.set_target_state(TargetState::Auto)?;
//!
//!     // Device notifications flow back in through the same zone.
//!     zone.on_attribute_changed("core:HeatingOnOffState", "on".into());
//!     Ok(())
//! }
//! ```

pub mod capabilities;
pub mod command;
pub mod config;
pub mod error;
pub mod reconciler;
pub mod resolver;
pub mod snapshot;
pub mod subscription;
pub mod timer;
pub mod transport;
pub mod types;
mod zone;

pub use capabilities::{SetpointFamily, ZoneCapabilities, ZoneCapabilitiesBuilder};
pub use command::Command;
pub use config::{ThermostatProperties, ZoneConfig};
pub use error::{Error, Result, TransportError, ValueError};
pub use reconciler::{StateObservation, ThermostatEvent, ThermostatModel};
pub use resolver::Resolution;
pub use snapshot::DeviceSnapshot;
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use transport::CommandTransport;
pub use types::{AttributeValue, CurrentState, TargetState, Temperature, ZoneFunction};
pub use zone::ClimateZone;
