// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last-known device attribute values.
//!
//! The snapshot is the read-model of the appliance: a mapping from attribute
//! name to last-known value, refreshed by attribute notifications and
//! possibly stale between refreshes. Last write wins per attribute; there is
//! no ordering invariant beyond that.
//!
//! The snapshot also carries the parent device's attributes (needed to derive
//! the zone function from the operating mode) and the set of command names
//! the device accepts, as enumerated by discovery.

use std::collections::{HashMap, HashSet};

use crate::types::{AttributeValue, ZoneFunction};

/// Attribute holding the measured zone temperature.
pub const TEMPERATURE: &str = "core:TemperatureState";

/// Attribute holding the effective target temperature.
pub const TARGET_TEMPERATURE: &str = "core:TargetTemperatureState";

/// Parent-device attribute holding the PassAPC operating mode.
pub const OPERATING_MODE: &str = "io:PassAPCOperatingModeState";

/// Operating-mode value selecting the cooling function.
pub const OPERATING_MODE_COOLING: &str = "cooling";

/// Profile value indicating an active derogation (override).
pub const PROFILE_DEROGATION: &str = "derogation";

/// Mode value for device-native internal scheduling.
pub const MODE_INTERNAL_SCHEDULING: &str = "internalScheduling";

/// Mode value for manual operation.
pub const MODE_MANUAL: &str = "manu";

/// Last-known attribute values for one zone device.
///
/// # Examples
///
/// ```
/// use thermozone::snapshot::{self, DeviceSnapshot};
/// use thermozone::types::ZoneFunction;
///
/// let mut snap = DeviceSnapshot::new();
/// snap.insert("core:HeatingOnOffState", "on".into());
///
/// // No parent operating mode: the zone defaults to heating.
/// assert_eq!(snap.zone_function(), ZoneFunction::Heating);
///
/// snap.set_parent_attribute(snapshot::OPERATING_MODE, "cooling".into());
/// assert_eq!(snap.zone_function(), ZoneFunction::Cooling);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSnapshot {
    /// Zone attribute values, last write wins.
    attributes: HashMap<String, AttributeValue>,
    /// Parent-device attribute values.
    parent_attributes: HashMap<String, AttributeValue>,
    /// Command names the device accepts.
    commands: HashSet<String>,
}

impl DeviceSnapshot {
    /// Creates an empty snapshot with no known attributes or commands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command name as accepted by the device.
    pub fn add_command(&mut self, name: impl Into<String>) {
        self.commands.insert(name.into());
    }

    /// Registers several command names at once.
    pub fn add_commands<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.commands.insert(name.into());
        }
    }

    /// Returns whether the device accepts the named command.
    #[must_use]
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    /// Returns the last-known value of an attribute, if any.
    ///
    /// `None` means "not yet known"; callers skip dependent state commits
    /// rather than failing.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Returns the last-known value of a parent-device attribute.
    #[must_use]
    pub fn parent_get(&self, name: &str) -> Option<&AttributeValue> {
        self.parent_attributes.get(name)
    }

    /// Stores an attribute value, returning whether it actually changed.
    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) -> bool {
        let name = name.into();
        if self.attributes.get(&name) == Some(&value) {
            return false;
        }
        self.attributes.insert(name, value);
        true
    }

    /// Stores a parent-device attribute value.
    pub fn set_parent_attribute(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.parent_attributes.insert(name.into(), value);
    }

    /// Derives the zone function from the parent operating mode.
    ///
    /// Anything other than `"cooling"` resolves to heating, including an
    /// absent or non-string attribute.
    #[must_use]
    pub fn zone_function(&self) -> ZoneFunction {
        match self.parent_get(OPERATING_MODE).and_then(AttributeValue::as_str) {
            Some(OPERATING_MODE_COOLING) => ZoneFunction::Cooling,
            _ => ZoneFunction::Heating,
        }
    }

    /// Returns the string content of an attribute, if known and textual.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    /// Returns the numeric content of an attribute, if known and numeric.
    #[must_use]
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttributeValue::as_f64)
    }
}
