// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw attribute values as delivered by the device transport.

use std::fmt;

/// A raw value reported for a device attribute, or carried as a command
/// parameter.
///
/// The appliance vocabulary mixes strings (`"on"`, `"internalScheduling"`),
/// numbers (temperatures, durations) and booleans; this core treats them as
/// opaque tagged values and only interprets the ones it reconciles.
///
/// # Examples
///
/// ```
/// use thermozone::types::AttributeValue;
///
/// let v = AttributeValue::from("internalScheduling");
/// assert_eq!(v.as_str(), Some("internalScheduling"));
/// assert_eq!(v.as_f64(), None);
///
/// let t = AttributeValue::from(19.5);
/// assert_eq!(t.as_f64(), Some(19.5));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
}

impl AttributeValue {
    /// Returns the string content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content, if this is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        assert_eq!(AttributeValue::from("off").as_str(), Some("off"));
        assert_eq!(AttributeValue::from(21.0).as_f64(), Some(21.0));
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from("off").as_f64(), None);
    }

    #[test]
    fn deserializes_untagged() {
        let v: AttributeValue = serde_json::from_str("\"derogation\"").unwrap();
        assert_eq!(v.as_str(), Some("derogation"));

        let v: AttributeValue = serde_json::from_str("19.5").unwrap();
        assert_eq!(v.as_f64(), Some(19.5));
    }

    #[test]
    fn display() {
        assert_eq!(AttributeValue::from("manu").to_string(), "manu");
        assert_eq!(AttributeValue::from(120.0).to_string(), "120");
    }
}
