// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `thermozone` library.
//!
//! Most conditions the reconciliation engine runs into are deliberately *not*
//! errors: an unrecognized target-state value resolves to a no-op, a missing
//! command variant falls back to an alternate command family, and a missing
//! attribute simply skips the dependent state commit. What remains is value
//! validation and transport dispatch failure, which this module models.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while dispatching commands to the transport.
    ///
    /// Propagated unchanged; the engine does not retry failed commands.
    /// The debounce-triggered refresh acts as an implicit retry of
    /// observation, not of the failed write.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A temperature is outside the allowed range.
    #[error("temperature {actual} is out of range [{min}, {max}]")]
    TemperatureOutOfRange {
        /// Minimum allowed temperature in degrees Celsius.
        min: f64,
        /// Maximum allowed temperature in degrees Celsius.
        max: f64,
        /// The actual value that was provided.
        actual: f64,
    },

    /// A temperature is not a finite number.
    #[error("temperature {0} is not a finite number")]
    NonFiniteTemperature(f64),

    /// An invalid target-state string was provided.
    #[error("invalid target state: {0}")]
    InvalidTargetState(String),
}

/// Errors reported by the command transport when dispatch fails.
///
/// The transport executes commands asynchronously against the appliance;
/// these errors cover only the *submission* of a command sequence. Execution
/// outcomes arrive later as ordinary attribute notifications.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport rejected the command sequence.
    #[error("command rejected: {0}")]
    Rejected(String),

    /// The channel to the transport worker was closed.
    #[error("transport channel closed")]
    ChannelClosed,

    /// The transport failed to queue the commands for dispatch.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::TemperatureOutOfRange {
            min: 0.0,
            max: 30.0,
            actual: 42.5,
        };
        assert_eq!(err.to_string(), "temperature 42.5 is out of range [0, 30]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::NonFiniteTemperature(f64::NAN);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(_)));
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::Rejected("busy".to_string());
        assert_eq!(err.to_string(), "command rejected: busy");

        let err: Error = TransportError::ChannelClosed.into();
        assert_eq!(err.to_string(), "transport error: transport channel closed");
    }
}
