// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam to the external device-command transport.

use crate::command::Command;
use crate::error::TransportError;

/// Accepts command sequences for asynchronous execution against the
/// appliance.
///
/// Submission is fire-and-forget: `execute` only queues the sequence, and
/// success or failure of the actual device operation is reported later
/// through the same attribute-notification channel as spontaneous changes.
/// Once in flight, commands and organic updates are indistinguishable; the
/// reconciler is written to tolerate that.
///
/// # Examples
///
/// ```
/// use parking_lot::Mutex;
/// use thermozone::command::Command;
/// use thermozone::error::TransportError;
/// use thermozone::transport::CommandTransport;
///
/// /// A transport that records what was dispatched, for tests.
/// #[derive(Default)]
/// struct Recording {
///     sent: Mutex<Vec<Vec<Command>>>,
/// }
///
/// impl CommandTransport for Recording {
///     fn execute(&self, commands: Vec<Command>) -> Result<(), TransportError> {
///         self.sent.lock().push(commands);
///         Ok(())
///     }
/// }
/// ```
pub trait CommandTransport: Send + Sync {
    /// Queues a command sequence for execution.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the sequence cannot be submitted.
    /// Execution failures are not reported here.
    fn execute(&self, commands: Vec<Command>) -> Result<(), TransportError>;
}
