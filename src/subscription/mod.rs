// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback subscriptions for thermostat state changes.
//!
//! The bridge observes the three thermostat fields independently; this module
//! provides the registry the zone dispatches committed changes through.

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
