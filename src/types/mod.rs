// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for climate-zone control.
//!
//! # Types
//!
//! - [`TargetState`] - What the user asks for (OFF/HEAT/AUTO)
//! - [`CurrentState`] - What the zone is observed doing (OFF/HEAT/COOL)
//! - [`ZoneFunction`] - Heating vs. cooling, derived from the parent device
//! - [`Temperature`] - Validated temperature in degrees Celsius
//! - [`AttributeValue`] - Raw tagged value from the device transport

mod function;
mod state;
mod temperature;
mod value;

pub use function::ZoneFunction;
pub use state::{CurrentState, TargetState};
pub use temperature::Temperature;
pub use value::AttributeValue;
