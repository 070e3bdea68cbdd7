// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end zone scenarios driven through the public API with a recording
//! transport and tokio's paused clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use thermozone::command::Command;
use thermozone::{
    ClimateZone, CommandTransport, CurrentState, DeviceSnapshot, TargetState, Temperature,
    TransportError, ZoneConfig, ZoneFunction,
};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<Vec<Command>>>,
}

impl RecordingTransport {
    fn batches(&self) -> Vec<Vec<Command>> {
        self.sent.lock().clone()
    }

    fn flat_names(&self) -> Vec<String> {
        self.batches()
            .iter()
            .flatten()
            .map(|c| c.name().to_string())
            .collect()
    }
}

impl CommandTransport for RecordingTransport {
    fn execute(&self, commands: Vec<Command>) -> Result<(), TransportError> {
        self.sent.lock().push(commands);
        Ok(())
    }
}

/// A snapshot matching a heat-pump zone: derogation plus comfort setpoint,
/// no direct setpoint write.
fn heat_pump_snapshot() -> DeviceSnapshot {
    let mut snap = DeviceSnapshot::new();
    snap.add_commands([
        "setHeatingOnOffState",
        "setPassAPCHeatingMode",
        "setDerogationOnOffState",
        "setDerogatedTargetTemperature",
        "setDerogationTime",
        "setComfortHeatingTargetTemperature",
        "refreshTargetTemperature",
        "refreshPassAPCHeatingProfile",
    ]);
    snap
}

/// A snapshot matching a zone-control unit: plain setpoint writes only.
fn zone_control_snapshot() -> DeviceSnapshot {
    let mut snap = DeviceSnapshot::new();
    snap.add_commands([
        "setHeatingOnOffState",
        "setPassAPCHeatingMode",
        "setHeatingTargetTemperature",
        "setCoolingTargetTemperature",
        "refreshTargetTemperature",
    ]);
    snap
}

fn heat_pump_zone() -> (ClimateZone, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let zone = ClimateZone::new(heat_pump_snapshot(), transport.clone());
    (zone, transport)
}

/// Advances the paused clock, then lets woken timer tasks run.
async fn advance(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}

/// Lets zero-delay debounce tasks run under the paused clock.
async fn tick() {
    advance(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn heat_request_on_derogating_heat_pump_cancels_derogation_first() {
    let (zone, transport) = heat_pump_zone();
    let heating = ZoneFunction::Heating;

    // Device reports an active temporary derogation and a comfort setpoint.
    zone.on_attribute_changed(&heating.profile_attribute(), "derogation".into());
    zone.on_attribute_changed(&heating.comfort_setpoint_attribute(), 21.5.into());
    tick().await;

    zone.set_target_state(TargetState::Heat).unwrap();

    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![
            Command::with_parameter("setDerogationOnOffState", "off".into()),
            Command::with_parameter("setHeatingOnOffState", "on".into()),
            Command::with_parameter("setPassAPCHeatingMode", "manu".into()),
        ]
    );
    // The comfort setpoint is echoed optimistically as the new target.
    assert_eq!(
        zone.state().target_temperature(),
        Some(Temperature::new(21.5).unwrap())
    );
}

#[tokio::test(start_paused = true)]
async fn heat_request_without_active_derogation_skips_the_cancel() {
    let (zone, transport) = heat_pump_zone();
    zone.on_attribute_changed(
        &ZoneFunction::Heating.profile_attribute(),
        "comfort".into(),
    );
    tick().await;

    zone.set_target_state(TargetState::Heat).unwrap();

    assert_eq!(
        transport.flat_names(),
        ["setHeatingOnOffState", "setPassAPCHeatingMode"]
    );
}

#[tokio::test(start_paused = true)]
async fn off_request_powers_down_and_leaves_mode_alone() {
    let (zone, transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Off).unwrap();

    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![Command::with_parameter("setHeatingOnOffState", "off".into())]
    );
}

#[tokio::test(start_paused = true)]
async fn setpoint_in_auto_on_heat_pump_becomes_a_derogation_triplet() {
    let (zone, transport) = heat_pump_zone();
    let heating = ZoneFunction::Heating;

    zone.set_target_state(TargetState::Auto).unwrap();
    // Device confirms scheduling mode; the zone is idle again.
    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "internalScheduling".into());
    tick().await;
    assert!(zone.is_idle());

    zone.set_target_temperature(22.0).unwrap();

    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![
            Command::with_parameter("setDerogatedTargetTemperature", 22.0.into()),
            Command::with_parameter("setDerogationTime", 120.0.into()),
            Command::with_parameter("setDerogationOnOffState", "on".into()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn setpoint_in_manual_on_heat_pump_writes_the_comfort_setpoint() {
    let (zone, transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Heat).unwrap();
    zone.set_target_temperature(20.0).unwrap();

    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![Command::with_parameter(
            "setComfortHeatingTargetTemperature",
            20.0.into()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn setpoint_on_zone_control_is_a_direct_write_even_in_auto() {
    let transport = Arc::new(RecordingTransport::default());
    let zone = ClimateZone::new(zone_control_snapshot(), transport.clone());

    zone.set_target_state(TargetState::Auto).unwrap();
    zone.set_target_temperature(19.0).unwrap();

    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![Command::with_parameter(
            "setHeatingTargetTemperature",
            19.0.into()
        )]
    );
}

#[tokio::test(start_paused = true)]
async fn requested_heat_survives_an_auto_echo_then_gets_confirmed() {
    let (zone, _transport) = heat_pump_zone();
    let heating = ZoneFunction::Heating;
    let target_changes = Arc::new(Mutex::new(Vec::<TargetState>::new()));
    let seen = target_changes.clone();
    zone.callbacks().on_target_state_changed(move |state| {
        seen.lock().push(state);
    });

    // Device is running its schedule.
    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "internalScheduling".into());
    tick().await;
    assert_eq!(zone.state().target_state(), Some(TargetState::Auto));

    // User switches to HEAT. A stale echo of AUTO arrives before the
    // device has processed the commands.
    zone.set_target_state(TargetState::Heat).unwrap();
    zone.on_attribute_changed(&heating.mode_attribute(), "internalScheduling".into());
    tick().await;
    assert_eq!(zone.state().target_state(), Some(TargetState::Heat));

    // The real confirmation lands.
    zone.on_attribute_changed(&heating.mode_attribute(), "manu".into());
    tick().await;
    assert!(zone.is_idle());
    assert_eq!(zone.state().target_state(), Some(TargetState::Heat));
    assert_eq!(*target_changes.lock(), [TargetState::Auto, TargetState::Heat]);
}

#[tokio::test(start_paused = true)]
async fn idle_timeout_lets_the_device_win_again() {
    let transport = Arc::new(RecordingTransport::default());
    let config = ZoneConfig::new().with_idle_timeout(Duration::from_secs(5));
    let zone = ClimateZone::with_config(heat_pump_snapshot(), transport.clone(), config);
    let heating = ZoneFunction::Heating;

    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "internalScheduling".into());
    tick().await;

    zone.set_target_state(TargetState::Off).unwrap();
    assert!(!zone.is_idle());
    assert_eq!(zone.state().target_state(), Some(TargetState::Off));

    // The device never confirms; after the timeout its state is
    // authoritative again.
    advance(Duration::from_secs(6)).await;
    assert!(zone.is_idle());
    assert_eq!(zone.state().target_state(), Some(TargetState::Auto));
}

#[tokio::test(start_paused = true)]
async fn notification_burst_commits_once() {
    let (zone, _transport) = heat_pump_zone();
    let heating = ZoneFunction::Heating;
    let commits = Arc::new(AtomicU32::new(0));
    let seen = commits.clone();
    zone.callbacks().on_current_state_changed(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "manu".into());
    zone.on_attribute_changed(&heating.profile_attribute(), "comfort".into());
    tick().await;

    assert_eq!(commits.load(Ordering::SeqCst), 1);
    assert_eq!(zone.state().current_state(), Some(CurrentState::Heat));
}

#[tokio::test(start_paused = true)]
async fn state_change_triggers_full_refresh_after_thirty_seconds() {
    let (zone, transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Auto).unwrap();
    let before = transport.batches().len();

    advance(Duration::from_secs(29)).await;
    assert_eq!(transport.batches().len(), before);

    advance(Duration::from_secs(2)).await;
    assert_eq!(
        transport.batches().last().unwrap(),
        &vec![
            Command::new("refreshTargetTemperature"),
            Command::new("refreshPassAPCHeatingProfile"),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn later_setpoint_downgrades_pending_refresh_to_temperature_only() {
    let (zone, transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Heat).unwrap();
    advance(Duration::from_secs(20)).await;

    zone.set_target_temperature(21.0).unwrap();
    advance(Duration::from_secs(31)).await;

    let refresh_batches: Vec<Vec<String>> = transport
        .batches()
        .iter()
        .map(|batch| batch.iter().map(|c| c.name().to_string()).collect())
        .filter(|names: &Vec<String>| names.iter().any(|n| n.starts_with("refresh")))
        .collect();
    assert_eq!(refresh_batches, [["refreshTargetTemperature"]]);
}

#[tokio::test(start_paused = true)]
async fn later_state_change_upgrades_pending_refresh_to_full() {
    let (zone, transport) = heat_pump_zone();
    zone.set_target_temperature(21.0).unwrap();
    advance(Duration::from_secs(20)).await;

    // The state intent re-arms the shared slot with the full variant.
    zone.set_target_state(TargetState::Heat).unwrap();
    advance(Duration::from_secs(31)).await;

    let refresh_batches: Vec<Vec<String>> = transport
        .batches()
        .iter()
        .map(|batch| batch.iter().map(|c| c.name().to_string()).collect())
        .filter(|names: &Vec<String>| names.iter().any(|n| n.starts_with("refresh")))
        .collect();
    assert_eq!(
        refresh_batches,
        [["refreshTargetTemperature", "refreshPassAPCHeatingProfile"]]
    );
}

#[tokio::test(start_paused = true)]
async fn cooling_parent_mode_switches_the_whole_vocabulary() {
    let mut snap = DeviceSnapshot::new();
    snap.add_commands([
        "setCoolingOnOffState",
        "setPassAPCCoolingMode",
        "setCoolingTargetTemperature",
    ]);
    snap.set_parent_attribute("io:PassAPCOperatingModeState", "cooling".into());
    let transport = Arc::new(RecordingTransport::default());
    let zone = ClimateZone::new(snap, transport.clone());

    zone.set_target_state(TargetState::Auto).unwrap();
    zone.set_target_temperature(24.0).unwrap();

    assert_eq!(
        transport.flat_names(),
        [
            "setCoolingOnOffState",
            "setPassAPCCoolingMode",
            "setCoolingTargetTemperature",
        ]
    );

    zone.on_attribute_changed(&ZoneFunction::Cooling.on_off_attribute(), "on".into());
    tick().await;
    assert_eq!(zone.state().current_state(), Some(CurrentState::Cool));
}

#[tokio::test(start_paused = true)]
async fn measured_temperature_flows_through_while_a_request_is_in_flight() {
    let (zone, _transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Heat).unwrap();
    assert!(!zone.is_idle());

    // The idle gate covers the target state only; readings pass through.
    zone.on_attribute_changed("core:TemperatureState", 18.5.into());
    assert_eq!(zone.state().current_temperature(), Some(18.5));
}

#[tokio::test(start_paused = true)]
async fn device_target_temperature_overrides_local_echo() {
    let (zone, _transport) = heat_pump_zone();
    zone.set_target_state(TargetState::Heat).unwrap();
    zone.set_target_temperature(22.0).unwrap();

    // The appliance clamps the setpoint to its own limit.
    zone.on_attribute_changed("core:TargetTemperatureState", 21.0.into());
    assert_eq!(
        zone.state().target_temperature(),
        Some(Temperature::new(21.0).unwrap())
    );
}

#[tokio::test(start_paused = true)]
async fn replaying_identical_attributes_changes_nothing() {
    let (zone, _transport) = heat_pump_zone();
    let heating = ZoneFunction::Heating;
    let commits = Arc::new(AtomicU32::new(0));
    let seen = commits.clone();
    zone.callbacks().on_event(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "manu".into());
    zone.on_attribute_changed("core:TemperatureState", 19.0.into());
    tick().await;
    let after_first = commits.load(Ordering::SeqCst);

    // Same notifications again: full replay, no new events.
    zone.on_attribute_changed(&heating.on_off_attribute(), "on".into());
    zone.on_attribute_changed(&heating.mode_attribute(), "manu".into());
    zone.on_attribute_changed("core:TemperatureState", 19.0.into());
    tick().await;
    assert_eq!(commits.load(Ordering::SeqCst), after_first);
}
