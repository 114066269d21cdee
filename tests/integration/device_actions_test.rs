//! Device maintenance flows: confirmation, power sentinels, calibration.

use roadpilot_settings::device::{
    self, DeviceInfo, DO_REBOOT_KEY, DO_SHUTDOWN_KEY, DRIVING_MODEL,
};
use roadpilot_settings::params::{MemoryParamStore, ParamStore};
use roadpilot_settings::settings::SETTINGS_UPDATED_KEY;
use roadpilot_settings::ui::{ConfirmAction, ConfirmDialog};

#[test]
fn test_reboot_writes_supervisor_sentinel() {
    let store = MemoryParamStore::new();

    device::request_reboot(&store);
    assert!(store.get_bool(DO_REBOOT_KEY));
    assert!(!store.get_bool(DO_SHUTDOWN_KEY));
}

#[test]
fn test_shutdown_writes_supervisor_sentinel() {
    let store = MemoryParamStore::new();

    device::request_shutdown(&store);
    assert!(store.get_bool(DO_SHUTDOWN_KEY));
}

#[test]
fn test_reset_calibration_removes_learned_state() {
    let store = MemoryParamStore::new();
    store.put("CalibrationParams", "blob");
    store.put("LiveTorqueParameters", "blob");

    device::reset_calibration(&store);

    assert_eq!(store.get("CalibrationParams"), "");
    assert_eq!(store.get("LiveTorqueParameters"), "");
}

#[test]
fn test_model_switch_invalidates_calibration() {
    let store = MemoryParamStore::new();
    let session = MemoryParamStore::new();
    store.put("CalibrationParams", "blob");
    store.put_int(DRIVING_MODEL.key, 0);

    device::step_driving_model(&store, &session, true);

    assert_eq!(store.get_int(DRIVING_MODEL.key), 1);
    assert_eq!(store.get("CalibrationParams"), "");
    assert!(session.get_bool(SETTINGS_UPDATED_KEY));
}

#[test]
fn test_model_selector_wraps_both_directions() {
    let store = MemoryParamStore::new();
    let session = MemoryParamStore::new();
    let last = DRIVING_MODEL.labels.len() as i64 - 1;

    store.put_int(DRIVING_MODEL.key, last);
    device::step_driving_model(&store, &session, true);
    assert_eq!(store.get_int(DRIVING_MODEL.key), 0);

    device::step_driving_model(&store, &session, false);
    assert_eq!(store.get_int(DRIVING_MODEL.key), last);
}

#[test]
fn test_cancelled_reboot_changes_nothing() {
    let store = MemoryParamStore::new();
    let mut dialog = ConfirmDialog::default();

    dialog.request(ConfirmAction::Reboot, "Are you sure?", "Reboot");
    if let Some(ConfirmAction::Reboot) = dialog.resolve(false) {
        device::request_reboot(&store);
    }

    assert!(!store.get_bool(DO_REBOOT_KEY));
}

#[test]
fn test_confirmed_reboot_commits() {
    let store = MemoryParamStore::new();
    let mut dialog = ConfirmDialog::default();

    dialog.request(ConfirmAction::Reboot, "Are you sure?", "Reboot");
    if let Some(ConfirmAction::Reboot) = dialog.resolve(true) {
        device::request_reboot(&store);
    }

    assert!(store.get_bool(DO_REBOOT_KEY));
}

#[test]
fn test_device_info_defaults_to_na() {
    let store = MemoryParamStore::new();
    let info = DeviceInfo::read(&store);
    assert_eq!(info.dongle_id, "N/A");
    assert_eq!(info.serial, "N/A");

    store.put("DongleId", "3b58edf884ab4eaf");
    let info = DeviceInfo::read(&store);
    assert_eq!(info.dongle_id, "3b58edf884ab4eaf");
}
