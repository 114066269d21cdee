//! Device identity and maintenance actions.
//!
//! Power actions are committed by writing sentinel booleans the platform
//! supervisor watches; this process never restarts anything itself.

use crate::params::ParamStore;
use crate::settings::CycleParam;

/// Sentinel asking the supervisor to reboot the device.
pub const DO_REBOOT_KEY: &str = "DoReboot";
/// Sentinel asking the supervisor to power the device off.
pub const DO_SHUTDOWN_KEY: &str = "DoShutdown";

/// Keys holding learned calibration state. Removed opaquely; their contents
/// are owned by the calibration daemon.
const CALIBRATION_KEYS: [&str; 2] = ["CalibrationParams", "LiveTorqueParameters"];

/// Driving model selector. Switching models invalidates calibration, so it
/// lives here next to the reset rather than in the catalog.
pub static DRIVING_MODEL: CycleParam = CycleParam {
    key: "DrivingModel",
    title: "Driving Model",
    description: "Select the driving model. Takes effect after a reboot.",
    labels: &["Blue Diamond", "Farmville", "Lemon Pie", "New Delhi"],
};

/// Static identity shown at the top of the device panel.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Platform registration ID
    pub dongle_id: String,
    /// Hardware serial number
    pub serial: String,
}

impl DeviceInfo {
    /// Read identity from the store; absent values display as "N/A".
    pub fn read(store: &dyn ParamStore) -> Self {
        Self {
            dongle_id: or_na(store.get("DongleId")),
            serial: or_na(store.get("HardwareSerial")),
        }
    }
}

fn or_na(value: String) -> String {
    if value.trim().is_empty() {
        "N/A".to_string()
    } else {
        value
    }
}

/// Ask the supervisor to reboot once the UI has settled.
pub fn request_reboot(store: &dyn ParamStore) {
    store.put_bool(DO_REBOOT_KEY, true);
}

/// Ask the supervisor to power the device off.
pub fn request_shutdown(store: &dyn ParamStore) {
    store.put_bool(DO_SHUTDOWN_KEY, true);
}

/// Drop learned calibration so the platform re-learns mount geometry.
pub fn reset_calibration(store: &dyn ParamStore) {
    for key in CALIBRATION_KEYS {
        store.remove(key);
    }
}

/// Step the driving model selection and invalidate calibration for it.
pub fn step_driving_model(store: &dyn ParamStore, session: &dyn ParamStore, forward: bool) {
    if forward {
        DRIVING_MODEL.next(store, session);
    } else {
        DRIVING_MODEL.prev(store, session);
    }
    reset_calibration(store);
}
