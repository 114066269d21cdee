//! Declarative setting tables.
//!
//! Every panel row is described here as data and instantiated through the
//! parametric types in this module's siblings. Bounds and suffixes that
//! depend on the unit system are resolved once, when the catalog is built;
//! panels capture the result for their lifetime.

use super::cycle::CycleParam;
use super::format::{UnitSystem, ValueFormat};
use super::numeric::BoundedParam;
use super::toggle::ToggleParam;

/// A single row in a category.
#[derive(Debug, Clone, Copy)]
pub enum SettingEntry {
    /// Boolean on/off row.
    Toggle(ToggleParam),
    /// Saturating numeric row with - / + steppers.
    Bounded(BoundedParam),
    /// Wrapping selector row with - / + steppers.
    Cycle(CycleParam),
}

impl SettingEntry {
    /// Store key behind this entry.
    pub fn key(&self) -> &'static str {
        match self {
            SettingEntry::Toggle(t) => t.key,
            SettingEntry::Bounded(b) => b.key,
            SettingEntry::Cycle(c) => c.key,
        }
    }
}

/// Named group of settings shown together.
#[derive(Debug, Clone)]
pub struct Category {
    /// Switcher button label.
    pub name: &'static str,
    /// Rows, in display order.
    pub entries: Vec<SettingEntry>,
}

/// Everything the panels render, grouped the way the panels show it.
#[derive(Debug, Clone)]
pub struct SettingsCatalog {
    /// Unit system captured at build time.
    pub units: UnitSystem,
    /// Rows of the Toggles panel.
    pub toggles: Vec<SettingEntry>,
    /// Sub-categories of the Driving panel.
    pub driving: Vec<Category>,
    /// Rows of the Display panel.
    pub display: Vec<SettingEntry>,
}

fn toggle(key: &'static str, title: &'static str, description: &'static str) -> SettingEntry {
    SettingEntry::Toggle(ToggleParam {
        key,
        title,
        description,
        confirm: false,
    })
}

fn confirmed_toggle(
    key: &'static str,
    title: &'static str,
    description: &'static str,
) -> SettingEntry {
    SettingEntry::Toggle(ToggleParam {
        key,
        title,
        description,
        confirm: true,
    })
}

#[allow(clippy::too_many_arguments)]
fn bounded(
    key: &'static str,
    title: &'static str,
    description: &'static str,
    min: i64,
    max: i64,
    step: i64,
    format: ValueFormat,
) -> SettingEntry {
    SettingEntry::Bounded(BoundedParam {
        key,
        title,
        description,
        min,
        max,
        step,
        format,
    })
}

fn cycle(
    key: &'static str,
    title: &'static str,
    description: &'static str,
    labels: &'static [&'static str],
) -> SettingEntry {
    SettingEntry::Cycle(CycleParam {
        key,
        title,
        description,
        labels,
    })
}

impl SettingsCatalog {
    /// Build the full catalog for the given unit system.
    pub fn build(units: UnitSystem) -> Self {
        Self {
            units,
            toggles: toggles_rows(),
            driving: driving_categories(units),
            display: display_rows(),
        }
    }

    /// Look up an entry anywhere in the catalog by store key.
    pub fn find(&self, key: &str) -> Option<&SettingEntry> {
        self.toggles
            .iter()
            .chain(self.driving.iter().flat_map(|c| c.entries.iter()))
            .chain(self.display.iter())
            .find(|entry| entry.key() == key)
    }
}

fn toggles_rows() -> Vec<SettingEntry> {
    vec![
        toggle(
            "RoadPilotEnabled",
            "Enable RoadPilot",
            "Use RoadPilot for adaptive cruise control and lane keeping. Your \
             attention is required at all times. Changes take effect when the \
             car is powered off.",
        ),
        cycle(
            "DrivingPersonality",
            "Driving Personality",
            "Standard is recommended. In aggressive mode the car follows lead \
             vehicles closer and uses the gas and brake more firmly. In \
             relaxed mode it keeps more distance.",
            &["Aggressive", "Standard", "Relaxed"],
        ),
        cycle(
            "AdjustablePersonalities",
            "Personality Switching",
            "Choose where the driving personality can be changed from: the \
             steering wheel distance button, the onroad UI, or both.",
            &["None", "Wheel", "UI", "Wheel + UI"],
        ),
        confirmed_toggle(
            "ExperimentalMode",
            "Experimental Mode",
            "Enable alpha-level features that are not ready for everyday \
             driving, including end-to-end longitudinal control.",
        ),
        toggle(
            "DisengageOnAccelerator",
            "Disengage on Accelerator Pedal",
            "When enabled, pressing the accelerator pedal disengages RoadPilot.",
        ),
        toggle(
            "IsLdwEnabled",
            "Enable Lane Departure Warnings",
            "Receive alerts to steer back into the lane when the vehicle \
             drifts over a detected lane line without a turn signal.",
        ),
        toggle(
            "RecordFront",
            "Record and Upload Driver Camera",
            "Upload data from the driver-facing camera to help improve driver \
             monitoring.",
        ),
        toggle(
            "IsMetric",
            "Use Metric System",
            "Display speeds in km/h instead of mph. Takes effect after the \
             console restarts.",
        ),
    ]
}

fn driving_categories(units: UnitSystem) -> Vec<Category> {
    let metric = units == UnitSystem::Metric;
    let speed_max = if metric { 150 } else { 99 };
    let stop_max = if metric { 5 } else { 15 };

    vec![
        Category {
            name: "Personality",
            entries: vec![
                bounded(
                    "AggressiveFollow",
                    "Aggressive: Follow Time",
                    "Seconds of following distance behind the lead vehicle for \
                     the aggressive personality.",
                    8,
                    50,
                    1,
                    ValueFormat::Tenths(" sec"),
                ),
                bounded(
                    "AggressiveJerk",
                    "Aggressive: Jerk",
                    "Gas and brake responsiveness for the aggressive \
                     personality. Higher values respond less eagerly.",
                    1,
                    50,
                    1,
                    ValueFormat::Tenths(""),
                ),
                bounded(
                    "StandardFollow",
                    "Standard: Follow Time",
                    "Seconds of following distance behind the lead vehicle for \
                     the standard personality.",
                    10,
                    50,
                    1,
                    ValueFormat::Tenths(" sec"),
                ),
                bounded(
                    "StandardJerk",
                    "Standard: Jerk",
                    "Gas and brake responsiveness for the standard personality.",
                    1,
                    50,
                    1,
                    ValueFormat::Tenths(""),
                ),
                bounded(
                    "RelaxedFollow",
                    "Relaxed: Follow Time",
                    "Seconds of following distance behind the lead vehicle for \
                     the relaxed personality.",
                    10,
                    50,
                    1,
                    ValueFormat::Tenths(" sec"),
                ),
                bounded(
                    "RelaxedJerk",
                    "Relaxed: Jerk",
                    "Gas and brake responsiveness for the relaxed personality.",
                    1,
                    50,
                    1,
                    ValueFormat::Tenths(""),
                ),
                bounded(
                    "AccelerationProfile",
                    "Acceleration Profile",
                    "Rate of acceleration: eco friendly, stock, or sporty.",
                    1,
                    3,
                    1,
                    ValueFormat::Labels {
                        base: 1,
                        labels: &["Eco", "Normal", "Sport"],
                    },
                ),
            ],
        },
        Category {
            name: "Speed Limits",
            entries: vec![
                bounded(
                    "SpeedLimitOffset1",
                    if metric { "Limit 0-54 km/h" } else { "Limit 0-34 mph" },
                    "Offset above the posted limit in the lowest band.",
                    0,
                    99,
                    1,
                    ValueFormat::Speed { zero: None },
                ),
                bounded(
                    "SpeedLimitOffset2",
                    if metric { "Limit 55-89 km/h" } else { "Limit 35-54 mph" },
                    "Offset above the posted limit in the second band.",
                    0,
                    99,
                    1,
                    ValueFormat::Speed { zero: None },
                ),
                bounded(
                    "SpeedLimitOffset3",
                    if metric { "Limit 90-104 km/h" } else { "Limit 55-64 mph" },
                    "Offset above the posted limit in the third band.",
                    0,
                    99,
                    1,
                    ValueFormat::Speed { zero: None },
                ),
                bounded(
                    "SpeedLimitOffset4",
                    if metric { "Limit 105-159 km/h" } else { "Limit 65-99 mph" },
                    "Offset above the posted limit in the highest band.",
                    0,
                    99,
                    1,
                    ValueFormat::Speed { zero: None },
                ),
                cycle(
                    "SpeedLimitFallback",
                    "Limit Fallback",
                    "What to do when no speed limit is available from \
                     navigation, offline maps, or the dashboard.",
                    &["None", "Experimental Mode", "Previous Limit"],
                ),
                cycle(
                    "SpeedLimitPriority",
                    "Limit Priority",
                    "Which source wins when multiple speed limits disagree.",
                    &["Navigation", "Dashboard", "Offline Maps", "Highest", "Lowest"],
                ),
            ],
        },
        Category {
            name: "Comfort",
            entries: vec![
                bounded(
                    "ConditionalSpeed",
                    "Experimental Below (No Lead)",
                    "Switch to Experimental Mode below this speed when there is \
                     no lead vehicle.",
                    0,
                    speed_max,
                    1,
                    ValueFormat::Speed { zero: Some("Off") },
                ),
                bounded(
                    "ConditionalSpeedLead",
                    "Experimental Below (Lead)",
                    "Switch to Experimental Mode below this speed when \
                     following a lead vehicle.",
                    0,
                    speed_max,
                    1,
                    ValueFormat::Speed { zero: Some("Off") },
                ),
                bounded(
                    "StoppingDistance",
                    "Increase Stopping Distance",
                    "Extra distance to leave when coming to a stop.",
                    0,
                    stop_max,
                    1,
                    ValueFormat::Distance { zero: Some("Off") },
                ),
                bounded(
                    "LaneChangeTime",
                    "Lane Change Delay",
                    "Delay before a nudgeless lane change is carried out.",
                    0,
                    10,
                    1,
                    ValueFormat::HalfSeconds,
                ),
                bounded(
                    "DeviceShutdown",
                    "Device Shutdown Timer",
                    "How long the device stays powered after the drive ends.",
                    0,
                    33,
                    1,
                    ValueFormat::ShutdownTimer,
                ),
            ],
        },
        Category {
            name: "Tuning",
            entries: vec![
                bounded(
                    "CurveSensitivity",
                    "Curve Detection Sensitivity",
                    "How early the car reacts to curves. Higher values react \
                     earlier.",
                    1,
                    200,
                    1,
                    ValueFormat::Suffix("%"),
                ),
                bounded(
                    "TurnAggressiveness",
                    "Turn Speed Aggressiveness",
                    "How quickly the car takes turns. Higher values corner \
                     faster.",
                    1,
                    200,
                    1,
                    ValueFormat::Suffix("%"),
                ),
            ],
        },
    ]
}

fn display_rows() -> Vec<SettingEntry> {
    vec![
        bounded(
            "HudMode",
            "HUD Layout",
            "Arrangement of the onroad heads-up display.",
            0,
            5,
            1,
            ValueFormat::Labels {
                base: 0,
                labels: &["Classic", "Minimal", "Bottom", "Top", "Left", "Left + Bottom"],
            },
        ),
        bounded(
            "ClockDisplay",
            "Clock Display",
            "What the onroad clock shows.",
            0,
            3,
            1,
            ValueFormat::Labels {
                base: 0,
                labels: &["None", "Time and Date", "Time", "Date"],
            },
        ),
        bounded(
            "ShowLaneInfo",
            "Lane Overlay",
            "How much of the detected road geometry to draw.",
            -1,
            2,
            1,
            ValueFormat::Labels {
                base: -1,
                labels: &["None", "Path", "Path and Lanes", "Path, Lanes and Edges"],
            },
        ),
        bounded(
            "PathWidth",
            "Path Width",
            "Width of the drawn driving path relative to stock.",
            10,
            200,
            10,
            ValueFormat::Suffix("%"),
        ),
        bounded(
            "PathHeightOffset",
            "Path Height Offset",
            "Vertical adjustment of the drawn path. Positive moves it down.",
            -300,
            300,
            10,
            ValueFormat::Raw,
        ),
        toggle(
            "ShowDebugInfo",
            "Show Debug Overlay",
            "Draw developer metrics on top of the onroad view.",
        ),
    ]
}
