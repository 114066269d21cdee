//! Rendering rules for stored values.
//!
//! A `ValueFormat` turns a stored integer into display text. Rendering is a
//! pure function of the stored value and the unit system captured when the
//! catalog was built; nothing here touches the store.

use crate::params::ParamStore;

/// Unit system preference, read once from the metric-system toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Imperial units (mph, feet)
    #[default]
    Imperial,
    /// Metric units (km/h, meters)
    Metric,
}

impl UnitSystem {
    /// Read the preference from the store's metric-system toggle.
    pub fn from_store(store: &dyn ParamStore) -> Self {
        if store.get_bool("IsMetric") {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    /// Suffix for speed values.
    pub fn speed_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => " km/h",
            UnitSystem::Imperial => " mph",
        }
    }

    /// Suffix for short distance values.
    pub fn distance_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => " meters",
            UnitSystem::Imperial => " feet",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

/// Rendering rule for a stored integer value.
#[derive(Debug, Clone, Copy)]
pub enum ValueFormat {
    /// Bare number.
    Raw,
    /// Number with a fixed suffix, e.g. "%".
    Suffix(&'static str),
    /// Value is stored in tenths; rendered as a decimal plus a suffix.
    Tenths(&'static str),
    /// Value selects a label; `base` is the stored value of the first label.
    /// Out-of-range values pin to the nearest label.
    Labels {
        base: i64,
        labels: &'static [&'static str],
    },
    /// Speed in the active unit system; `zero` renders in place of 0.
    Speed { zero: Option<&'static str> },
    /// Short distance in the active unit system; `zero` renders in place of 0.
    Distance { zero: Option<&'static str> },
    /// Value is stored in half seconds; 0 renders "Instant".
    HalfSeconds,
    /// Shutdown timer encoding: 0 is instant, 1-3 are quarter hours, above
    /// that whole hours.
    ShutdownTimer,
}

impl ValueFormat {
    /// Render `value` as display text.
    pub fn render(&self, value: i64, units: UnitSystem) -> String {
        match *self {
            ValueFormat::Raw => value.to_string(),
            ValueFormat::Suffix(suffix) => format!("{}{}", value, suffix),
            ValueFormat::Tenths(suffix) => format!("{}{}", value as f64 / 10.0, suffix),
            ValueFormat::Labels { base, labels } => {
                let last = labels.len().saturating_sub(1) as i64;
                let index = (value - base).clamp(0, last);
                labels
                    .get(index as usize)
                    .copied()
                    .unwrap_or_default()
                    .to_string()
            }
            ValueFormat::Speed { zero } => match zero {
                Some(label) if value == 0 => label.to_string(),
                _ => format!("{}{}", value, units.speed_suffix()),
            },
            ValueFormat::Distance { zero } => match zero {
                Some(label) if value == 0 => label.to_string(),
                _ => format!("{}{}", value, units.distance_suffix()),
            },
            ValueFormat::HalfSeconds => {
                if value == 0 {
                    "Instant".to_string()
                } else {
                    format!("{} sec", value as f64 / 2.0)
                }
            }
            ValueFormat::ShutdownTimer => match value {
                0 => "Instant".to_string(),
                1..=3 => format!("{} mins", value * 15),
                4 => "1 hour".to_string(),
                _ => format!("{} hours", value - 3),
            },
        }
    }
}
