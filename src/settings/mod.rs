//! Setting descriptors and mutation policies.
//!
//! Each control kind is one parametric type configured by a descriptor
//! (key, bounds, step, formatter) instead of one generated type per setting.
//! The saturating and wrapping numeric policies are deliberately separate
//! types; their behavior at the boundary is user-visible and must not drift
//! together.

pub mod catalog;
pub mod cycle;
pub mod format;
pub mod numeric;
pub mod toggle;

pub use catalog::{Category, SettingEntry, SettingsCatalog};
pub use cycle::CycleParam;
pub use format::{UnitSystem, ValueFormat};
pub use numeric::BoundedParam;
pub use toggle::ToggleParam;

use crate::params::ParamStore;

/// Session-store key other platform processes watch for settings changes.
pub const SETTINGS_UPDATED_KEY: &str = "SettingsUpdated";

/// Raise the change flag for external consumers. Written on every mutation;
/// this process never reads it back.
pub fn mark_updated(session: &dyn ParamStore) {
    session.put_bool(SETTINGS_UPDATED_KEY, true);
}
