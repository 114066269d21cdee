//! Bounded integer settings.

use crate::params::ParamStore;

use super::format::{UnitSystem, ValueFormat};
use super::mark_updated;

/// A numeric parameter with an inclusive range, a step size, and a rendering
/// rule.
///
/// Mutations saturate: stepping past an edge pins the value exactly at the
/// edge, even when the step exceeds the remaining distance. A missing or
/// malformed stored value reads as 0 before clamping.
#[derive(Debug, Clone, Copy)]
pub struct BoundedParam {
    /// Store key backing this setting.
    pub key: &'static str,
    /// Row title.
    pub title: &'static str,
    /// Longer description shown under the row.
    pub description: &'static str,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Amount applied per increment/decrement.
    pub step: i64,
    /// Rendering rule for the stored value.
    pub format: ValueFormat,
}

impl BoundedParam {
    /// Current stored value clamped into range.
    pub fn current(&self, store: &dyn ParamStore) -> i64 {
        store.get_int(self.key).clamp(self.min, self.max)
    }

    /// Step the value up and persist it.
    pub fn increment(&self, store: &dyn ParamStore, session: &dyn ParamStore) {
        self.apply_delta(store, session, self.step);
    }

    /// Step the value down and persist it.
    pub fn decrement(&self, store: &dyn ParamStore, session: &dyn ParamStore) {
        self.apply_delta(store, session, -self.step);
    }

    /// Rendered display text for the current value.
    pub fn render(&self, store: &dyn ParamStore, units: UnitSystem) -> String {
        self.format.render(self.current(store), units)
    }

    fn apply_delta(&self, store: &dyn ParamStore, session: &dyn ParamStore, delta: i64) {
        let next = store
            .get_int(self.key)
            .saturating_add(delta)
            .clamp(self.min, self.max);
        store.put_int(self.key, next);
        mark_updated(session);
    }
}
