//! Cyclic selectors.

use crate::params::ParamStore;

use super::mark_updated;

/// A selector cycling through a fixed label list.
///
/// Stepping past the last option wraps to the first and stepping below the
/// first wraps to the last. Deliberately distinct from `BoundedParam`'s
/// saturation: cyclic choices like "None / Wheel / UI" have no edge worth
/// pinning to.
#[derive(Debug, Clone, Copy)]
pub struct CycleParam {
    /// Store key backing this selector.
    pub key: &'static str,
    /// Row title.
    pub title: &'static str,
    /// Longer description shown under the row.
    pub description: &'static str,
    /// Option labels, in stored-value order starting at 0.
    pub labels: &'static [&'static str],
}

impl CycleParam {
    /// Current stored selection, wrapped into the option range.
    pub fn current(&self, store: &dyn ParamStore) -> i64 {
        wrap(store.get_int(self.key), self.len())
    }

    /// Advance to the next option, wrapping after the last.
    pub fn next(&self, store: &dyn ParamStore, session: &dyn ParamStore) {
        self.apply_delta(store, session, 1);
    }

    /// Go back to the previous option, wrapping before the first.
    pub fn prev(&self, store: &dyn ParamStore, session: &dyn ParamStore) {
        self.apply_delta(store, session, -1);
    }

    /// Label of the current selection.
    pub fn render(&self, store: &dyn ParamStore) -> String {
        self.labels
            .get(self.current(store) as usize)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    fn len(&self) -> i64 {
        self.labels.len() as i64
    }

    fn apply_delta(&self, store: &dyn ParamStore, session: &dyn ParamStore, delta: i64) {
        let next = wrap(store.get_int(self.key).saturating_add(delta), self.len());
        store.put_int(self.key, next);
        mark_updated(session);
    }
}

/// Modulo-with-fallback used by every cyclic selector: non-negative values
/// wrap forward, anything negative lands on the last option.
fn wrap(value: i64, len: i64) -> i64 {
    if len <= 0 {
        return 0;
    }
    if value >= 0 {
        value % len
    } else {
        len - 1
    }
}
