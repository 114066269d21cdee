//! Boolean toggles.

use crate::params::{ParamStore, ParamWriter};

use super::mark_updated;

/// A boolean setting flipped directly from its row.
#[derive(Debug, Clone, Copy)]
pub struct ToggleParam {
    /// Store key backing this toggle.
    pub key: &'static str,
    /// Row title.
    pub title: &'static str,
    /// Longer description shown under the row.
    pub description: &'static str,
    /// Route flips through the confirmation dialog before committing.
    pub confirm: bool,
}

impl ToggleParam {
    /// Current stored state.
    pub fn is_set(&self, store: &dyn ParamStore) -> bool {
        store.get_bool(self.key)
    }

    /// Persist a new state fire-and-forget and raise the change flag.
    pub fn set(&self, writer: &ParamWriter, session: &dyn ParamStore, on: bool) {
        writer.put_bool(self.key, on);
        mark_updated(session);
    }
}
