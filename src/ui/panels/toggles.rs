//! Toggles panel: core feature switches.

use egui::Ui;

use crate::settings::catalog::SettingEntry;

use super::{show_entries, PanelContext};

/// Toggles panel state.
pub struct TogglesPanel {
    /// Rows, captured from the catalog at construction
    entries: Vec<SettingEntry>,
}

impl TogglesPanel {
    /// Build the panel from catalog rows.
    pub fn new(entries: Vec<SettingEntry>) -> Self {
        Self { entries }
    }

    /// Render the panel.
    pub fn show(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        show_entries(ui, ctx, &self.entries);
    }
}
