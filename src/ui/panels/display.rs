//! Display panel: onroad rendering options.

use egui::Ui;

use crate::settings::catalog::SettingEntry;

use super::{show_entries, PanelContext};

/// Display panel state.
pub struct DisplayPanel {
    /// Rows, captured from the catalog at construction
    entries: Vec<SettingEntry>,
}

impl DisplayPanel {
    /// Build the panel from catalog rows.
    pub fn new(entries: Vec<SettingEntry>) -> Self {
        Self { entries }
    }

    /// Render the panel.
    pub fn show(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        show_entries(ui, ctx, &self.entries);
    }
}
