//! Static title/value row.

use egui::{Align, Layout, RichText, Ui};

use crate::ui::theme::DarkTheme;

/// A read-only row pairing a title with a value, used for device identity.
pub struct LabelRow<'a> {
    title: &'a str,
    value: &'a str,
}

impl<'a> LabelRow<'a> {
    /// Create a new label row.
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self { title, value }
    }

    /// Render the row.
    pub fn show(self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(self.title).size(15.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(self.value)
                        .size(14.0)
                        .color(DarkTheme::TEXT_SECONDARY),
                );
            });
        });
    }
}
