//! Row widget for boolean settings.

use egui::{Align, Layout, RichText, Ui};

use crate::ui::theme::DarkTheme;

/// A titled row with an on/off switch.
pub struct ToggleRow<'a> {
    /// Row title
    title: &'a str,
    /// Description shown under the title
    description: &'a str,
    /// Current state
    on: bool,
}

impl<'a> ToggleRow<'a> {
    /// Create a new toggle row.
    pub fn new(title: &'a str, description: &'a str, on: bool) -> Self {
        Self {
            title,
            description,
            on,
        }
    }

    /// Render the row; returns the requested state when the switch is
    /// flipped this frame.
    pub fn show(self, ui: &mut Ui) -> Option<bool> {
        let mut requested = None;
        let mut on = self.on;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(self.title).size(15.0).strong());
                if !self.description.is_empty() {
                    ui.label(
                        RichText::new(self.description)
                            .size(12.0)
                            .color(DarkTheme::TEXT_SECONDARY),
                    );
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let label = if on { "On" } else { "Off" };
                if ui.toggle_value(&mut on, label).clicked() {
                    requested = Some(on);
                }
            });
        });

        requested
    }
}
