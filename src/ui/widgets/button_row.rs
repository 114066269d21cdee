//! Row widget for one-shot device actions.

use egui::{Align, Layout, RichText, Ui};

use crate::ui::theme::DarkTheme;

/// A titled row with a single action button.
pub struct ButtonRow<'a> {
    /// Row title
    title: &'a str,
    /// Action button label
    button_label: &'a str,
    /// Description shown under the title
    description: &'a str,
    /// Draw the button in the destructive color
    danger: bool,
}

impl<'a> ButtonRow<'a> {
    /// Create a new button row.
    pub fn new(title: &'a str, button_label: &'a str, description: &'a str) -> Self {
        Self {
            title,
            button_label,
            description,
            danger: false,
        }
    }

    /// Draw the action button in the destructive color.
    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }

    /// Render the row; true when the button was pressed this frame.
    pub fn show(self, ui: &mut Ui) -> bool {
        let mut clicked = false;

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
                let mut button = egui::Button::new(RichText::new(self.button_label).size(13.0));
                if self.danger {
                    button = button.fill(DarkTheme::DANGER);
                }
                if ui.add(button).clicked() {
                    clicked = true;
                }
            });
        });

        clicked
    }
}
