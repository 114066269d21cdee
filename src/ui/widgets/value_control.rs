//! Row widget for numeric settings with - / + steppers.

use egui::{Align, Layout, RichText, Ui, Vec2};

use crate::ui::theme::DarkTheme;

/// Which stepper the operator pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepAction {
    /// Nothing pressed
    #[default]
    None,
    /// The - button
    Down,
    /// The + button
    Up,
}

/// A titled row showing the rendered value between - and + buttons.
///
/// The widget is display-only; the caller applies the reported action to
/// its setting.
pub struct ValueControl<'a> {
    /// Row title
    title: &'a str,
    /// Description shown under the title
    description: &'a str,
    /// Rendered value text
    value_text: String,
}

impl<'a> ValueControl<'a> {
    /// Create a new value control row.
    pub fn new(title: &'a str, description: &'a str, value_text: impl Into<String>) -> Self {
        Self {
            title,
            description,
            value_text: value_text.into(),
        }
    }

    /// Render the row; reports which stepper was pressed.
    pub fn show(self, ui: &mut Ui) -> StepAction {
        let mut action = StepAction::None;
        let button_size = Vec2::new(40.0, 28.0);

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
                if ui
                    .add_sized(button_size, egui::Button::new(RichText::new("+").size(16.0)))
                    .clicked()
                {
                    action = StepAction::Up;
                }
                if ui
                    .add_sized(button_size, egui::Button::new(RichText::new("−").size(16.0)))
                    .clicked()
                {
                    action = StepAction::Down;
                }
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&self.value_text)
                        .size(15.0)
                        .color(DarkTheme::VALUE),
                );
            });
        });

        action
    }
}
