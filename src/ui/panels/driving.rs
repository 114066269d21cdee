//! Driving panel: behavior controls grouped into sub-categories.

use egui::Ui;

use crate::settings::catalog::Category;

use super::{show_entries, PanelContext};

/// Driving panel state.
pub struct DrivingPanel {
    /// Sub-categories, captured from the catalog at construction
    categories: Vec<Category>,
    /// Index of the visible sub-category
    active: usize,
}

impl DrivingPanel {
    /// Build the panel from catalog categories. The first category is
    /// visible initially.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            active: 0,
        }
    }

    /// Make the category at `index` the only visible one.
    pub fn select(&mut self, index: usize) {
        if index < self.categories.len() {
            self.active = index;
        }
    }

    /// Index of the currently visible category.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Render the switcher row and the visible category.
    pub fn show(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        let mut selected = None;
        ui.horizontal(|ui| {
            for (i, category) in self.categories.iter().enumerate() {
                if ui
                    .selectable_label(i == self.active, category.name)
                    .clicked()
                {
                    selected = Some(i);
                }
            }
        });
        if let Some(index) = selected {
            self.select(index);
        }

        ui.separator();
        ui.add_space(8.0);

        if let Some(category) = self.categories.get(self.active).cloned() {
            show_entries(ui, ctx, &category.entries);
        }
    }
}
