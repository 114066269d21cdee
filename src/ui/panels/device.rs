//! Device panel: identity, maintenance actions, and power controls.

use egui::{RichText, Ui};

use crate::device::{self, DeviceInfo, DRIVING_MODEL};
use crate::ui::confirm::ConfirmAction;
use crate::ui::widgets::{ButtonRow, LabelRow, StepAction, ValueControl};

use super::PanelContext;

/// Device panel state.
pub struct DevicePanel {
    /// Identity read once at construction
    info: DeviceInfo,
}

impl DevicePanel {
    /// Build the panel, reading identity from the store.
    pub fn new(store: &dyn crate::params::ParamStore) -> Self {
        Self {
            info: DeviceInfo::read(store),
        }
    }

    /// Render the panel.
    pub fn show(&mut self, ui: &mut Ui, ctx: &mut PanelContext<'_>) {
        LabelRow::new("Dongle ID", &self.info.dongle_id).show(ui);
        ui.separator();
        LabelRow::new("Serial", &self.info.serial).show(ui);
        ui.separator();

        let model_row = ValueControl::new(
            DRIVING_MODEL.title,
            DRIVING_MODEL.description,
            DRIVING_MODEL.render(ctx.store),
        );
        match model_row.show(ui) {
            StepAction::Up => device::step_driving_model(ctx.store, ctx.session, true),
            StepAction::Down => device::step_driving_model(ctx.store, ctx.session, false),
            StepAction::None => {}
        }
        ui.separator();

        let reset_row = ButtonRow::new(
            "Reset Calibration",
            "RESET",
            "RoadPilot calibrates continuously; resetting is rarely required.",
        )
        .danger();
        if reset_row.show(ui) {
            ctx.confirm.request(
                ConfirmAction::ResetCalibration,
                "Are you sure you want to reset calibration?",
                "Reset",
            );
        }
        ui.separator();

        let training_row = ButtonRow::new(
            "Review Training Guide",
            "REVIEW",
            "Review the rules, features, and limitations of RoadPilot.",
        );
        if training_row.show(ui) {
            ctx.confirm.request(
                ConfirmAction::ReviewTrainingGuide,
                "Are you sure you want to review the training guide?",
                "Review",
            );
        }
        ui.separator();

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("Reboot").size(16.0))
                .clicked()
            {
                ctx.confirm.request(
                    ConfirmAction::Reboot,
                    "Are you sure you want to reboot?",
                    "Reboot",
                );
            }
            if ui
                .button(RichText::new("Power Off").size(16.0))
                .clicked()
            {
                ctx.confirm.request(
                    ConfirmAction::PowerOff,
                    "Are you sure you want to power off?",
                    "Power Off",
                );
            }
        });
    }
}
