//! Two-step confirmation for destructive actions.
//!
//! Actions are requested, then committed only when the pending request is
//! resolved with a confirmation. The state machine is independent of the
//! display surface; `show` is a thin egui front end over `resolve`.

use egui::{Align2, Context, RichText};

use super::theme::DarkTheme;

/// Actions that require operator confirmation before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Write the reboot sentinel.
    Reboot,
    /// Write the shutdown sentinel.
    PowerOff,
    /// Remove learned calibration.
    ResetCalibration,
    /// Re-run the operator training guide.
    ReviewTrainingGuide,
    /// Flip a toggle that demanded confirmation.
    SetToggle { key: &'static str, on: bool },
}

/// A requested action awaiting confirmation.
#[derive(Debug, Clone)]
pub struct PendingConfirm {
    /// Action committed if the operator confirms.
    pub action: ConfirmAction,
    /// Question shown to the operator.
    pub prompt: String,
    /// Label of the confirming button.
    pub confirm_label: &'static str,
}

/// Confirmation dialog state machine.
///
/// At most one request is pending; a new request replaces an unresolved one.
#[derive(Debug, Default)]
pub struct ConfirmDialog {
    pending: Option<PendingConfirm>,
}

impl ConfirmDialog {
    /// Request confirmation for `action`.
    pub fn request(
        &mut self,
        action: ConfirmAction,
        prompt: impl Into<String>,
        confirm_label: &'static str,
    ) {
        self.pending = Some(PendingConfirm {
            action,
            prompt: prompt.into(),
            confirm_label,
        });
    }

    /// The unresolved request, if any.
    pub fn pending(&self) -> Option<&PendingConfirm> {
        self.pending.as_ref()
    }

    /// Whether a request is awaiting resolution.
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve the pending request. Returns the action to commit only when
    /// `confirmed` is true; cancellation clears the request with no effect.
    pub fn resolve(&mut self, confirmed: bool) -> Option<ConfirmAction> {
        self.pending.take().filter(|_| confirmed).map(|p| p.action)
    }

    /// Render the pending request as a modal. Returns the action to commit,
    /// if the operator confirmed this frame.
    pub fn show(&mut self, ctx: &Context) -> Option<ConfirmAction> {
        let Some(pending) = self.pending.clone() else {
            return None;
        };

        let mut outcome: Option<bool> = None;

        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(&pending.prompt).size(16.0));
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        outcome = Some(false);
                    }
                    let confirm = egui::Button::new(
                        RichText::new(pending.confirm_label).color(DarkTheme::TEXT_PRIMARY),
                    )
                    .fill(DarkTheme::DANGER);
                    if ui.add(confirm).clicked() {
                        outcome = Some(true);
                    }
                });
                ui.add_space(4.0);
            });

        outcome.and_then(|confirmed| self.resolve(confirmed))
    }
}
