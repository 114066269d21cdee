//! Main application state and egui integration.

use eframe::egui;
use std::sync::Arc;

use roadpilot_settings::config::AppConfig;
use roadpilot_settings::device;
use roadpilot_settings::params::{FileParamStore, ParamWriter, StoreHandle};
use roadpilot_settings::settings::{mark_updated, SettingsCatalog, UnitSystem};
use roadpilot_settings::ui::panels::{
    DevicePanel, DisplayPanel, DrivingPanel, PanelContext, PanelKind, TogglesPanel,
};
use roadpilot_settings::ui::{ConfirmAction, ConfirmDialog, Theme};

/// Session-store key asking the onroad UI to replay the training guide.
const TRAINING_GUIDE_KEY: &str = "ReviewTrainingGuide";

/// Main application state.
pub struct SettingsApp {
    /// Persistent parameter store
    store: StoreHandle,
    /// Volatile session store
    session: StoreHandle,
    /// Fire-and-forget writer over the persistent store
    writer: ParamWriter,
    /// Unit system captured at startup
    units: UnitSystem,
    /// Currently visible panel
    active_panel: PanelKind,
    /// Device panel state
    device_panel: DevicePanel,
    /// Toggles panel state
    toggles_panel: TogglesPanel,
    /// Driving panel state
    driving_panel: DrivingPanel,
    /// Display panel state
    display_panel: DisplayPanel,
    /// Confirmation dialog shared across panels
    confirm: ConfirmDialog,
}

impl SettingsApp {
    /// Construct the application, opening both stores and building the
    /// panels from the setting catalog.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        cc.egui_ctx.set_visuals(Theme::default().visuals());
        if config.ui.font_scale > 0.0 {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        let store: StoreHandle = Arc::new(FileParamStore::open(&config.params_dir)?);
        let session: StoreHandle = Arc::new(FileParamStore::open(&config.session_dir)?);
        let writer = ParamWriter::spawn(store.clone());

        let units = UnitSystem::from_store(store.as_ref());
        let catalog = SettingsCatalog::build(units);

        tracing::info!(
            "opened param store at {} ({} units)",
            config.params_dir.display(),
            units
        );

        Ok(Self {
            device_panel: DevicePanel::new(store.as_ref()),
            toggles_panel: TogglesPanel::new(catalog.toggles),
            driving_panel: DrivingPanel::new(catalog.driving),
            display_panel: DisplayPanel::new(catalog.display),
            store,
            session,
            writer,
            units,
            active_panel: PanelKind::default(),
            confirm: ConfirmDialog::default(),
        })
    }

    /// Commit a confirmed action.
    fn commit(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::Reboot => device::request_reboot(self.store.as_ref()),
            ConfirmAction::PowerOff => device::request_shutdown(self.store.as_ref()),
            ConfirmAction::ResetCalibration => device::reset_calibration(self.store.as_ref()),
            ConfirmAction::ReviewTrainingGuide => {
                self.session.put_bool(TRAINING_GUIDE_KEY, true);
            }
            ConfirmAction::SetToggle { key, on } => {
                self.writer.put_bool(key, on);
                mark_updated(self.session.as_ref());
            }
        }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = self.confirm.show(ctx) {
            self.commit(action);
        }
        let modal_open = self.confirm.is_open();

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| {
                    ui.add_space(12.0);
                    ui.heading("Settings");
                    ui.add_space(12.0);
                    for panel in PanelKind::ALL {
                        if ui
                            .selectable_label(panel == self.active_panel, panel.label())
                            .clicked()
                        {
                            self.active_panel = panel;
                        }
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    let mut panel_ctx = PanelContext {
                        store: self.store.as_ref(),
                        session: self.session.as_ref(),
                        writer: &self.writer,
                        confirm: &mut self.confirm,
                        units: self.units,
                    };

                    match self.active_panel {
                        PanelKind::Device => self.device_panel.show(ui, &mut panel_ctx),
                        PanelKind::Toggles => self.toggles_panel.show(ui, &mut panel_ctx),
                        PanelKind::Driving => self.driving_panel.show(ui, &mut panel_ctx),
                        PanelKind::Display => self.display_panel.show(ui, &mut panel_ctx),
                    }
                });
            });
        });
    }
}

impl Drop for SettingsApp {
    fn drop(&mut self) {
        // Drain queued writes before the process goes away.
        self.writer.flush();
    }
}
