//! Settings panels.
//!
//! The sidebar selects exactly one panel; the others are not rendered at
//! all. Each panel file owns its rows and renders them through the shared
//! entry walker below.

pub mod device;
pub mod display;
pub mod driving;
pub mod toggles;

pub use device::DevicePanel;
pub use display::DisplayPanel;
pub use driving::DrivingPanel;
pub use toggles::TogglesPanel;

use egui::Ui;

use crate::params::{ParamStore, ParamWriter};
use crate::settings::catalog::SettingEntry;
use crate::settings::format::UnitSystem;
use crate::ui::confirm::{ConfirmAction, ConfirmDialog};
use crate::ui::widgets::{StepAction, ToggleRow, ValueControl};

/// Panel selection for the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    /// Device identity and maintenance
    #[default]
    Device,
    /// Core feature toggles
    Toggles,
    /// Driving behavior controls
    Driving,
    /// Onroad display options
    Display,
}

impl PanelKind {
    /// Every panel, in sidebar order.
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Device,
        PanelKind::Toggles,
        PanelKind::Driving,
        PanelKind::Display,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            PanelKind::Device => "Device",
            PanelKind::Toggles => "Toggles",
            PanelKind::Driving => "Driving",
            PanelKind::Display => "Display",
        }
    }
}

/// Shared context handed to every panel each frame.
pub struct PanelContext<'a> {
    /// Persistent parameter store
    pub store: &'a dyn ParamStore,
    /// Volatile session store
    pub session: &'a dyn ParamStore,
    /// Fire-and-forget writer over the persistent store
    pub writer: &'a ParamWriter,
    /// Confirmation dialog shared across panels
    pub confirm: &'a mut ConfirmDialog,
    /// Unit system captured at startup
    pub units: UnitSystem,
}

/// Render a list of catalog entries and apply any mutation the operator
/// triggered this frame.
pub(crate) fn show_entries(ui: &mut Ui, ctx: &mut PanelContext<'_>, entries: &[SettingEntry]) {
    for entry in entries {
        match entry {
            SettingEntry::Toggle(t) => {
                let row = ToggleRow::new(t.title, t.description, t.is_set(ctx.store));
                if let Some(on) = row.show(ui) {
                    if t.confirm {
                        let verb = if on { "enable" } else { "disable" };
                        ctx.confirm.request(
                            ConfirmAction::SetToggle { key: t.key, on },
                            format!("Are you sure you want to {} {}?", verb, t.title),
                            "Confirm",
                        );
                    } else {
                        t.set(ctx.writer, ctx.session, on);
                    }
                }
            }
            SettingEntry::Bounded(b) => {
                let row = ValueControl::new(b.title, b.description, b.render(ctx.store, ctx.units));
                match row.show(ui) {
                    StepAction::Up => b.increment(ctx.store, ctx.session),
                    StepAction::Down => b.decrement(ctx.store, ctx.session),
                    StepAction::None => {}
                }
            }
            SettingEntry::Cycle(c) => {
                let row = ValueControl::new(c.title, c.description, c.render(ctx.store));
                match row.show(ui) {
                    StepAction::Up => c.next(ctx.store, ctx.session),
                    StepAction::Down => c.prev(ctx.store, ctx.session),
                    StepAction::None => {}
                }
            }
        }
        ui.separator();
    }
}
