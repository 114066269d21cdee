//! egui user interface for the settings console.

pub mod confirm;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use confirm::{ConfirmAction, ConfirmDialog};
pub use panels::PanelKind;
pub use theme::Theme;
