//! UI widgets for reusable components.

pub mod button_row;
pub mod label_row;
pub mod toggle_row;
pub mod value_control;

pub use button_row::ButtonRow;
pub use label_row::LabelRow;
pub use toggle_row::ToggleRow;
pub use value_control::{StepAction, ValueControl};
