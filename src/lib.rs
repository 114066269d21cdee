//! RoadPilot Settings Console
//!
//! Settings and preferences UI for the RoadPilot driver-assistance platform.
//! Presents panels for driving behavior, speed limit handling, display options,
//! and device maintenance, all backed by the key-value parameter store shared
//! with the rest of the platform.

pub mod config;
pub mod device;
pub mod params;
pub mod settings;
pub mod ui;

// Re-export commonly used types
pub use params::{FileParamStore, MemoryParamStore, ParamStore, ParamWriter, StoreHandle};
pub use settings::catalog::SettingsCatalog;
pub use settings::format::UnitSystem;
