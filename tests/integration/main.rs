//! Integration test modules.

mod device_actions_test;
mod settings_flow_test;
