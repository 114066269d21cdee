//! Unit test modules.

mod confirm_test;
mod config_test;
mod value_format_test;
