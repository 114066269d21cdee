//! Unit tests for the confirmation protocol.

use roadpilot_settings::ui::{ConfirmAction, ConfirmDialog};

#[test]
fn test_confirm_commits_action() {
    let mut dialog = ConfirmDialog::default();
    dialog.request(ConfirmAction::Reboot, "Are you sure?", "Reboot");

    assert!(dialog.is_open());
    assert_eq!(dialog.resolve(true), Some(ConfirmAction::Reboot));
    assert!(!dialog.is_open());
}

#[test]
fn test_cancel_aborts_with_no_action() {
    let mut dialog = ConfirmDialog::default();
    dialog.request(ConfirmAction::ResetCalibration, "Are you sure?", "Reset");

    assert_eq!(dialog.resolve(false), None);
    assert!(!dialog.is_open());
}

#[test]
fn test_resolve_without_request_is_none() {
    let mut dialog = ConfirmDialog::default();
    assert_eq!(dialog.resolve(true), None);
}

#[test]
fn test_new_request_replaces_pending_one() {
    let mut dialog = ConfirmDialog::default();
    dialog.request(ConfirmAction::Reboot, "Reboot?", "Reboot");
    dialog.request(ConfirmAction::PowerOff, "Power off?", "Power Off");

    assert_eq!(dialog.resolve(true), Some(ConfirmAction::PowerOff));
}

#[test]
fn test_pending_exposes_prompt() {
    let mut dialog = ConfirmDialog::default();
    dialog.request(
        ConfirmAction::SetToggle {
            key: "ExperimentalMode",
            on: true,
        },
        "Enable Experimental Mode?",
        "Confirm",
    );

    let pending = dialog.pending().expect("pending request");
    assert_eq!(pending.prompt, "Enable Experimental Mode?");
    assert_eq!(pending.confirm_label, "Confirm");
}
