//! Unit tests for value rendering rules.

use roadpilot_settings::settings::{UnitSystem, ValueFormat};

#[test]
fn test_raw_and_suffix() {
    assert_eq!(ValueFormat::Raw.render(-30, UnitSystem::Imperial), "-30");
    assert_eq!(
        ValueFormat::Suffix("%").render(120, UnitSystem::Imperial),
        "120%"
    );
}

#[test]
fn test_tenths_renders_decimals() {
    let f = ValueFormat::Tenths(" sec");
    assert_eq!(f.render(12, UnitSystem::Imperial), "1.2 sec");
    assert_eq!(f.render(5, UnitSystem::Imperial), "0.5 sec");
    // Whole values render without a trailing fraction.
    assert_eq!(f.render(10, UnitSystem::Imperial), "1 sec");
}

#[test]
fn test_labels_with_base_offset() {
    let f = ValueFormat::Labels {
        base: 1,
        labels: &["Eco", "Normal", "Sport"],
    };
    assert_eq!(f.render(1, UnitSystem::Imperial), "Eco");
    assert_eq!(f.render(3, UnitSystem::Imperial), "Sport");
}

#[test]
fn test_labels_pin_out_of_range_values() {
    let f = ValueFormat::Labels {
        base: 0,
        labels: &["None", "Path"],
    };
    assert_eq!(f.render(-5, UnitSystem::Imperial), "None");
    assert_eq!(f.render(9, UnitSystem::Imperial), "Path");
}

#[test]
fn test_speed_uses_unit_system() {
    let f = ValueFormat::Speed { zero: Some("Off") };
    assert_eq!(f.render(35, UnitSystem::Imperial), "35 mph");
    assert_eq!(f.render(35, UnitSystem::Metric), "35 km/h");
    assert_eq!(f.render(0, UnitSystem::Metric), "Off");
}

#[test]
fn test_speed_without_zero_label() {
    let f = ValueFormat::Speed { zero: None };
    assert_eq!(f.render(0, UnitSystem::Imperial), "0 mph");
}

#[test]
fn test_distance_uses_unit_system() {
    let f = ValueFormat::Distance { zero: Some("Off") };
    assert_eq!(f.render(3, UnitSystem::Imperial), "3 feet");
    assert_eq!(f.render(3, UnitSystem::Metric), "3 meters");
    assert_eq!(f.render(0, UnitSystem::Imperial), "Off");
}

#[test]
fn test_half_seconds() {
    assert_eq!(
        ValueFormat::HalfSeconds.render(0, UnitSystem::Imperial),
        "Instant"
    );
    assert_eq!(
        ValueFormat::HalfSeconds.render(1, UnitSystem::Imperial),
        "0.5 sec"
    );
    assert_eq!(
        ValueFormat::HalfSeconds.render(4, UnitSystem::Imperial),
        "2 sec"
    );
}

#[test]
fn test_shutdown_timer_encoding() {
    let f = ValueFormat::ShutdownTimer;
    assert_eq!(f.render(0, UnitSystem::Imperial), "Instant");
    assert_eq!(f.render(1, UnitSystem::Imperial), "15 mins");
    assert_eq!(f.render(3, UnitSystem::Imperial), "45 mins");
    assert_eq!(f.render(4, UnitSystem::Imperial), "1 hour");
    assert_eq!(f.render(5, UnitSystem::Imperial), "2 hours");
    assert_eq!(f.render(33, UnitSystem::Imperial), "30 hours");
}
